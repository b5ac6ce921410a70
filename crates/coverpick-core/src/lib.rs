pub mod controller;
pub mod error;
pub mod events;
pub mod state;

#[cfg(test)]
mod tests;

pub use controller::{CopyTicket, PendingLookup, WidgetController};
pub use error::{SelectionError, WidgetError};
pub use events::{AppEvent, Effect, UiEvent, handle_ui_event};
pub use state::{Choices, ResultState, reduce};

pub use coverpick_lookup::{Candidate, LookupError, SearchQuery, ValidationError};
