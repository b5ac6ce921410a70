use coverpick_lookup::{Candidate, LookupError};

use crate::controller::{CopyTicket, PendingLookup, WidgetController};

/// User actions coming from the widget surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Submit control pressed (or Enter in the query field)
    Submit(String),
    SubmitIsbn(String),
    /// Selection action on the candidate card at this index
    Select(usize),
    Copy,
    Clear,
    Close,
}

#[derive(Debug)]
pub enum AppEvent {
    Ui(UiEvent),
    LookupFinished {
        generation: u64,
        outcome: Result<Vec<Candidate>, LookupError>,
    },
    CopyAckExpired(u64),
}

/// Work the event loop must carry out after a UI event
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Lookup(PendingLookup),
    Copy(CopyTicket),
    Close,
}

/// Route a UI event to the controller operation it stands for
pub fn handle_ui_event(controller: &mut WidgetController, event: UiEvent) -> Effect {
    match event {
        UiEvent::Submit(text) => controller.submit(&text).map_or(Effect::None, Effect::Lookup),
        UiEvent::SubmitIsbn(text) => controller
            .submit_isbn(&text)
            .map_or(Effect::None, Effect::Lookup),
        UiEvent::Select(index) => {
            if let Err(e) = controller.select(index) {
                tracing::warn!("Ignoring selection: {}", e);
            }
            Effect::None
        }
        UiEvent::Copy => controller
            .copy_selected_url()
            .map_or(Effect::None, Effect::Copy),
        UiEvent::Clear => {
            controller.clear();
            Effect::None
        }
        UiEvent::Close => Effect::Close,
    }
}
