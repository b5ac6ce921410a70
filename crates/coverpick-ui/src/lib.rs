pub mod markup;
pub mod terminal;
pub mod view;

pub use markup::render_html;
pub use terminal::render_text;
pub use view::{CandidateCard, Results, View};
