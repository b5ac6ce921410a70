use coverpick_core::{ResultState, WidgetController};

pub const COPY_LABEL: &str = "Copy URL";
pub const COPIED_LABEL: &str = "Copied!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateCard {
    pub index: usize,
    pub image_url: String,
    pub title: String,
}

/// What the results region shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Results {
    Hidden,
    /// Image preview plus the copyable URL field
    Preview { image_url: String, url_field: String },
    Gallery(Vec<CandidateCard>),
}

/// Everything visible in the widget, derived from controller state alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub query_input: String,
    pub input_focused: bool,
    pub search_enabled: bool,
    pub busy: bool,
    pub error: Option<String>,
    pub results: Results,
    pub copy_label: &'static str,
}

impl View {
    pub fn project(controller: &WidgetController) -> Self {
        let state = controller.state();

        let results = match state {
            ResultState::Single(candidate) => Results::Preview {
                image_url: candidate.thumbnail_url.clone(),
                url_field: candidate.thumbnail_url.clone(),
            },
            ResultState::MultipleChoice(choices) => Results::Gallery(
                choices
                    .as_slice()
                    .iter()
                    .enumerate()
                    .map(|(index, c)| CandidateCard {
                        index,
                        image_url: c.thumbnail_url.clone(),
                        title: c.title.clone(),
                    })
                    .collect(),
            ),
            ResultState::Idle | ResultState::Loading | ResultState::Error(_) => Results::Hidden,
        };

        let copy_label = if controller.copy_acknowledged() {
            COPIED_LABEL
        } else {
            COPY_LABEL
        };

        View {
            query_input: controller.input().to_string(),
            input_focused: controller.is_input_focused(),
            search_enabled: !state.is_loading(),
            busy: state.is_loading(),
            error: state.error_message().map(str::to_string),
            results,
            copy_label,
        }
    }
}
