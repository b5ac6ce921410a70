use coverpick_lookup::Candidate;

use crate::error::WidgetError;

/// Two or more candidates, in the order the service ranked them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choices(Vec<Candidate>);

impl Choices {
    /// `None` unless there are at least two candidates
    pub fn new(candidates: Vec<Candidate>) -> Option<Self> {
        (candidates.len() >= 2).then_some(Choices(candidates))
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.0.get(index)
    }
}

/// The widget's single source of UI truth
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Single(Candidate),
    MultipleChoice(Choices),
}

impl ResultState {
    pub fn error(err: impl Into<WidgetError>) -> Self {
        ResultState::Error(err.into().to_string())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ResultState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ResultState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Short tag for log lines
    pub fn name(&self) -> &'static str {
        match self {
            ResultState::Idle => "idle",
            ResultState::Loading => "loading",
            ResultState::Error(_) => "error",
            ResultState::Single(_) => "single",
            ResultState::MultipleChoice(_) => "multiple-choice",
        }
    }
}

pub fn reduce(mut candidates: Vec<Candidate>) -> ResultState {
    match candidates.len() {
        0 => ResultState::error(WidgetError::NoResults),
        1 => ResultState::Single(candidates.remove(0)),
        _ => match Choices::new(candidates) {
            Some(choices) => ResultState::MultipleChoice(choices),
            None => ResultState::error(WidgetError::NoResults),
        },
    }
}
