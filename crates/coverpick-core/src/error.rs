use coverpick_lookup::{LookupError, ValidationError};

/// Everything that ends up in the widget's error display
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("no thumbnail found")]
    NoResults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("there are no candidates to choose from")]
    NotChoosing,

    #[error("candidate {index} does not exist ({len} available)")]
    OutOfRange { index: usize, len: usize },
}
