/// A validated lookup query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Trimmed, non-empty book title
    Title(String),
    /// ISBN-10 or ISBN-13 with separators removed
    Isbn(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("please enter a title")]
    EmptyTitle,

    #[error("please enter an ISBN")]
    EmptyIsbn,
}

impl SearchQuery {
    pub fn title(raw: &str) -> Result<Self, ValidationError> {
        let title = raw.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        Ok(SearchQuery::Title(title.to_string()))
    }

    pub fn isbn(raw: &str) -> Result<Self, ValidationError> {
        let isbn: String = raw
            .chars()
            .filter(|c| *c != '-' && !c.is_whitespace())
            .collect();
        if isbn.is_empty() {
            return Err(ValidationError::EmptyIsbn);
        }

        Ok(SearchQuery::Isbn(isbn))
    }

    /// The text the query was built from, as shown back to the user
    pub fn as_str(&self) -> &str {
        match self {
            SearchQuery::Title(text) | SearchQuery::Isbn(text) => text,
        }
    }
}
