
use std::sync::Mutex;

use coverpick_lookup::{Candidate, LookupError, SearchQuery, ThumbnailLookup};

pub(crate) fn candidate(n: u32) -> Candidate {
    Candidate {
        thumbnail_url: format!("https://images.example/{n}.jpg"),
        title: format!("Book {n}"),
        source_url: Some(format!("https://shop.example/dp/{n}")),
        id: Some(format!("ASIN{n:06}")),
    }
}

/// Lookup that answers every query with the same outcome and records what
/// it was asked
pub(crate) struct ScriptedLookup {
    outcome: Result<Vec<Candidate>, LookupError>,
    pub queries: Mutex<Vec<SearchQuery>>,
}

impl ScriptedLookup {
    pub fn new(outcome: Result<Vec<Candidate>, LookupError>) -> Self {
        Self {
            outcome,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ThumbnailLookup for ScriptedLookup {
    async fn lookup(&self, query: &SearchQuery) -> Result<Vec<Candidate>, LookupError> {
        self.queries.lock().unwrap().push(query.clone());
        self.outcome.clone()
    }

    fn endpoint(&self) -> &str {
        "scripted://lookup"
    }
}
