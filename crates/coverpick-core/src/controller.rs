use coverpick_lookup::{Candidate, LookupError, SearchQuery, ThumbnailLookup, ValidationError};

use crate::error::{SelectionError, WidgetError};
use crate::state::{ResultState, reduce};

/// A lookup the controller is waiting on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    pub generation: u64,
    pub query: SearchQuery,
}

/// URL to put on the clipboard, plus the token that ends its acknowledgement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTicket {
    pub url: String,
    pub ack: u64,
}

/// Owns the widget state. Every transition goes through one of the methods
/// below; nothing else mutates it.
#[derive(Debug)]
pub struct WidgetController {
    state: ResultState,
    input: String,
    input_focused: bool,
    /// Bumped on every submission; responses from older generations are dropped
    generation: u64,
    copy_seq: u64,
    copy_ack: Option<u64>,
}

impl Default for WidgetController {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetController {
    pub fn new() -> Self {
        Self {
            state: ResultState::Idle,
            input: String::new(),
            input_focused: true,
            generation: 0,
            copy_seq: 0,
            copy_ack: None,
        }
    }

    pub fn state(&self) -> &ResultState {
        &self.state
    }

    /// Current contents of the query field
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_input_focused(&self) -> bool {
        self.input_focused
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the "copied" acknowledgement is showing
    pub fn copy_acknowledged(&self) -> bool {
        self.copy_ack.is_some()
    }

    /// Submit the query field as a title search
    pub fn submit(&mut self, raw: &str) -> Option<PendingLookup> {
        self.input = raw.to_string();
        self.begin(SearchQuery::title(raw))
    }

    /// Submit the query field as an ISBN search
    pub fn submit_isbn(&mut self, raw: &str) -> Option<PendingLookup> {
        self.input = raw.to_string();
        self.begin(SearchQuery::isbn(raw))
    }

    fn begin(&mut self, query: Result<SearchQuery, ValidationError>) -> Option<PendingLookup> {
        // Any submission, valid or not, supersedes whatever is in flight
        self.generation += 1;
        self.copy_ack = None;

        match query {
            Ok(query) => {
                tracing::debug!("Lookup #{} started: {:?}", self.generation, query);
                self.state = ResultState::Loading;
                Some(PendingLookup {
                    generation: self.generation,
                    query,
                })
            }
            Err(err) => {
                tracing::debug!("Rejected submission: {}", err);
                self.state = ResultState::error(err);
                None
            }
        }
    }

    /// Apply a lookup outcome. Returns `false` when the outcome belongs to a
    /// superseded search and was discarded.
    pub fn finish(
        &mut self,
        generation: u64,
        outcome: Result<Vec<Candidate>, LookupError>,
    ) -> bool {
        if generation != self.generation || !self.state.is_loading() {
            tracing::debug!(
                "Discarding stale lookup #{} (current #{}, state {})",
                generation,
                self.generation,
                self.state.name()
            );
            return false;
        }

        self.state = match outcome {
            Ok(candidates) => {
                tracing::info!("Lookup #{} returned {} candidates", generation, candidates.len());
                reduce(candidates)
            }
            Err(err) => {
                tracing::warn!("Lookup #{} failed: {}", generation, err);
                ResultState::error(WidgetError::Lookup(err))
            }
        };

        true
    }

    /// Pick one candidate out of a multiple-choice result
    pub fn select(&mut self, index: usize) -> Result<Candidate, SelectionError> {
        let ResultState::MultipleChoice(choices) = &self.state else {
            return Err(SelectionError::NotChoosing);
        };

        let candidate = choices
            .get(index)
            .cloned()
            .ok_or(SelectionError::OutOfRange {
                index,
                len: choices.len(),
            })?;

        tracing::debug!("Selected candidate {}: {}", index, candidate.title);
        self.state = ResultState::Single(candidate.clone());
        self.input_focused = false;

        Ok(candidate)
    }

    /// Back to a blank widget with the query field focused
    pub fn clear(&mut self) {
        if !matches!(self.state, ResultState::Idle) {
            // drop interest in anything still in flight
            self.generation += 1;
        }

        self.state = ResultState::Idle;
        self.input.clear();
        self.input_focused = true;
        self.copy_ack = None;
    }

    /// Hand out the selected thumbnail URL and start the acknowledgement.
    /// `None` unless a single result is showing.
    pub fn copy_selected_url(&mut self) -> Option<CopyTicket> {
        let ResultState::Single(candidate) = &self.state else {
            return None;
        };

        self.copy_seq += 1;
        self.copy_ack = Some(self.copy_seq);
        self.input_focused = false;

        Some(CopyTicket {
            url: candidate.thumbnail_url.clone(),
            ack: self.copy_seq,
        })
    }

    /// End the acknowledgement started by the copy with token `ack`
    pub fn expire_copy_ack(&mut self, ack: u64) {
        if self.copy_ack == Some(ack) {
            self.copy_ack = None;
        }
    }

    /// Submit and await the lookup in one go
    pub async fn search<L>(&mut self, lookup: &L, raw: &str) -> &ResultState
    where
        L: ThumbnailLookup + ?Sized,
    {
        if let Some(pending) = self.submit(raw) {
            let outcome = lookup.lookup(&pending.query).await;
            self.finish(pending.generation, outcome);
        }

        &self.state
    }
}
