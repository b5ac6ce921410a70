use serde::Deserialize;

use crate::{Candidate, LookupError, UNKNOWN_TITLE};

/// Success bodies the lookup service is known to send
#[derive(Deserialize)]
#[serde(untagged)]
enum LookupResponse {
    Candidates {
        candidates: Vec<WireCandidate>,
    },
    /// Older deployments answer with a single thumbnail
    Legacy {
        thumbnail_url: String,
        #[serde(default)]
        title: Option<String>,
    },
}

#[derive(Deserialize)]
struct WireCandidate {
    thumbnail_url: Option<String>,
    title: Option<String>,
    url: Option<String>,
    asin: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

fn title_or_placeholder(title: Option<String>) -> String {
    title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string())
}

/// Normalize a success body into candidates, keeping service order
pub(crate) fn normalize(body: &str) -> Result<Vec<Candidate>, LookupError> {
    let response: LookupResponse =
        serde_json::from_str(body).map_err(|_| LookupError::UnexpectedResponseShape)?;

    match response {
        LookupResponse::Candidates { candidates } => {
            let total = candidates.len();
            let normalized: Vec<Candidate> = candidates
                .into_iter()
                .filter_map(|c| {
                    let thumbnail_url = c.thumbnail_url.filter(|u| !u.is_empty())?;
                    Some(Candidate {
                        thumbnail_url,
                        title: title_or_placeholder(c.title),
                        source_url: c.url,
                        id: c.asin,
                    })
                })
                .collect();

            if normalized.len() < total {
                tracing::warn!(
                    "Dropped {} candidates without a thumbnail_url",
                    total - normalized.len()
                );
            }

            Ok(normalized)
        }
        LookupResponse::Legacy {
            thumbnail_url,
            title,
        } => {
            if thumbnail_url.is_empty() {
                return Err(LookupError::UnexpectedResponseShape);
            }

            Ok(vec![Candidate {
                thumbnail_url,
                title: title_or_placeholder(title),
                source_url: None,
                id: None,
            }])
        }
    }
}

/// Message for a non-success response. A JSON body is read for its `error`
/// field; any other body is used verbatim. Empty results fall back to the
/// status code.
pub(crate) fn service_error_message(status: u16, body: &str) -> String {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error.unwrap_or_default(),
        Err(_) => body.to_string(),
    };

    let message = message.trim();
    if message.is_empty() {
        return format!("HTTP error: status {status}");
    }

    message.to_string()
}
