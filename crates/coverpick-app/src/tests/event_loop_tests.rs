use std::sync::Arc;
use std::time::Duration;

use coverpick_config::Config;
use coverpick_core::{AppEvent, UiEvent};
use coverpick_lookup::{Candidate, LookupError, SearchQuery, ThumbnailLookup};
use coverpick_ui::view::{COPIED_LABEL, COPY_LABEL};
use coverpick_ui::{Results, View};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

fn candidate(name: &str) -> Candidate {
    Candidate {
        thumbnail_url: format!("https://images.example/{name}.jpg"),
        title: name.to_string(),
        source_url: None,
        id: None,
    }
}

/// Answers with one candidate named after the query; titles starting with
/// "slow" take a while
struct EchoLookup;

#[async_trait::async_trait]
impl ThumbnailLookup for EchoLookup {
    async fn lookup(&self, query: &SearchQuery) -> Result<Vec<Candidate>, LookupError> {
        let text = query.as_str();
        if text.starts_with("slow") {
            tokio::time::sleep(Duration::from_millis(300)).await;
        }
        match text {
            "many" => Ok(vec![candidate("a"), candidate("b"), candidate("c")]),
            "none" => Ok(vec![]),
            _ => Ok(vec![candidate(text)]),
        }
    }

    fn endpoint(&self) -> &str {
        "echo://lookup"
    }
}

struct Harness {
    events: AsyncSender<AppEvent>,
    views: AsyncReceiver<View>,
    cancel: CancellationToken,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl Harness {
    fn start(config: Config) -> Self {
        let (events_tx, events_rx) = kanal::bounded_async(64);
        let (views_tx, views_rx) = kanal::bounded_async(64);
        let cancel = CancellationToken::new();

        let handle = tokio::spawn(event_loop(
            Arc::new(AppState::new(config)),
            Arc::new(EchoLookup),
            events_rx,
            events_tx.clone(),
            views_tx,
            cancel.clone(),
        ));

        Self {
            events: events_tx,
            views: views_rx,
            cancel,
            handle,
        }
    }

    async fn send(&self, event: UiEvent) {
        self.events.send(AppEvent::Ui(event)).await.expect("send failed");
    }

    /// Wait for the first view matching `pred`
    async fn view_where(&self, pred: impl Fn(&View) -> bool) -> View {
        timeout(Duration::from_secs(2), async {
            loop {
                let view = self.views.recv().await.expect("view channel closed");
                if pred(&view) {
                    return view;
                }
            }
        })
        .await
        .expect("Timeout - expected view never arrived")
    }
}

fn preview_of(view: &View) -> Option<&str> {
    match &view.results {
        Results::Preview { image_url, .. } => Some(image_url),
        _ => None,
    }
}

#[tokio::test]
async fn test_search_goes_loading_then_single() {
    let harness = Harness::start(Config::default());

    let initial = harness.view_where(|_| true).await;
    assert!(initial.input_focused);
    assert_eq!(initial.results, Results::Hidden);

    harness.send(UiEvent::Submit("Kitchen".to_string())).await;

    let loading = harness.view_where(|v| v.busy).await;
    assert!(!loading.search_enabled);

    let done = harness.view_where(|v| !v.busy).await;
    assert_eq!(preview_of(&done), Some("https://images.example/Kitchen.jpg"));
}

#[tokio::test]
async fn test_gallery_selection() {
    let harness = Harness::start(Config::default());

    harness.send(UiEvent::Submit("many".to_string())).await;
    let gallery = harness
        .view_where(|v| matches!(v.results, Results::Gallery(_)))
        .await;
    let Results::Gallery(cards) = gallery.results else {
        unreachable!()
    };
    assert_eq!(cards.len(), 3);

    harness.send(UiEvent::Select(1)).await;
    let picked = harness.view_where(|v| preview_of(v).is_some()).await;
    assert_eq!(preview_of(&picked), Some("https://images.example/b.jpg"));
}

#[tokio::test]
async fn test_last_search_wins() {
    let harness = Harness::start(Config::default());

    harness.send(UiEvent::Submit("slow first".to_string())).await;
    harness.send(UiEvent::Submit("second".to_string())).await;

    let done = harness.view_where(|v| preview_of(v).is_some()).await;
    assert_eq!(preview_of(&done), Some("https://images.example/second.jpg"));

    // nothing from the slow search may show up afterwards
    let late = timeout(Duration::from_millis(500), harness.views.recv()).await;
    assert!(late.is_err(), "unexpected view: {late:?}");
}

#[tokio::test]
async fn test_empty_results_show_error() {
    let harness = Harness::start(Config::default());

    harness.send(UiEvent::Submit("none".to_string())).await;

    let view = harness.view_where(|v| v.error.is_some()).await;
    assert_eq!(view.error.as_deref(), Some("no thumbnail found"));
    assert_eq!(view.results, Results::Hidden);
}

#[tokio::test]
async fn test_copy_ack_expires() {
    let mut config = Config::default();
    config.ui.copy_ack_ms = 50;
    let harness = Harness::start(config);

    harness.send(UiEvent::Submit("Kitchen".to_string())).await;
    harness.view_where(|v| preview_of(v).is_some()).await;

    harness.send(UiEvent::Copy).await;
    harness.view_where(|v| v.copy_label == COPIED_LABEL).await;

    let after = harness.view_where(|v| v.copy_label == COPY_LABEL).await;
    assert!(preview_of(&after).is_some());
}

#[tokio::test]
async fn test_clear_then_close() {
    let harness = Harness::start(Config::default());

    harness.send(UiEvent::Submit("Kitchen".to_string())).await;
    harness.view_where(|v| preview_of(v).is_some()).await;

    harness.send(UiEvent::Clear).await;
    let cleared = harness
        .view_where(|v| v.results == Results::Hidden)
        .await;
    assert_eq!(cleared.query_input, "");
    assert_eq!(cleared.error, None);
    assert!(cleared.input_focused);

    harness.send(UiEvent::Close).await;
    let result = timeout(Duration::from_secs(2), harness.handle)
        .await
        .expect("event loop did not stop")
        .expect("event loop panicked");
    assert!(result.is_ok());
    assert!(harness.cancel.is_cancelled());
}
