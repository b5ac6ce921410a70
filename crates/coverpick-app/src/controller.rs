use std::sync::Arc;

use coverpick_core::AppEvent;
use coverpick_lookup::ThumbnailLookup;
use coverpick_ui::View;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::watcher_io;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub events: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub views: (AsyncSender<View>, AsyncReceiver<View>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            events: kanal::bounded_async(64), // user input and lookup completions
            views: kanal::bounded_async(16),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self, lookup: Arc<dyn ThumbnailLookup>) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            lookup,
            self.channels.events.1.clone(),
            self.channels.events.0.clone(),
            self.channels.views.0.clone(),
            // /quit ends the whole app, so this one gets the parent token
            self.cancel_token.clone(),
        ));

        // UI loop
        tasks.spawn(ui_loop(
            self.state.clone(),
            self.channels.views.1.clone(),
            self.cancel_token.child_token(),
        ));

        // Line input runs on its own thread, stdin reads block
        watcher_io(self.channels.events.0.clone());

        tasks
    }

    /// Resolves once any task cancelled the app (e.g. on /quit)
    pub async fn cancelled(&self) {
        self.cancel_token.cancelled().await
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
