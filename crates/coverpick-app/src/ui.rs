use std::sync::Arc;

use anyhow::Context;
use coverpick_ui::{View, render_html, render_text};
use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Draws every view the event loop produces
pub async fn ui_loop(
    state: Arc<AppState>,
    view_rx: AsyncReceiver<View>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let html_out = {
        let config = state.config.read().await;
        config.ui.html_out.clone()
    };

    if let Some(path) = &html_out {
        tracing::info!("Writing widget markup to {}", path);
    }

    loop {
        let view = tokio::select! {
            _ = cancel.cancelled() => break,
            view = view_rx.recv() => match view {
                Ok(view) => view,
                Err(_) => break,
            },
        };

        println!("{}", render_text(&view));

        if let Some(path) = &html_out {
            let markup = render_html(&view).context("Failed to render widget markup")?;
            tokio::fs::write(path, markup)
                .await
                .with_context(|| format!("Failed to write markup to {path}"))?;
        }
    }

    Ok(())
}
