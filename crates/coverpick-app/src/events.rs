use std::sync::Arc;
use std::time::Duration;

use coverpick_core::{AppEvent, CopyTicket, Effect, PendingLookup, WidgetController, handle_ui_event};
use coverpick_lookup::ThumbnailLookup;
use coverpick_ui::View;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// App's main loop. Owns the widget controller; every state change happens here.
pub async fn event_loop(
    state: Arc<AppState>,
    lookup: Arc<dyn ThumbnailLookup>,
    events_rx: AsyncReceiver<AppEvent>,
    events_tx: AsyncSender<AppEvent>,
    view_tx: AsyncSender<View>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let copy_ack = {
        let config = state.config.read().await;
        config.ui.copy_ack()
    };

    let mut controller = WidgetController::new();
    let mut in_flight: Option<JoinHandle<()>> = None;

    tracing::info!("[EVENT_LOOP] Using lookup service at {}", lookup.endpoint());
    view_tx.send(View::project(&controller)).await?;

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = events_rx.recv() => event?,
        };

        tracing::debug!("[EVENT_LOOP] Event: {:?}", event);

        match event {
            AppEvent::Ui(ui_event) => match handle_ui_event(&mut controller, ui_event) {
                Effect::None => {}
                Effect::Lookup(pending) => {
                    // Only the newest lookup stays on the wire
                    if let Some(previous) = in_flight.take() {
                        previous.abort();
                    }
                    in_flight = Some(spawn_lookup(lookup.clone(), pending, events_tx.clone()));
                }
                Effect::Copy(ticket) => {
                    spawn_copy(ticket, copy_ack, events_tx.clone());
                }
                Effect::Close => {
                    tracing::info!("[EVENT_LOOP] Close requested");
                    cancel.cancel();
                    break;
                }
            },
            AppEvent::LookupFinished {
                generation,
                outcome,
            } => {
                controller.finish(generation, outcome);
            }
            AppEvent::CopyAckExpired(ack) => controller.expire_copy_ack(ack),
        }

        // Outside Loading no lookup result can be applied any more
        if !controller.state().is_loading()
            && let Some(previous) = in_flight.take()
        {
            previous.abort();
        }

        if view_tx.send(View::project(&controller)).await.is_err() {
            tracing::debug!("[EVENT_LOOP] UI loop gone, stopping");
            break;
        }
    }

    if let Some(previous) = in_flight.take() {
        previous.abort();
    }

    Ok(())
}

fn spawn_lookup(
    lookup: Arc<dyn ThumbnailLookup>,
    pending: PendingLookup,
    events_tx: AsyncSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = lookup.lookup(&pending.query).await;
        let event = AppEvent::LookupFinished {
            generation: pending.generation,
            outcome,
        };
        if let Err(e) = events_tx.send(event).await {
            tracing::debug!("Dropping lookup result, event loop is gone: {}", e);
        }
    })
}

/// Best-effort clipboard write, then end the acknowledgement after `ack_for`
fn spawn_copy(ticket: CopyTicket, ack_for: Duration, events_tx: AsyncSender<AppEvent>) {
    tokio::spawn(async move {
        if let Err(e) = coverpick_io::clipboard::copy_text_async(ticket.url).await {
            tracing::debug!("Clipboard unavailable: {}", e);
        }

        tokio::time::sleep(ack_for).await;
        let _ = events_tx.send(AppEvent::CopyAckExpired(ticket.ack)).await;
    });
}
