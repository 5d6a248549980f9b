use std::ops::ControlFlow;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use nafham_core::SearchSession;
use nafham_types::{AppEvent, UiEvent};

use crate::state::AppState;

pub mod config_update;
pub mod direction;
pub mod search_text;

use config_update::handle_config_update;
use direction::handle_direction;
use search_text::handle_search_text;

/// App's main loop. Owns the search session and republishes results after
/// every input event.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut session = {
        let direction = state.config.read().await.search.default_direction;
        SearchSession::new(state.phrases.clone(), state.matcher().await, direction)
    };

    tracing::info!(
        "[EVENT_LOOP] Starting main loop with {} phrases",
        state.phrases.len()
    );
    app_to_ui_tx.send(AppEvent::BackendReady).await?;
    publish(&mut session, &app_to_ui_tx).await?;

    loop {
        let Ok(event) = ui_to_app_rx.recv().await else {
            tracing::info!("[EVENT_LOOP] Input channel closed");
            break;
        };

        tracing::debug!("[EVENT_LOOP] EVENT RECEIVED: {:?}", event);
        let flow = handle_events(&state, &mut session, &app_to_ui_tx, event).await?;
        if flow.is_break() {
            // let the view drain what it already has before stopping
            let _ = app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Close)).await;
            break;
        }
    }

    tracing::info!(
        "[EVENT_LOOP] Stopped after {} recomputations",
        session.recomputations()
    );
    Ok(())
}

async fn handle_events(
    state: &AppState,
    session: &mut SearchSession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<ControlFlow<()>> {
    match event {
        AppEvent::UiEvent(UiEvent::SearchText(text)) => {
            handle_search_text(session, text, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::ClearQuery) => {
            handle_search_text(session, String::new(), app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::SetDirection(direction)) => {
            handle_direction(session, Some(direction), app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::ToggleDirection) => {
            handle_direction(session, None, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::Close) => {
            tracing::info!("[EVENT_LOOP] Close requested");
            return Ok(ControlFlow::Break(()));
        }
        AppEvent::ConfigUpdate { field, value } => {
            handle_config_update(state, session, &field, &value, app_to_ui_tx).await?;
        }
        AppEvent::ShowResults(_) | AppEvent::BackendReady => {
            // UI-only events
        }
    }

    Ok(ControlFlow::Continue(()))
}

/// Send the current result set to the view
pub(crate) async fn publish(
    session: &mut SearchSession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let view = session.view();
    tracing::debug!("Publishing {} results", view.results.len());
    app_to_ui_tx.send(AppEvent::ShowResults(view)).await?;
    Ok(())
}
