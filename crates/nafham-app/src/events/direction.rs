use kanal::AsyncSender;
use nafham_core::SearchSession;
use nafham_types::{AppEvent, SearchDirection};

use crate::events::publish;

/// Set the direction, or flip it when `direction` is None
pub async fn handle_direction(
    session: &mut SearchSession,
    direction: Option<SearchDirection>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match direction {
        Some(direction) => {
            session.set_direction(direction);
        }
        None => {
            session.toggle_direction();
        }
    }
    tracing::debug!("Direction is now {}", session.direction());

    publish(session, app_to_ui_tx).await
}
