use kanal::AsyncSender;
use nafham_core::{PhraseMatcher, SearchSession};
use nafham_types::AppEvent;

use crate::events::publish;
use crate::state::AppState;

/// Apply a runtime config change and rebuild the matcher from it.
/// Invalid updates are logged and leave the session untouched.
pub async fn handle_config_update(
    state: &AppState,
    session: &mut SearchSession,
    field: &str,
    value: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let matcher = {
        let mut config = state.config.write().await;
        if let Err(e) = config.set_field(field, value) {
            tracing::warn!("Ignoring config update: {}", e);
            return Ok(());
        }
        tracing::info!("Config updated: {} = {}", field, value);
        PhraseMatcher::from_config(&config)
    };

    session.set_matcher(matcher);
    publish(session, app_to_ui_tx).await
}
