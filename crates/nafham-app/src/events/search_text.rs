use kanal::AsyncSender;
use nafham_core::SearchSession;
use nafham_types::AppEvent;

use crate::events::publish;

pub async fn handle_search_text(
    session: &mut SearchSession,
    text: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if session.set_query(text) {
        tracing::debug!("Query changed: '{}'", session.query());
    } else {
        tracing::debug!("Query unchanged, reusing results");
    }

    publish(session, app_to_ui_tx).await
}
