use nafham_core::SearchSession;

use crate::render::render_view;
use crate::state::AppState;

/// Run a single search with the configured direction and format the result
pub async fn run_once(state: &AppState, query: &str, json: bool) -> anyhow::Result<String> {
    let direction = state.config.read().await.search.default_direction;
    let mut session = SearchSession::new(state.phrases.clone(), state.matcher().await, direction);
    session.set_query(query);

    let view = session.view();
    tracing::debug!("One-shot search '{}': {} results", query, view.results.len());

    if json {
        let mut out = serde_json::to_string_pretty(&view)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(render_view(&view, &state.pack))
    }
}
