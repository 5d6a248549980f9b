mod event_loop_tests;
mod oneshot_tests;

use std::sync::Arc;

use nafham_config::Config;
use nafham_core::phrasebook::Phrasebook;
use nafham_lang_arabic::ArabicPhrasebookLoader;

use crate::state::AppState;

/// State over the embedded phrase set
pub(crate) fn embedded_state(config: Config) -> Arc<AppState> {
    let book = ArabicPhrasebookLoader::load_embedded().expect("embedded phrasebook");
    Arc::new(AppState::new(config, book.shared()))
}
