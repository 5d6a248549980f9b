use std::sync::Arc;

use nafham_config::Config;
use nafham_core::PhraseMatcher;
use nafham_lang_arabic::ArabicPack;
use nafham_types::PhraseEntry;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub phrases: Arc<[PhraseEntry]>,
    pub pack: ArabicPack,
}

impl AppState {
    pub fn new(config: Config, phrases: Arc<[PhraseEntry]>) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            phrases,
            pack: ArabicPack,
        }
    }

    /// Matcher built from the current config
    pub async fn matcher(&self) -> PhraseMatcher {
        let config = self.config.read().await;
        PhraseMatcher::from_config(&config)
    }
}
