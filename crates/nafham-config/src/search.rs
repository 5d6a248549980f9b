use nafham_types::SearchDirection;
use serde::{Deserialize, Serialize};

fn default_preview_limit() -> usize {
    5
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of entries shown while the query is empty
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
    #[serde(default)]
    pub default_direction: SearchDirection,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            preview_limit: default_preview_limit(),
            default_direction: SearchDirection::default(),
        }
    }
}
