use serde::{Deserialize, Serialize};

fn default_embedded() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PhrasebookConfig {
    /// Load the phrase set compiled into the language pack
    #[serde(default = "default_embedded")]
    pub embedded: bool,
    /// Extra JSON phrase files merged after the embedded set
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl Default for PhrasebookConfig {
    fn default() -> Self {
        Self {
            embedded: default_embedded(),
            additional_paths: vec![],
        }
    }
}
