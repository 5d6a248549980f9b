use std::sync::Arc;

use nafham_core::phrasebook::{
    LoadError, Phrasebook, PhrasebookMetadata, merge_entries, validate_entries,
};
use nafham_types::PhraseEntry;
use serde::Deserialize;

// JSON layout of a phrase file
#[derive(Debug, Deserialize)]
struct PhrasebookJson {
    #[serde(default = "default_name")]
    name: String,
    #[serde(default = "default_version")]
    version: String,
    #[serde(default = "default_language")]
    language: String,
    phrases: Vec<PhraseEntry>,
}

fn default_name() -> String {
    "Phrasebook".to_string()
}

fn default_version() -> String {
    "0.0.0".to_string()
}

fn default_language() -> String {
    "ar".to_string()
}

/// English/Arabic phrasebook
#[derive(Debug, Clone)]
pub struct ArabicPhrasebook {
    name: String,
    version: String,
    entries: Arc<[PhraseEntry]>,
}

impl ArabicPhrasebook {
    pub fn new() -> Self {
        Self::from_entries("Phrasebook", Vec::new())
    }

    pub fn from_entries(name: impl Into<String>, entries: Vec<PhraseEntry>) -> Self {
        Self {
            name: name.into(),
            version: default_version(),
            entries: Arc::from(entries),
        }
    }

    /// Parse a phrase file. Every entry must have all four fields filled in.
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: PhrasebookJson =
            serde_json::from_str(json_str).map_err(|e| LoadError::InvalidFormat(e.to_string()))?;

        if data.language != "ar" {
            return Err(LoadError::InvalidFormat(format!(
                "expected an Arabic phrasebook, got language '{}'",
                data.language
            )));
        }

        validate_entries(&data.phrases)?;

        Ok(Self {
            name: data.name,
            version: data.version,
            entries: Arc::from(data.phrases),
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Append the entries of `other` that are not already present
    pub fn merge(self, other: ArabicPhrasebook) -> Self {
        let merged = merge_entries(self.entries.to_vec(), other.entries.to_vec());
        Self {
            name: self.name,
            version: self.version,
            entries: Arc::from(merged),
        }
    }
}

impl Default for ArabicPhrasebook {
    fn default() -> Self {
        Self::new()
    }
}

impl Phrasebook for ArabicPhrasebook {
    fn entries(&self) -> &[PhraseEntry] {
        &self.entries
    }

    fn metadata(&self) -> PhrasebookMetadata {
        PhrasebookMetadata {
            name: self.name.clone(),
            version: self.version.clone(),
            language: "ar".to_string(),
            entry_count: self.entries.len(),
        }
    }

    fn shared(&self) -> Arc<[PhraseEntry]> {
        Arc::clone(&self.entries)
    }
}
