use std::path::Path;

use nafham_core::phrasebook::LoadError;

use crate::phrasebook::ArabicPhrasebook;

pub struct ArabicPhrasebookLoader;

impl ArabicPhrasebookLoader {
    /// Load the phrase set compiled into the binary
    pub fn load_embedded() -> Result<ArabicPhrasebook, LoadError> {
        let json = include_str!("../data/phrases.json");
        tracing::info!("Loading embedded phrasebook...");
        let book = ArabicPhrasebook::from_json(json)?;
        tracing::info!("Loaded {} phrases", book.entry_count());
        Ok(book)
    }

    /// Load phrasebook from file path
    pub fn load_file(path: &Path) -> Result<ArabicPhrasebook, LoadError> {
        tracing::info!("Loading phrasebook from file: {}", path.display());
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        let json = std::fs::read_to_string(path)?;
        let book = ArabicPhrasebook::from_json(&json)?;
        tracing::info!("Loaded {} phrases from file", book.entry_count());
        Ok(book)
    }

    /// Embedded set (optional) followed by every additional file.
    /// Files that fail to load are logged and skipped.
    pub fn load_all(embedded: bool, additional_paths: &[String]) -> Result<ArabicPhrasebook, LoadError> {
        let mut book = if embedded {
            Self::load_embedded()?
        } else {
            ArabicPhrasebook::new()
        };

        for path in additional_paths {
            match Self::load_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional phrasebook from: {}", path);
                    book = book.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load phrasebook from {}: {}", path, e);
                }
            }
        }

        Ok(book)
    }
}
