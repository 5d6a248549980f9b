use std::collections::HashSet;
use std::sync::Arc;

use nafham_types::{PhraseEntry, PhraseField};

/// Read-only source of phrase entries
pub trait Phrasebook: Send + Sync {
    /// Entries in canonical display order
    fn entries(&self) -> &[PhraseEntry];

    /// Get phrasebook metadata
    fn metadata(&self) -> PhrasebookMetadata;

    /// Shared copy of the entries for matchers and sessions
    fn shared(&self) -> Arc<[PhraseEntry]> {
        Arc::from(self.entries())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhrasebookMetadata {
    pub name: String,
    pub version: String,
    pub language: String,
    pub entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Entry {index} has an empty {field} field")]
    InvalidEntry { index: usize, field: PhraseField },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Check that every entry has all four fields filled in
pub fn validate_entries(entries: &[PhraseEntry]) -> Result<(), LoadError> {
    for (index, entry) in entries.iter().enumerate() {
        if let Some(field) = entry.first_empty_field() {
            return Err(LoadError::InvalidEntry { index, field });
        }
    }
    Ok(())
}

/// Append `additional` to `base`, skipping entries whose English/Arabic pair
/// is already present. Base order is kept.
pub fn merge_entries(mut base: Vec<PhraseEntry>, additional: Vec<PhraseEntry>) -> Vec<PhraseEntry> {
    let mut seen: HashSet<(String, String)> = base
        .iter()
        .map(|e| (e.english.clone(), e.arabic.clone()))
        .collect();

    for entry in additional {
        if seen.insert((entry.english.clone(), entry.arabic.clone())) {
            base.push(entry);
        } else {
            tracing::warn!("Skipping duplicate phrase: {}", entry.english);
        }
    }

    base
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase(english: &str, arabic: &str) -> PhraseEntry {
        PhraseEntry::new(english, arabic, "translit", "note")
    }

    #[test]
    fn test_validate_accepts_complete_entries() {
        let entries = vec![phrase("Hello", "مرحبا"), phrase("Bye", "مع السلامة")];
        assert!(validate_entries(&entries).is_ok());
        assert!(validate_entries(&[]).is_ok());
    }

    #[test]
    fn test_validate_reports_first_bad_entry() {
        let mut bad = phrase("Hello", "مرحبا");
        bad.note = String::new();
        let entries = vec![phrase("Bye", "مع السلامة"), bad];

        match validate_entries(&entries) {
            Err(LoadError::InvalidEntry { index, field }) => {
                assert_eq!(index, 1);
                assert_eq!(field, PhraseField::Note);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_merge_skips_duplicates_and_keeps_order() {
        let base = vec![phrase("Hello", "مرحبا"), phrase("Bye", "مع السلامة")];
        let additional = vec![
            phrase("Thanks", "شكرا"),
            phrase("Hello", "مرحبا"),
            phrase("Hello", "أهلا"),
        ];

        let merged = merge_entries(base, additional);
        let english: Vec<&str> = merged.iter().map(|e| e.english.as_str()).collect();
        assert_eq!(english, vec!["Hello", "Bye", "Thanks", "Hello"]);
        assert_eq!(merged[3].arabic, "أهلا");
    }
}
