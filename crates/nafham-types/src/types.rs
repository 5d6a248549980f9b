use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One phrasebook entry. All four fields are expected to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseEntry {
    pub english: String,
    pub arabic: String,
    pub transliteration: String,
    pub note: String,
}

impl PhraseEntry {
    pub fn new(
        english: impl Into<String>,
        arabic: impl Into<String>,
        transliteration: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            english: english.into(),
            arabic: arabic.into(),
            transliteration: transliteration.into(),
            note: note.into(),
        }
    }

    /// Text of the given field
    pub fn field(&self, field: PhraseField) -> &str {
        match field {
            PhraseField::English => &self.english,
            PhraseField::Arabic => &self.arabic,
            PhraseField::Transliteration => &self.transliteration,
            PhraseField::Note => &self.note,
        }
    }

    /// First empty (or whitespace-only) field, if any
    pub fn first_empty_field(&self) -> Option<PhraseField> {
        PhraseField::ALL
            .into_iter()
            .find(|field| self.field(*field).trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseField {
    English,
    Arabic,
    Transliteration,
    Note,
}

impl PhraseField {
    pub const ALL: [PhraseField; 4] = [
        PhraseField::English,
        PhraseField::Arabic,
        PhraseField::Transliteration,
        PhraseField::Note,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhraseField::English => "english",
            PhraseField::Arabic => "arabic",
            PhraseField::Transliteration => "transliteration",
            PhraseField::Note => "note",
        }
    }
}

impl fmt::Display for PhraseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which language the user is typing in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchDirection {
    #[default]
    #[serde(rename = "en-ar")]
    EnglishToArabic,
    #[serde(rename = "ar-en")]
    ArabicToEnglish,
}

impl SearchDirection {
    pub fn toggle(self) -> Self {
        match self {
            SearchDirection::EnglishToArabic => SearchDirection::ArabicToEnglish,
            SearchDirection::ArabicToEnglish => SearchDirection::EnglishToArabic,
        }
    }

    /// Fields shown first and second when rendering a result.
    ///
    /// Transliteration and note are always shown and do not depend on the
    /// direction.
    pub fn fields(self) -> (PhraseField, PhraseField) {
        match self {
            SearchDirection::EnglishToArabic => (PhraseField::English, PhraseField::Arabic),
            SearchDirection::ArabicToEnglish => (PhraseField::Arabic, PhraseField::English),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchDirection::EnglishToArabic => "en-ar",
            SearchDirection::ArabicToEnglish => "ar-en",
        }
    }
}

impl fmt::Display for SearchDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown search direction: {0}")]
pub struct ParseDirectionError(pub String);

impl FromStr for SearchDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en-ar" | "english-to-arabic" | "en" => Ok(SearchDirection::EnglishToArabic),
            "ar-en" | "arabic-to-english" | "ar" => Ok(SearchDirection::ArabicToEnglish),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// A phrase laid out for display according to a search direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayResult {
    pub primary: String,
    pub secondary: String,
    pub transliteration: String,
    pub note: String,
}

impl DisplayResult {
    pub fn from_entry(entry: &PhraseEntry, direction: SearchDirection) -> Self {
        let (primary, secondary) = direction.fields();
        Self {
            primary: entry.field(primary).to_string(),
            secondary: entry.field(secondary).to_string(),
            transliteration: entry.transliteration.clone(),
            note: entry.note.clone(),
        }
    }
}

/// Everything the view needs to render one search state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsView {
    pub direction: SearchDirection,
    pub query: String,
    pub results: Vec<DisplayResult>,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigUpdate {
        field: String,
        value: String,
    },
    UiEvent(UiEvent),
    ShowResults(ResultsView),
    BackendReady,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    SearchText(String),
    SetDirection(SearchDirection),
    ToggleDirection,
    ClearQuery,
    Close,
}
