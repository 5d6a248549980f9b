use nafham_core::language::LanguagePack;
use nafham_types::SearchDirection;

/// English/Arabic prompt text
#[derive(Debug, Clone, Copy, Default)]
pub struct ArabicPack;

impl LanguagePack for ArabicPack {
    fn placeholder(&self, direction: SearchDirection) -> &str {
        match direction {
            SearchDirection::EnglishToArabic => "Type in English…",
            SearchDirection::ArabicToEnglish => "اكتب بالعربية أو بالكتابة اللاتينية…",
        }
    }

    fn direction_label(&self, direction: SearchDirection) -> &str {
        match direction {
            SearchDirection::EnglishToArabic => "English → العربية",
            SearchDirection::ArabicToEnglish => "العربية → English",
        }
    }

    fn empty_state(&self) -> &str {
        "No match yet—try general words like “hello” or “شكراً”."
    }

    fn search_label(&self) -> &str {
        "Search the phrasebook"
    }
}
