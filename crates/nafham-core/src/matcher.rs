use nafham_config::Config;
use nafham_types::{DisplayResult, PhraseEntry, PhraseField, SearchDirection};

use crate::normalize::Normalizer;

pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

/// Fields compared against the query. A match in any one of them is enough.
pub fn query_targets(direction: SearchDirection) -> &'static [PhraseField] {
    match direction {
        SearchDirection::EnglishToArabic => &[PhraseField::English],
        SearchDirection::ArabicToEnglish => &[PhraseField::Arabic, PhraseField::Transliteration],
    }
}

/// Direction-aware substring filter over a phrase collection
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    normalizer: Normalizer,
    preview_limit: usize,
}

impl Default for PhraseMatcher {
    fn default() -> Self {
        Self::new(Normalizer::default(), DEFAULT_PREVIEW_LIMIT)
    }
}

impl PhraseMatcher {
    pub fn new(normalizer: Normalizer, preview_limit: usize) -> Self {
        Self {
            normalizer,
            preview_limit,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Normalizer::from_config(&config.normalizer),
            config.search.preview_limit,
        )
    }

    /// Positions of the matching entries, in collection order.
    ///
    /// A blank query yields the first `preview_limit` positions unfiltered.
    pub fn search_indices(
        &self,
        entries: &[PhraseEntry],
        direction: SearchDirection,
        query: &str,
    ) -> Vec<usize> {
        if query.trim().is_empty() {
            return (0..entries.len().min(self.preview_limit)).collect();
        }

        let normalized_query = self.normalizer.normalize(query);
        tracing::debug!("Searching {} for '{}'", direction, normalized_query);

        entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| self.is_match(entry, direction, &normalized_query))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn search<'a>(
        &self,
        entries: &'a [PhraseEntry],
        direction: SearchDirection,
        query: &str,
    ) -> SearchResults<'a> {
        let matched = self
            .search_indices(entries, direction, query)
            .into_iter()
            .map(|index| &entries[index])
            .collect();

        SearchResults {
            direction,
            preview: query.trim().is_empty(),
            entries: matched,
        }
    }

    fn is_match(&self, entry: &PhraseEntry, direction: SearchDirection, normalized_query: &str) -> bool {
        query_targets(direction)
            .iter()
            .any(|field| self.normalizer.normalize(entry.field(*field)).contains(normalized_query))
    }
}

/// Search with the default normalizer and a preview of five entries
pub fn search<'a>(
    entries: &'a [PhraseEntry],
    direction: SearchDirection,
    query: &str,
) -> SearchResults<'a> {
    PhraseMatcher::default().search(entries, direction, query)
}

/// Matching entries plus the direction they should be rendered with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults<'a> {
    pub direction: SearchDirection,
    /// True when the entries are the empty-query preview rather than matches
    pub preview: bool,
    pub entries: Vec<&'a PhraseEntry>,
}

impl<'a> SearchResults<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a PhraseEntry> + '_ {
        self.entries.iter().copied()
    }

    pub fn display(&self) -> Vec<DisplayResult> {
        self.iter()
            .map(|entry| DisplayResult::from_entry(entry, self.direction))
            .collect()
    }
}
