use std::sync::Arc;

use nafham_types::{PhraseEntry, ResultsView, SearchDirection};

use crate::matcher::{PhraseMatcher, SearchResults};

/// Caller-held search state with results memoized on (direction, query).
///
/// Results are recomputed lazily, and only after the direction or the query
/// actually changed.
pub struct SearchSession {
    phrases: Arc<[PhraseEntry]>,
    matcher: PhraseMatcher,
    direction: SearchDirection,
    query: String,
    cached: Option<Vec<usize>>,
    recomputations: u64,
}

impl SearchSession {
    pub fn new(phrases: Arc<[PhraseEntry]>, matcher: PhraseMatcher, direction: SearchDirection) -> Self {
        Self {
            phrases,
            matcher,
            direction,
            query: String::new(),
            cached: None,
            recomputations: 0,
        }
    }

    pub fn direction(&self) -> SearchDirection {
        self.direction
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of times the result set was actually computed
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Swap the matcher, e.g. after a config change. Always invalidates.
    pub fn set_matcher(&mut self, matcher: PhraseMatcher) {
        self.matcher = matcher;
        self.cached = None;
    }

    /// Returns true if the direction changed
    pub fn set_direction(&mut self, direction: SearchDirection) -> bool {
        if self.direction == direction {
            return false;
        }
        self.direction = direction;
        self.cached = None;
        true
    }

    pub fn toggle_direction(&mut self) -> SearchDirection {
        self.set_direction(self.direction.toggle());
        self.direction
    }

    /// Returns true if the query changed
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if self.query == query {
            return false;
        }
        self.query = query;
        self.cached = None;
        true
    }

    pub fn clear_query(&mut self) -> bool {
        self.set_query(String::new())
    }

    pub fn results(&mut self) -> SearchResults<'_> {
        self.refresh();

        let entries = self
            .cached
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|index| &self.phrases[*index])
            .collect();

        SearchResults {
            direction: self.direction,
            preview: self.query.trim().is_empty(),
            entries,
        }
    }

    /// Owned snapshot for handing to the view
    pub fn view(&mut self) -> ResultsView {
        let results = self.results().display();
        ResultsView {
            direction: self.direction,
            query: self.query.clone(),
            results,
        }
    }

    fn refresh(&mut self) {
        if self.cached.is_some() {
            return;
        }

        let indices = self
            .matcher
            .search_indices(&self.phrases, self.direction, &self.query);
        self.recomputations += 1;
        tracing::debug!(
            "Recomputed results ({} {:?}): {} entries",
            self.direction,
            self.query,
            indices.len()
        );
        self.cached = Some(indices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::tests::reference_phrases;

    fn session() -> SearchSession {
        SearchSession::new(
            Arc::from(reference_phrases()),
            PhraseMatcher::default(),
            SearchDirection::EnglishToArabic,
        )
    }

    #[test]
    fn test_starts_with_preview() {
        let mut session = session();
        let results = session.results();
        assert!(results.preview);
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_results_are_memoized() {
        let mut session = session();
        session.set_query("understand");

        assert_eq!(session.results().len(), 2);
        assert_eq!(session.results().len(), 2);
        assert_eq!(session.recomputations(), 1);

        // same value again is not a change
        assert!(!session.set_query("understand"));
        assert!(!session.set_direction(SearchDirection::EnglishToArabic));
        session.results();
        assert_eq!(session.recomputations(), 1);
    }

    #[test]
    fn test_direction_change_recomputes() {
        let mut session = session();
        session.set_query("qahwa");
        assert!(session.results().is_empty());

        assert_eq!(session.toggle_direction(), SearchDirection::ArabicToEnglish);
        let results = session.results();
        assert_eq!(results.direction, SearchDirection::ArabicToEnglish);
        assert_eq!(results.len(), 1);
        assert_eq!(session.recomputations(), 2);
    }

    #[test]
    fn test_clearing_query_restores_preview() {
        let mut session = session();
        session.set_query("coffee");
        assert_eq!(session.results().len(), 1);

        assert!(session.clear_query());
        let results = session.results();
        assert!(results.preview);
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_new_matcher_invalidates() {
        let mut session = session();
        assert_eq!(session.results().len(), 5);

        session.set_matcher(PhraseMatcher::new(Default::default(), 3));
        assert_eq!(session.results().len(), 3);
        assert_eq!(session.recomputations(), 2);
    }

    #[test]
    fn test_view_snapshot() {
        let mut session = session();
        session.set_direction(SearchDirection::ArabicToEnglish);
        session.set_query("شكر");

        let view = session.view();
        assert_eq!(view.direction, SearchDirection::ArabicToEnglish);
        assert_eq!(view.query, "شكر");
        assert_eq!(view.results.len(), 1);
        assert_eq!(view.results[0].primary, "شكراً، هذا ممتاز.");
        assert_eq!(view.results[0].secondary, "Thank you, that's perfect.");
    }
}
