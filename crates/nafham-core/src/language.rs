use nafham_types::SearchDirection;

/// Prompt text for one language pairing.
///
/// The core only hands the direction back to the view; the pack decides what
/// to show for it, in the right script.
pub trait LanguagePack: Send + Sync {
    /// Input placeholder for the given direction
    fn placeholder(&self, direction: SearchDirection) -> &str;

    /// Toggle button label for the given direction
    fn direction_label(&self, direction: SearchDirection) -> &str;

    /// Shown when a query matches nothing
    fn empty_state(&self) -> &str;

    /// Caption above the search input
    fn search_label(&self) -> &str;
}
