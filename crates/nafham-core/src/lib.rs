pub mod language;
pub mod matcher;
pub mod normalize;
pub mod phrasebook;
pub mod state;

pub use matcher::{PhraseMatcher, SearchResults, search};
pub use normalize::{Normalizer, normalize};
pub use state::SearchSession;
