pub mod loader;
pub mod phrasebook;
pub mod prompts;

pub use loader::ArabicPhrasebookLoader;
pub use phrasebook::ArabicPhrasebook;
pub use prompts::ArabicPack;
