use nafham_config::DiacriticPolicy;
use nafham_config::normalizer::NormalizerConfig;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical comparison form of a piece of text.
///
/// Lower-cases, applies canonical decomposition (NFD, so accented letters and
/// hamza carriers split into base letter plus mark), drops the combining marks
/// selected by the policy and trims surrounding whitespace. The result is
/// stable under a second application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    policy: DiacriticPolicy,
}

impl Normalizer {
    pub fn new(policy: DiacriticPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &NormalizerConfig) -> Self {
        Self::new(config.diacritics)
    }

    pub fn normalize(&self, text: &str) -> String {
        let mut normalized: String = text
            .to_lowercase()
            .nfd()
            .filter(|c| !self.strips(*c))
            .collect();

        trim_in_place(&mut normalized);
        normalized
    }

    fn strips(&self, c: char) -> bool {
        if !is_combining_mark(c) {
            return false;
        }

        match self.policy {
            DiacriticPolicy::All => true,
            DiacriticPolicy::Arabic => is_arabic_block(c),
            DiacriticPolicy::Latin => is_generic_diacritic_block(c),
            DiacriticPolicy::Keep => false,
        }
    }
}

// Unicode whitespace plus the byte order mark
fn is_trimmed(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn trim_in_place(text: &mut String) {
    let end = text.trim_end_matches(is_trimmed).len();
    text.truncate(end);
    let start = text.len() - text.trim_start_matches(is_trimmed).len();
    text.drain(..start);
}

/// Normalize with the default policy (all combining marks stripped)
pub fn normalize(text: &str) -> String {
    Normalizer::default().normalize(text)
}

fn is_arabic_block(c: char) -> bool {
    matches!(
        c,
        '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{0870}'..='\u{08FF}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}'
    )
}

fn is_generic_diacritic_block(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}
