use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which combining marks the normalizer strips
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiacriticPolicy {
    /// Every combining mark, Latin accents and Arabic harakat alike
    #[default]
    All,
    /// Only marks from the Arabic blocks
    Arabic,
    /// Only marks from the generic combining diacritics blocks
    Latin,
    /// Strip nothing
    Keep,
}

impl DiacriticPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiacriticPolicy::All => "all",
            DiacriticPolicy::Arabic => "arabic",
            DiacriticPolicy::Latin => "latin",
            DiacriticPolicy::Keep => "keep",
        }
    }
}

impl fmt::Display for DiacriticPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown diacritic policy: {0}")]
pub struct ParsePolicyError(pub String);

impl FromStr for DiacriticPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(DiacriticPolicy::All),
            "arabic" => Ok(DiacriticPolicy::Arabic),
            "latin" => Ok(DiacriticPolicy::Latin),
            "keep" | "none" => Ok(DiacriticPolicy::Keep),
            other => Err(ParsePolicyError(other.to_string())),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NormalizerConfig {
    #[serde(default)]
    pub diacritics: DiacriticPolicy,
}
