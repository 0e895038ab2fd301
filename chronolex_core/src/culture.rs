//! Locale tags.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// The human language a locale module serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Culture {
    #[serde(rename = "en-us", alias = "en")]
    English,
    #[serde(rename = "fr-fr", alias = "fr")]
    French,
    #[serde(rename = "pt-br", alias = "pt")]
    Portuguese,
    #[serde(rename = "de-de", alias = "de")]
    German,
}

impl Culture {
    /// Every culture with a shipped locale module.
    pub const ALL: [Self; 4] = [Self::English, Self::French, Self::Portuguese, Self::German];

    /// Returns the culture tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::English => "en-us",
            Self::French => "fr-fr",
            Self::Portuguese => "pt-br",
            Self::German => "de-de",
        }
    }

    /// Parse a culture tag. Accepts the full tag or the bare language code,
    /// in any case and with either `-` or `_` as separator.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_lowercase().replace('_', "-");
        let language = tag.split('-').next().unwrap_or_default();
        match language {
            "en" => Some(Self::English),
            "fr" => Some(Self::French),
            "pt" => Some(Self::Portuguese),
            "de" => Some(Self::German),
            _ => None,
        }
    }
}

impl std::fmt::Display for Culture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Culture {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| ConfigurationError::UnknownCulture(s.to_string()))
    }
}
