use thiserror::Error;

use crate::culture::Culture;
use crate::host::SubExtractor;
use crate::lexicon::MapKind;
use crate::pattern::PatternKey;

pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Fatal problems found while composing a locale configuration.
///
/// None of these can occur once a [`crate::LocaleConfiguration`] exists;
/// classification itself never fails.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("{culture}: pattern `{key}` failed to compile: {source}")]
    InvalidPattern {
        culture: Culture,
        key: PatternKey,
        #[source]
        source: regex::Error,
    },

    #[error("{culture}: required pattern `{key}` is missing")]
    MissingPattern { culture: Culture, key: PatternKey },

    #[error("{culture}: lexical map `{map}` is missing or empty")]
    MissingMap { culture: Culture, map: MapKind },

    #[error("{culture}: key `{key}` appears more than once in `{map}`")]
    DuplicateKey {
        culture: Culture,
        map: MapKind,
        key: String,
    },

    #[error("{culture}: key `{key}` in `{map}` is not normalized (expected `{normalized}`)")]
    UnnormalizedKey {
        culture: Culture,
        map: MapKind,
        key: String,
        normalized: String,
    },

    #[error("{culture}: rule literal `{literal}` is not normalized (expected `{normalized}`)")]
    UnnormalizedRule {
        culture: Culture,
        literal: String,
        normalized: String,
    },

    #[error("{culture}: pattern `{key}` contains `{found}`, which normalized input never carries")]
    UnnormalizedPattern {
        culture: Culture,
        key: PatternKey,
        found: char,
    },

    #[error("{kind} extractor pattern failed to compile: {source}")]
    InvalidExtractor {
        kind: SubExtractor,
        #[source]
        source: regex::Error,
    },

    #[error("host context is missing the {0} extractor")]
    MissingExtractor(SubExtractor),

    #[error("unknown culture: {0}")]
    UnknownCulture(String),
}
