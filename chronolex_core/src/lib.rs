#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

//! Locale parameterization for relative date/time recognition.
//!
//! A host recognition engine extracts candidate spans ("next month",
//! "depois de amanhã") and asks a [`LocaleConfiguration`] how far, and in
//! which direction, each span shifts from the reference instant. This crate
//! holds the locale-independent machinery; the language data lives in
//! `chronolex_locales`.

pub mod composer;
pub mod configuration;
pub mod culture;
pub mod data;
pub mod error;
pub mod host;
pub mod lexicon;
pub mod normalize;
pub mod options;
pub mod pattern;
pub mod rules;
pub mod swift;

pub use composer::{Composer, LocaleModule};
pub use configuration::LocaleConfiguration;
pub use culture::Culture;
pub use data::LocaleData;
pub use error::{ConfigurationError, Result};
pub use host::{
    DecimalParser, ExtractResult, Extractor, HostContext, HostContextBuilder, NumberParser,
    PatternExtractor, SubExtractor,
};
pub use lexicon::{DateUnit, LexicalMap, Lexicon, LexiconDef, MapKind, Season};
pub use normalize::{Folding, Normalizer};
pub use options::DateTimeOptions;
pub use pattern::{MatchSpan, PatternCatalog, PatternDef, PatternKey, PatternMatcher};
pub use rules::{
    CueRules, DayFallback, DayRule, DayRules, LiteralForm, Marker, PeriodShapeRules, Precedence,
    SwiftRules,
};
pub use swift::{RelativeCue, SwiftResolver};
