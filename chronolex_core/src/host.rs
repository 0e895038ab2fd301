//! Sub-extractors owned by the host recognition engine.
//!
//! A locale configuration never builds its own number or duration
//! recognizers; it holds shared handles to the ones the host already built
//! and hands them back out to the engine.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};

/// The shared sub-extractors a configuration refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubExtractor {
    Integer,
    Ordinal,
    Cardinal,
    Duration,
    Date,
}

impl SubExtractor {
    pub const ALL: [Self; 5] = [
        Self::Integer,
        Self::Ordinal,
        Self::Cardinal,
        Self::Duration,
        Self::Date,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Ordinal => "ordinal",
            Self::Cardinal => "cardinal",
            Self::Duration => "duration",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for SubExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A span found by an [`Extractor`]. Offsets are in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    pub start: usize,
    pub length: usize,
    pub text: String,
    pub kind: SubExtractor,
}

impl ExtractResult {
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.length
    }
}

pub trait Extractor: Send + Sync {
    fn kind(&self) -> SubExtractor;

    /// Candidate spans, left to right and non-overlapping.
    fn extract(&self, text: &str) -> Vec<ExtractResult>;
}

pub trait NumberParser: Send + Sync {
    fn parse(&self, result: &ExtractResult) -> Option<f64>;
}

/// An extractor backed by a single regular expression.
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    kind: SubExtractor,
    regex: Regex,
}

impl PatternExtractor {
    pub fn new(kind: SubExtractor, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|source| ConfigurationError::InvalidExtractor { kind, source })?;
        Ok(Self { kind, regex })
    }
}

impl Extractor for PatternExtractor {
    fn kind(&self) -> SubExtractor {
        self.kind
    }

    fn extract(&self, text: &str) -> Vec<ExtractResult> {
        self.regex
            .find_iter(text)
            .map(|m| ExtractResult {
                start: m.start(),
                length: m.len(),
                text: m.as_str().to_string(),
                kind: self.kind,
            })
            .collect()
    }
}

/// Parses digit strings, accepting either `.` or `,` as decimal mark.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalParser;

impl NumberParser for DecimalParser {
    fn parse(&self, result: &ExtractResult) -> Option<f64> {
        let text = result.text.trim();
        text.parse::<f64>()
            .ok()
            .or_else(|| text.replacen(',', ".", 1).parse::<f64>().ok())
            .filter(|value| value.is_finite())
    }
}

/// Shared handles to the host's sub-extractors.
#[derive(Clone)]
pub struct HostContext {
    integer: Arc<dyn Extractor>,
    ordinal: Arc<dyn Extractor>,
    cardinal: Arc<dyn Extractor>,
    duration: Arc<dyn Extractor>,
    date: Arc<dyn Extractor>,
    number_parser: Arc<dyn NumberParser>,
}

impl HostContext {
    #[must_use]
    pub fn builder() -> HostContextBuilder {
        HostContextBuilder::default()
    }

    #[must_use]
    pub fn extractor(&self, kind: SubExtractor) -> &Arc<dyn Extractor> {
        match kind {
            SubExtractor::Integer => &self.integer,
            SubExtractor::Ordinal => &self.ordinal,
            SubExtractor::Cardinal => &self.cardinal,
            SubExtractor::Duration => &self.duration,
            SubExtractor::Date => &self.date,
        }
    }

    #[must_use]
    pub fn integer(&self) -> &Arc<dyn Extractor> {
        &self.integer
    }

    #[must_use]
    pub fn ordinal(&self) -> &Arc<dyn Extractor> {
        &self.ordinal
    }

    #[must_use]
    pub fn cardinal(&self) -> &Arc<dyn Extractor> {
        &self.cardinal
    }

    #[must_use]
    pub fn duration(&self) -> &Arc<dyn Extractor> {
        &self.duration
    }

    #[must_use]
    pub fn date(&self) -> &Arc<dyn Extractor> {
        &self.date
    }

    #[must_use]
    pub fn number_parser(&self) -> &Arc<dyn NumberParser> {
        &self.number_parser
    }
}

impl fmt::Debug for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostContext")
            .field("integer", &self.integer.kind())
            .field("ordinal", &self.ordinal.kind())
            .field("cardinal", &self.cardinal.kind())
            .field("duration", &self.duration.kind())
            .field("date", &self.date.kind())
            .finish_non_exhaustive()
    }
}

/// Collects the host's sub-extractors; every one is required.
#[derive(Default)]
pub struct HostContextBuilder {
    integer: Option<Arc<dyn Extractor>>,
    ordinal: Option<Arc<dyn Extractor>>,
    cardinal: Option<Arc<dyn Extractor>>,
    duration: Option<Arc<dyn Extractor>>,
    date: Option<Arc<dyn Extractor>>,
    number_parser: Option<Arc<dyn NumberParser>>,
}

impl HostContextBuilder {
    /// Register an extractor under the slot it reports through
    /// [`Extractor::kind`].
    #[must_use]
    pub fn extractor(mut self, extractor: Arc<dyn Extractor>) -> Self {
        let slot = match extractor.kind() {
            SubExtractor::Integer => &mut self.integer,
            SubExtractor::Ordinal => &mut self.ordinal,
            SubExtractor::Cardinal => &mut self.cardinal,
            SubExtractor::Duration => &mut self.duration,
            SubExtractor::Date => &mut self.date,
        };
        *slot = Some(extractor);
        self
    }

    /// Defaults to [`DecimalParser`] when not set.
    #[must_use]
    pub fn number_parser(mut self, parser: Arc<dyn NumberParser>) -> Self {
        self.number_parser = Some(parser);
        self
    }

    pub fn build(self) -> Result<HostContext> {
        let require = |slot: Option<Arc<dyn Extractor>>, kind| {
            slot.ok_or(ConfigurationError::MissingExtractor(kind))
        };

        Ok(HostContext {
            integer: require(self.integer, SubExtractor::Integer)?,
            ordinal: require(self.ordinal, SubExtractor::Ordinal)?,
            cardinal: require(self.cardinal, SubExtractor::Cardinal)?,
            duration: require(self.duration, SubExtractor::Duration)?,
            date: require(self.date, SubExtractor::Date)?,
            number_parser: self
                .number_parser
                .unwrap_or_else(|| Arc::new(DecimalParser)),
        })
    }
}
