//! A minimal host for running locale configurations outside a full
//! recognition engine.
//!
//! The extractors are culture-neutral digit patterns over normalized text.
//! They stand in for the host engine's real number and date recognizers.

use std::sync::Arc;

use chronolex_core::{
    DecimalParser, Extractor, HostContext, PatternExtractor, Result, SubExtractor,
};

const INTEGER: &str = r"\b\d+\b";
const ORDINAL: &str = r"\b\d{1,3}(st|nd|rd|th|er|re|e|º|ª|\.)";
const CARDINAL: &str = r"\b\d+([.,]\d+)?\b";
const DURATION: &str = r"\bp(\d+[ymwd])+(t(\d+[hms])+)?\b";
const DATE: &str = r"\b(\d{4}-\d{2}-\d{2}|\d{1,2}[/.]\d{1,2}[/.]\d{2,4})\b";

fn pattern_extractor(kind: SubExtractor, pattern: &str) -> Result<Arc<dyn Extractor>> {
    Ok(Arc::new(PatternExtractor::new(kind, pattern)?))
}

/// Build the reference host context.
pub fn reference_host() -> Result<HostContext> {
    HostContext::builder()
        .extractor(pattern_extractor(SubExtractor::Integer, INTEGER)?)
        .extractor(pattern_extractor(SubExtractor::Ordinal, ORDINAL)?)
        .extractor(pattern_extractor(SubExtractor::Cardinal, CARDINAL)?)
        .extractor(pattern_extractor(SubExtractor::Duration, DURATION)?)
        .extractor(pattern_extractor(SubExtractor::Date, DATE)?)
        .number_parser(Arc::new(DecimalParser))
        .build()
}
