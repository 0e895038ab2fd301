//! Compiled, labeled text matchers.
//!
//! Locale modules ship pattern sources as static `(PatternKey, &str)` tables;
//! the [`PatternCatalog`] compiles them once and hands out read-only
//! [`PatternMatcher`]s. Patterns are written against normalized text, so they
//! never need case-insensitive flags.

use std::borrow::Cow;
use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::culture::Culture;
use crate::error::{ConfigurationError, Result};
use crate::normalize::Normalizer;

/// Names of the matchers a locale can provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKey {
    /// "next", "prochain", "próximo"
    NextPrefix,
    /// "last", "dernier", "último"
    PastPrefix,
    /// "this", "cette", "diese"
    ThisPrefix,
    /// Generic relative-day phrase ("the next day").
    RelativeDay,
    /// Any relative marker.
    Relative,
    SpecialDay,
    WeekDay,
    Month,
    DateUnit,
    RelativeMonth,
    On,
    Preposition,
    Connector,
    Ago,
    Later,
    Now,
    FutureSuffix,
    Or,
    Am,
    Pm,
}

impl PatternKey {
    pub const ALL: [Self; 20] = [
        Self::NextPrefix,
        Self::PastPrefix,
        Self::ThisPrefix,
        Self::RelativeDay,
        Self::Relative,
        Self::SpecialDay,
        Self::WeekDay,
        Self::Month,
        Self::DateUnit,
        Self::RelativeMonth,
        Self::On,
        Self::Preposition,
        Self::Connector,
        Self::Ago,
        Self::Later,
        Self::Now,
        Self::FutureSuffix,
        Self::Or,
        Self::Am,
        Self::Pm,
    ];

    /// Keys every locale must provide.
    pub const COMMON_REQUIRED: &'static [Self] = &[
        Self::NextPrefix,
        Self::PastPrefix,
        Self::SpecialDay,
        Self::WeekDay,
        Self::Month,
        Self::DateUnit,
        Self::RelativeMonth,
        Self::On,
        Self::Preposition,
        Self::Connector,
        Self::Ago,
        Self::Later,
        Self::Now,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NextPrefix => "next_prefix",
            Self::PastPrefix => "past_prefix",
            Self::ThisPrefix => "this_prefix",
            Self::RelativeDay => "relative_day",
            Self::Relative => "relative",
            Self::SpecialDay => "special_day",
            Self::WeekDay => "week_day",
            Self::Month => "month",
            Self::DateUnit => "date_unit",
            Self::RelativeMonth => "relative_month",
            Self::On => "on",
            Self::Preposition => "preposition",
            Self::Connector => "connector",
            Self::Ago => "ago",
            Self::Later => "later",
            Self::Now => "now",
            Self::FutureSuffix => "future_suffix",
            Self::Or => "or",
            Self::Am => "am",
            Self::Pm => "pm",
        }
    }
}

impl std::fmt::Display for PatternKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of one matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDef {
    pub key: PatternKey,
    pub pattern: Cow<'static, str>,
}

impl PatternDef {
    #[must_use]
    pub const fn borrowed(key: PatternKey, pattern: &'static str) -> Self {
        Self {
            key,
            pattern: Cow::Borrowed(pattern),
        }
    }

    #[must_use]
    pub fn owned(key: PatternKey, pattern: impl Into<String>) -> Self {
        Self {
            key,
            pattern: Cow::Owned(pattern.into()),
        }
    }

    /// Turn a static locale table into definitions.
    #[must_use]
    pub fn from_table(table: &'static [(PatternKey, &'static str)]) -> Vec<Self> {
        table
            .iter()
            .map(|(key, pattern)| Self::borrowed(*key, pattern))
            .collect()
    }

    /// First literal character of the source that `normalizer` would
    /// rewrite. Such a character can never meet normalized input, so the
    /// pattern silently stops matching. Escapes and group names are skipped.
    #[must_use]
    pub fn unnormalized_char(&self, normalizer: &Normalizer) -> Option<char> {
        let mut rest: &str = &self.pattern;
        let mut buf = [0; 4];

        while let Some(c) = rest.chars().next() {
            let skip = if c == '\\' {
                escape_len(rest)
            } else if let Some(name) = rest.strip_prefix("(?P<").or_else(|| rest.strip_prefix("(?<")) {
                rest.len() - name.len() + name.find('>').map_or(name.len(), |end| end + 1)
            } else {
                let literal: &str = c.encode_utf8(&mut buf);
                if !c.is_whitespace() && !normalizer.is_normalized(literal) {
                    return Some(c);
                }
                c.len_utf8()
            };
            rest = rest.get(skip..).unwrap_or_default();
        }
        None
    }
}

/// Byte length of the escape sequence at the start of `escape`, including
/// hex digits and braced class names.
fn escape_len(escape: &str) -> usize {
    let Some((at, kind)) = escape.char_indices().nth(1) else {
        return escape.len();
    };
    let after = at + kind.len_utf8();
    let tail = escape.get(after..).unwrap_or_default();

    let digits = match kind {
        'p' | 'P' | 'x' | 'u' | 'U' if tail.starts_with('{') => {
            return after + tail.find('}').map_or(tail.len(), |end| end + 1);
        }
        'p' | 'P' => 1,
        'x' => 2,
        'u' => 4,
        'U' => 8,
        _ => 0,
    };
    after + tail.chars().take(digits).map(char::len_utf8).sum::<usize>()
}

/// Byte range of a match within the queried text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The matched slice of `text`, which must be the text that was queried.
    #[must_use]
    pub fn as_str<'t>(&self, text: &'t str) -> &'t str {
        text.get(self.start..self.end).unwrap_or_default()
    }
}

impl From<regex::Match<'_>> for MatchSpan {
    fn from(m: regex::Match<'_>) -> Self {
        Self {
            start: m.start(),
            end: m.end(),
        }
    }
}

/// A compiled pattern tagged with its key and culture.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    key: PatternKey,
    culture: Culture,
    regex: Regex,
}

impl PatternMatcher {
    pub fn compile(culture: Culture, def: &PatternDef) -> Result<Self> {
        let regex = Regex::new(&def.pattern).map_err(|source| ConfigurationError::InvalidPattern {
            culture,
            key: def.key,
            source,
        })?;
        Ok(Self {
            key: def.key,
            culture,
            regex,
        })
    }

    #[must_use]
    pub const fn key(&self) -> PatternKey {
        self.key
    }

    #[must_use]
    pub const fn culture(&self) -> Culture {
        self.culture
    }

    #[must_use]
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Leftmost match.
    #[must_use]
    pub fn find(&self, text: &str) -> Option<MatchSpan> {
        self.regex.find(text).map(MatchSpan::from)
    }

    /// All non-overlapping matches, left to right.
    pub fn find_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = MatchSpan> + 'a {
        self.regex.find_iter(text).map(MatchSpan::from)
    }

    /// Spans of every capture group of the leftmost match; index 0 is the
    /// whole match, groups that did not participate are `None`.
    #[must_use]
    pub fn captures(&self, text: &str) -> Option<Vec<Option<MatchSpan>>> {
        self.regex
            .captures(text)
            .map(|caps| caps.iter().map(|m| m.map(MatchSpan::from)).collect())
    }

    /// Span of a named group in the leftmost match.
    #[must_use]
    pub fn named(&self, text: &str, group: &str) -> Option<MatchSpan> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.name(group))
            .map(MatchSpan::from)
    }
}

/// All matchers of one locale, keyed by [`PatternKey`].
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    culture: Culture,
    matchers: BTreeMap<PatternKey, PatternMatcher>,
}

impl PatternCatalog {
    /// Compile every definition. A later definition for the same key
    /// replaces an earlier one.
    pub fn compile<'a, I>(culture: Culture, defs: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a PatternDef>,
    {
        let mut matchers = BTreeMap::new();
        for def in defs {
            let matcher = PatternMatcher::compile(culture, def)?;
            matchers.insert(def.key, matcher);
        }

        debug!(%culture, patterns = matchers.len(), "compiled pattern catalog");
        Ok(Self { culture, matchers })
    }

    /// Fail with the first key in `keys` that has no matcher.
    pub fn require(&self, keys: &[PatternKey]) -> Result<()> {
        match keys.iter().find(|key| !self.matchers.contains_key(key)) {
            Some(key) => Err(ConfigurationError::MissingPattern {
                culture: self.culture,
                key: *key,
            }),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn get(&self, key: PatternKey) -> Option<&PatternMatcher> {
        self.matchers.get(&key)
    }

    #[must_use]
    pub fn contains(&self, key: PatternKey) -> bool {
        self.matchers.contains_key(&key)
    }

    /// Whether the matcher for `key` matches; `false` when the locale has no
    /// such matcher.
    #[must_use]
    pub fn is_match(&self, key: PatternKey, text: &str) -> bool {
        self.get(key).is_some_and(|matcher| matcher.is_match(text))
    }

    #[must_use]
    pub const fn culture(&self) -> Culture {
        self.culture
    }

    pub fn keys(&self) -> impl Iterator<Item = PatternKey> + '_ {
        self.matchers.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternMatcher> {
        self.matchers.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}
