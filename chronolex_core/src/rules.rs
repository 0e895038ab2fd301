//! Declarative classification rules.
//!
//! A locale describes its idioms as static data: literal day forms with their
//! offsets, relative-cue markers for the month/year families and the markers
//! behind each period-shape predicate. All rule text is compared against
//! normalized input, so it must itself be normalized; [`SwiftRules::validate`]
//! checks that when a configuration is composed.

use crate::culture::Culture;
use crate::error::{ConfigurationError, Result};
use crate::normalize::Normalizer;
use crate::pattern::{PatternCatalog, PatternKey};
use crate::swift::RelativeCue;

/// How a literal is compared with the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralForm {
    /// Whole input equals the literal.
    Exact,
    /// Input ends with the literal on a word boundary.
    Suffix,
    /// Input starts with the literal on a word boundary.
    Prefix,
}

impl LiteralForm {
    #[must_use]
    pub fn matches(self, text: &str, literal: &str) -> bool {
        match self {
            Self::Exact => text == literal,
            Self::Suffix => text.strip_suffix(literal).is_some_and(|head| {
                head.chars().next_back().is_none_or(|c| !c.is_alphanumeric())
            }),
            Self::Prefix => text
                .strip_prefix(literal)
                .is_some_and(|tail| tail.chars().next().is_none_or(|c| !c.is_alphanumeric())),
        }
    }
}

/// One way a relative cue or a period shape can show up in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// The locale's matcher for the key matches anywhere in the input.
    Pattern(PatternKey),
    Exact(&'static str),
    Prefix(&'static str),
    Suffix(&'static str),
}

impl Marker {
    #[must_use]
    pub fn matches(&self, text: &str, catalog: &PatternCatalog) -> bool {
        match *self {
            Self::Pattern(key) => catalog.is_match(key, text),
            Self::Exact(literal) => LiteralForm::Exact.matches(text, literal),
            Self::Prefix(literal) => LiteralForm::Prefix.matches(text, literal),
            Self::Suffix(literal) => LiteralForm::Suffix.matches(text, literal),
        }
    }

    const fn literal(&self) -> Option<&'static str> {
        match *self {
            Self::Pattern(_) => None,
            Self::Exact(literal) | Self::Prefix(literal) | Self::Suffix(literal) => Some(literal),
        }
    }

    const fn key(&self) -> Option<PatternKey> {
        match *self {
            Self::Pattern(key) => Some(key),
            _ => None,
        }
    }
}

fn any_marker(markers: &[Marker], text: &str, catalog: &PatternCatalog) -> bool {
    markers.iter().any(|marker| marker.matches(text, catalog))
}

/// A literal day idiom and the offset it denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRule {
    pub form: LiteralForm,
    pub text: &'static str,
    pub swift: i32,
}

impl DayRule {
    #[must_use]
    pub const fn exact(text: &'static str, swift: i32) -> Self {
        Self {
            form: LiteralForm::Exact,
            text,
            swift,
        }
    }

    #[must_use]
    pub const fn suffix(text: &'static str, swift: i32) -> Self {
        Self {
            form: LiteralForm::Suffix,
            text,
            swift,
        }
    }
}

/// Generic relative-day handling used when no literal rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayFallback {
    /// Only inputs this matcher accepts are classified.
    pub gate: PatternKey,
    pub cues: CueRules,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRules {
    /// Evaluated in order, first match wins.
    pub literals: &'static [DayRule],
    pub fallback: Option<DayFallback>,
}

impl DayRules {
    #[must_use]
    pub fn resolve(&self, text: &str, catalog: &PatternCatalog) -> i32 {
        if let Some(rule) = self
            .literals
            .iter()
            .find(|rule| rule.form.matches(text, rule.text))
        {
            return rule.swift;
        }

        match &self.fallback {
            Some(fallback) if catalog.is_match(fallback.gate, text) => fallback
                .cues
                .classify(text, catalog)
                .map_or(0, RelativeCue::direction),
            _ => 0,
        }
    }
}

/// Which cue wins when markers of more than one kind hit the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// NEXT over PAST; THIS only when neither hits.
    NextWins,
    /// PAST over NEXT; THIS only when neither hits.
    PastWins,
    /// PAST, then THIS, then NEXT: "cette année prochaine" is THIS.
    PastThenThis,
}

/// NEXT / PAST / THIS markers of one offset family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueRules {
    pub next: &'static [Marker],
    pub past: &'static [Marker],
    pub this: &'static [Marker],
    pub precedence: Precedence,
}

impl CueRules {
    /// Every marker kind is checked and conflicts are settled by
    /// [`Precedence`].
    #[must_use]
    pub fn classify(&self, text: &str, catalog: &PatternCatalog) -> Option<RelativeCue> {
        let next = any_marker(self.next, text, catalog);
        let past = any_marker(self.past, text, catalog);

        if self.precedence == Precedence::PastThenThis
            && !past
            && any_marker(self.this, text, catalog)
        {
            return Some(RelativeCue::This);
        }

        match (next, past) {
            (true, true) => Some(match self.precedence {
                Precedence::NextWins => RelativeCue::Next,
                Precedence::PastWins | Precedence::PastThenThis => RelativeCue::Past,
            }),
            (true, false) => Some(RelativeCue::Next),
            (false, true) => Some(RelativeCue::Past),
            (false, false) => any_marker(self.this, text, catalog).then_some(RelativeCue::This),
        }
    }

    fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.next.iter().chain(self.past).chain(self.this)
    }
}

/// Markers behind the boolean period-shape predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodShapeRules {
    pub cardinal_last: &'static [Marker],
    pub week: &'static [Marker],
    pub weekend: &'static [Marker],
    pub month: &'static [Marker],
    pub year: &'static [Marker],
    pub week_to_date: &'static [Marker],
    pub month_to_date: &'static [Marker],
    pub year_to_date: &'static [Marker],
    pub future: &'static [Marker],
}

impl PeriodShapeRules {
    pub const NONE: Self = Self {
        cardinal_last: &[],
        week: &[],
        weekend: &[],
        month: &[],
        year: &[],
        week_to_date: &[],
        month_to_date: &[],
        year_to_date: &[],
        future: &[],
    };

    #[must_use]
    pub fn is_cardinal_last(&self, text: &str, catalog: &PatternCatalog) -> bool {
        any_marker(self.cardinal_last, text, catalog)
    }

    #[must_use]
    pub fn is_weekend(&self, text: &str, catalog: &PatternCatalog) -> bool {
        any_marker(self.weekend, text, catalog)
    }

    /// A weekend phrase also ends with the word for week, so weekend is
    /// checked first and excludes it.
    #[must_use]
    pub fn is_week_only(&self, text: &str, catalog: &PatternCatalog) -> bool {
        !self.is_weekend(text, catalog) && any_marker(self.week, text, catalog)
    }

    #[must_use]
    pub fn is_month_only(&self, text: &str, catalog: &PatternCatalog) -> bool {
        any_marker(self.month, text, catalog)
    }

    #[must_use]
    pub fn is_year_only(&self, text: &str, catalog: &PatternCatalog) -> bool {
        any_marker(self.year, text, catalog)
    }

    #[must_use]
    pub fn is_week_to_date(&self, text: &str, catalog: &PatternCatalog) -> bool {
        any_marker(self.week_to_date, text, catalog)
    }

    #[must_use]
    pub fn is_month_to_date(&self, text: &str, catalog: &PatternCatalog) -> bool {
        any_marker(self.month_to_date, text, catalog)
    }

    #[must_use]
    pub fn is_year_to_date(&self, text: &str, catalog: &PatternCatalog) -> bool {
        any_marker(self.year_to_date, text, catalog)
    }

    #[must_use]
    pub fn is_future(&self, text: &str, catalog: &PatternCatalog) -> bool {
        any_marker(self.future, text, catalog)
    }

    fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.cardinal_last
            .iter()
            .chain(self.week)
            .chain(self.weekend)
            .chain(self.month)
            .chain(self.year)
            .chain(self.week_to_date)
            .chain(self.month_to_date)
            .chain(self.year_to_date)
            .chain(self.future)
    }
}

/// Everything a locale needs to answer the swift and period-shape queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwiftRules {
    pub day: DayRules,
    pub month: CueRules,
    pub year: CueRules,
    /// Day, week and month periods ("la semaine prochaine").
    pub day_or_month: CueRules,
    pub shapes: PeriodShapeRules,
}

impl SwiftRules {
    fn markers(&self) -> impl Iterator<Item = &Marker> {
        let fallback = self.day.fallback.iter().flat_map(|fallback| fallback.cues.markers());
        self.month
            .markers()
            .chain(self.year.markers())
            .chain(self.day_or_month.markers())
            .chain(self.shapes.markers())
            .chain(fallback)
    }

    /// Pattern keys the rules consult; the catalog must provide all of them.
    #[must_use]
    pub fn referenced_keys(&self) -> Vec<PatternKey> {
        let mut keys: Vec<PatternKey> = self
            .markers()
            .filter_map(Marker::key)
            .chain(self.day.fallback.map(|fallback| fallback.gate))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Reject literal rule text that the locale's normalizer would change,
    /// since such a rule could never fire.
    pub fn validate(&self, culture: Culture, normalizer: &Normalizer) -> Result<()> {
        let literals = self
            .day
            .literals
            .iter()
            .map(|rule| rule.text)
            .chain(self.markers().filter_map(Marker::literal));

        for literal in literals {
            let normalized = normalizer.normalize(literal);
            if normalized != literal {
                return Err(ConfigurationError::UnnormalizedRule {
                    culture,
                    literal: literal.to_string(),
                    normalized: normalized.into_owned(),
                });
            }
        }
        Ok(())
    }
}
