//! Normalized lookup tables for weekday, month, cardinal, unit and season
//! names.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::culture::Culture;
use crate::error::{ConfigurationError, Result};
use crate::normalize::Normalizer;

/// The lexical maps every locale provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapKind {
    DayOfWeek,
    MonthOfYear,
    Cardinal,
    DayOfMonth,
    Unit,
    Season,
}

impl MapKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DayOfWeek => "day_of_week",
            Self::MonthOfYear => "month_of_year",
            Self::Cardinal => "cardinal",
            Self::DayOfMonth => "day_of_month",
            Self::Unit => "unit",
            Self::Season => "season",
        }
    }
}

impl std::fmt::Display for MapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar unit a unit word refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateUnit {
    Day,
    Week,
    Month,
    Year,
    Decade,
}

impl DateUnit {
    /// Short tag used by the host engine's duration values.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Day => "D",
            Self::Week => "W",
            Self::Month => "MON",
            Self::Year => "Y",
            Self::Decade => "DE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Spring => "SP",
            Self::Summer => "SU",
            Self::Fall => "FA",
            Self::Winter => "WI",
        }
    }
}

/// Immutable normalized-key lookup table.
///
/// Keys are validated against the locale's [`Normalizer`] at construction,
/// so a key that the classifiers could never produce is rejected up front
/// instead of silently never matching.
#[derive(Debug, Clone)]
pub struct LexicalMap<V> {
    kind: MapKind,
    entries: HashMap<String, V>,
}

impl<V: Copy> LexicalMap<V> {
    /// Build a map, rejecting empty input, duplicate keys and keys that are
    /// not in normal form.
    pub fn build<I, K>(
        kind: MapKind,
        culture: Culture,
        normalizer: &Normalizer,
        entries: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
    {
        let mut map = HashMap::new();
        for (key, value) in entries {
            let key = key.as_ref();
            let normalized = normalizer.normalize(key);
            if normalized != key {
                return Err(ConfigurationError::UnnormalizedKey {
                    culture,
                    map: kind,
                    key: key.to_string(),
                    normalized: normalized.into_owned(),
                });
            }
            if map.insert(key.to_string(), value).is_some() {
                return Err(ConfigurationError::DuplicateKey {
                    culture,
                    map: kind,
                    key: key.to_string(),
                });
            }
        }

        if map.is_empty() {
            return Err(ConfigurationError::MissingMap { culture, map: kind });
        }

        debug!(%culture, map = %kind, entries = map.len(), "built lexical map");
        Ok(Self { kind, entries: map })
    }

    /// Look up an already-normalized key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<V> {
        self.entries.get(key).copied()
    }

    /// Normalize `text` with the locale's normalizer, then look it up.
    #[must_use]
    pub fn lookup(&self, normalizer: &Normalizer, text: &str) -> Option<V> {
        self.get(&normalizer.normalize(text))
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub const fn kind(&self) -> MapKind {
        self.kind
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Static lexicon data a locale module ships.
///
/// Day-of-month keys are generated: the numerals `1`..`31`, the zero-padded
/// `01`..`09`, and each numeral followed by the locale's ordinal suffix, plus
/// any spelled-out forms in `day_of_month_words`.
#[derive(Debug, Clone, Copy)]
pub struct LexiconDef {
    pub day_of_week: &'static [(&'static str, u32)],
    pub month_of_year: &'static [(&'static str, u32)],
    pub cardinal: &'static [(&'static str, u32)],
    pub day_of_month_words: &'static [(&'static str, u32)],
    pub ordinal_suffix: fn(u32) -> &'static str,
    pub unit: &'static [(&'static str, DateUnit)],
    pub season: &'static [(&'static str, Season)],
}

/// The complete set of lexical maps of one locale.
#[derive(Debug, Clone)]
pub struct Lexicon {
    day_of_week: LexicalMap<u32>,
    month_of_year: LexicalMap<u32>,
    cardinal: LexicalMap<u32>,
    day_of_month: LexicalMap<u32>,
    unit: LexicalMap<DateUnit>,
    season: LexicalMap<Season>,
}

impl Lexicon {
    pub fn build(def: &LexiconDef, culture: Culture, normalizer: &Normalizer) -> Result<Self> {
        let copied = |entries: &'static [(&'static str, u32)]| entries.iter().copied();

        Ok(Self {
            day_of_week: LexicalMap::build(
                MapKind::DayOfWeek,
                culture,
                normalizer,
                copied(def.day_of_week),
            )?,
            month_of_year: LexicalMap::build(
                MapKind::MonthOfYear,
                culture,
                normalizer,
                copied(def.month_of_year),
            )?,
            cardinal: LexicalMap::build(
                MapKind::Cardinal,
                culture,
                normalizer,
                copied(def.cardinal),
            )?,
            day_of_month: LexicalMap::build(
                MapKind::DayOfMonth,
                culture,
                normalizer,
                day_of_month_keys(def),
            )?,
            unit: LexicalMap::build(MapKind::Unit, culture, normalizer, def.unit.iter().copied())?,
            season: LexicalMap::build(
                MapKind::Season,
                culture,
                normalizer,
                def.season.iter().copied(),
            )?,
        })
    }

    #[must_use]
    pub const fn day_of_week(&self) -> &LexicalMap<u32> {
        &self.day_of_week
    }

    #[must_use]
    pub const fn month_of_year(&self) -> &LexicalMap<u32> {
        &self.month_of_year
    }

    #[must_use]
    pub const fn cardinal(&self) -> &LexicalMap<u32> {
        &self.cardinal
    }

    #[must_use]
    pub const fn day_of_month(&self) -> &LexicalMap<u32> {
        &self.day_of_month
    }

    #[must_use]
    pub const fn unit(&self) -> &LexicalMap<DateUnit> {
        &self.unit
    }

    #[must_use]
    pub const fn season(&self) -> &LexicalMap<Season> {
        &self.season
    }

    /// Entry counts per map, for diagnostics.
    #[must_use]
    pub fn sizes(&self) -> [(MapKind, usize); 6] {
        [
            (MapKind::DayOfWeek, self.day_of_week.len()),
            (MapKind::MonthOfYear, self.month_of_year.len()),
            (MapKind::Cardinal, self.cardinal.len()),
            (MapKind::DayOfMonth, self.day_of_month.len()),
            (MapKind::Unit, self.unit.len()),
            (MapKind::Season, self.season.len()),
        ]
    }
}

fn day_of_month_keys(def: &LexiconDef) -> Vec<(String, u32)> {
    let mut keys = Vec::with_capacity(31 * 2 + 9 + def.day_of_month_words.len());
    for day in 1..=31 {
        keys.push((day.to_string(), day));
        keys.push((format!("{day}{}", (def.ordinal_suffix)(day)), day));
    }
    for day in 1..=9 {
        keys.push((format!("0{day}"), day));
    }
    keys.extend(
        def.day_of_month_words
            .iter()
            .map(|(word, day)| ((*word).to_string(), *day)),
    );
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn english_suffix(day: u32) -> &'static str {
        match day {
            1 | 21 | 31 => "st",
            2 | 22 => "nd",
            3 | 23 => "rd",
            _ => "th",
        }
    }

    const SAMPLE: LexiconDef = LexiconDef {
        day_of_week: &[("sunday", 0), ("monday", 1)],
        month_of_year: &[("january", 1)],
        cardinal: &[("first", 1)],
        day_of_month_words: &[],
        ordinal_suffix: english_suffix,
        unit: &[("day", DateUnit::Day), ("days", DateUnit::Day)],
        season: &[("winter", Season::Winter)],
    };

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_lookup_normalizes_input() {
        let normalizer = Normalizer::case_only();
        let map = LexicalMap::build(
            MapKind::DayOfWeek,
            Culture::English,
            &normalizer,
            SAMPLE.day_of_week.iter().copied(),
        )
        .expect("sample map should build");

        assert_eq!(map.lookup(&normalizer, "  Monday "), Some(1));
        assert_eq!(map.get("monday"), Some(1));
        assert_eq!(map.get("Monday"), None);
        assert_eq!(map.lookup(&normalizer, "funday"), None);
        assert_eq!(map.lookup(&normalizer, ""), None);
    }

    #[test]
    fn test_rejects_unnormalized_key() {
        let normalizer = Normalizer::folding_diacritics();
        let result = LexicalMap::build(
            MapKind::Season,
            Culture::Portuguese,
            &normalizer,
            [("verão", Season::Summer)],
        );

        match result {
            Err(ConfigurationError::UnnormalizedKey {
                key, normalized, ..
            }) => {
                assert_eq!(key, "verão");
                assert_eq!(normalized, "verao");
            }
            other => panic!("Expected UnnormalizedKey, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_uppercase_key() {
        let result = LexicalMap::build(
            MapKind::MonthOfYear,
            Culture::English,
            &Normalizer::case_only(),
            [("January", 1)],
        );
        assert!(matches!(
            result,
            Err(ConfigurationError::UnnormalizedKey { .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_key() {
        let result = LexicalMap::build(
            MapKind::Cardinal,
            Culture::English,
            &Normalizer::case_only(),
            [("first", 1), ("first", 2)],
        );
        assert!(matches!(
            result,
            Err(ConfigurationError::DuplicateKey { key, .. }) if key == "first"
        ));
    }

    #[test]
    fn test_rejects_empty_map() {
        let result = LexicalMap::<u32>::build(
            MapKind::Cardinal,
            Culture::German,
            &Normalizer::case_only(),
            Vec::<(&str, u32)>::new(),
        );
        assert!(matches!(
            result,
            Err(ConfigurationError::MissingMap {
                map: MapKind::Cardinal,
                ..
            })
        ));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_day_of_month_generation() {
        let lexicon = Lexicon::build(&SAMPLE, Culture::English, &Normalizer::case_only())
            .expect("sample lexicon should build");

        let days = lexicon.day_of_month();
        assert_eq!(days.get("1"), Some(1));
        assert_eq!(days.get("01"), Some(1));
        assert_eq!(days.get("1st"), Some(1));
        assert_eq!(days.get("22nd"), Some(22));
        assert_eq!(days.get("13th"), Some(13));
        assert_eq!(days.get("31st"), Some(31));
        assert_eq!(days.get("32"), None);
        assert_eq!(days.len(), 31 * 2 + 9);
    }

    #[test]
    fn test_missing_map_reported_by_kind() {
        let def = LexiconDef {
            season: &[],
            ..SAMPLE
        };
        let result = Lexicon::build(&def, Culture::English, &Normalizer::case_only());
        assert!(matches!(
            result,
            Err(ConfigurationError::MissingMap {
                map: MapKind::Season,
                ..
            })
        ));
    }

    #[test]
    fn test_unit_tags() {
        assert_eq!(DateUnit::Month.tag(), "MON");
        assert_eq!(Season::Fall.tag(), "FA");
    }
}
