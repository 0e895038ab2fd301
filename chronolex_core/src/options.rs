//! Option sets that key a locale configuration alongside its culture.

use serde::{Deserialize, Serialize};

/// Recognition options forwarded from the host engine.
///
/// A [`crate::LocaleConfiguration`] is built once per `(Culture,
/// DateTimeOptions)` pair; the classifiers here do not branch on the options,
/// but the host reads them back through the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeOptions {
    pub skip_from_to_merge: bool,
    pub split_date_and_time: bool,
    pub calendar: bool,
    pub extended_types: bool,
    /// Read numeric dates as day/month/year instead of month/day/year.
    pub dmy_date_format: bool,
}

impl DateTimeOptions {
    pub const SKIP_FROM_TO_MERGE: u32 = 1;
    pub const SPLIT_DATE_AND_TIME: u32 = 2;
    pub const CALENDAR: u32 = 4;
    pub const EXTENDED_TYPES: u32 = 8;

    /// Every option off.
    #[must_use]
    pub const fn new() -> Self {
        Self::from_bits(0)
    }

    /// Build from the host engine's flag word. `dmy_date_format` is not a
    /// flag there and stays `false`.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            skip_from_to_merge: bits & Self::SKIP_FROM_TO_MERGE != 0,
            split_date_and_time: bits & Self::SPLIT_DATE_AND_TIME != 0,
            calendar: bits & Self::CALENDAR != 0,
            extended_types: bits & Self::EXTENDED_TYPES != 0,
            dmy_date_format: false,
        }
    }

    /// The host engine's flag word for these options.
    #[must_use]
    pub const fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.skip_from_to_merge {
            bits |= Self::SKIP_FROM_TO_MERGE;
        }
        if self.split_date_and_time {
            bits |= Self::SPLIT_DATE_AND_TIME;
        }
        if self.calendar {
            bits |= Self::CALENDAR;
        }
        if self.extended_types {
            bits |= Self::EXTENDED_TYPES;
        }
        bits
    }

    /// Set day/month/year reading of numeric dates.
    #[must_use]
    pub const fn with_dmy_date_format(mut self) -> Self {
        self.dmy_date_format = true;
        self
    }
}

impl Default for DateTimeOptions {
    fn default() -> Self {
        Self::new()
    }
}
