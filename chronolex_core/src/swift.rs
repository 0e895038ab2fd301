//! The queries a recognition engine asks of a locale.

use serde::{Deserialize, Serialize};

/// Tag of a classified relative marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeCue {
    Next,
    Past,
    This,
    /// "three days ago"
    Ago,
    /// "in three days"
    In,
    /// Ordinal "last", as opposed to a numbered position.
    CardinalLast,
}

impl RelativeCue {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Past => "past",
            Self::This => "this",
            Self::Ago => "ago",
            Self::In => "in",
            Self::CardinalLast => "cardinal_last",
        }
    }

    /// Sign of the shift the cue implies.
    #[must_use]
    pub const fn direction(self) -> i32 {
        match self {
            Self::Next | Self::In => 1,
            Self::Past | Self::Ago | Self::CardinalLast => -1,
            Self::This => 0,
        }
    }
}

impl std::fmt::Display for RelativeCue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Swift offsets and period-shape predicates for one locale.
///
/// Every method is total: any string, including the empty one, yields a
/// value. `0` and `false` mean "no relative reading", which the engine
/// treats as absolute.
pub trait SwiftResolver {
    /// Offset in days: "tomorrow" is 1, "the day before yesterday" is -2.
    fn resolve_day_swift(&self, text: &str) -> i32;

    /// Offset in months: "next month" is 1.
    fn resolve_month_swift(&self, text: &str) -> i32;

    /// Offset in years: "l'année dernière" is -1.
    fn resolve_year_swift(&self, text: &str) -> i32;

    /// Offset of a day, week or month period: "la semaine prochaine" is 1.
    fn resolve_day_or_month_swift(&self, text: &str) -> i32;

    fn is_cardinal_last(&self, text: &str) -> bool;

    fn is_week_only(&self, text: &str) -> bool;

    fn is_month_only(&self, text: &str) -> bool;

    fn is_year_only(&self, text: &str) -> bool;

    fn is_weekend(&self, text: &str) -> bool;

    fn is_week_to_date(&self, text: &str) -> bool;

    fn is_month_to_date(&self, text: &str) -> bool;

    fn is_year_to_date(&self, text: &str) -> bool;

    /// Whether a period phrase points forward ("cette semaine", "le mois
    /// prochain").
    fn is_future(&self, text: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction() {
        assert_eq!(RelativeCue::Next.direction(), 1);
        assert_eq!(RelativeCue::In.direction(), 1);
        assert_eq!(RelativeCue::This.direction(), 0);
        assert_eq!(RelativeCue::Ago.direction(), -1);
        assert_eq!(RelativeCue::CardinalLast.direction(), -1);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_serde_names() {
        let json = serde_json::to_string(&RelativeCue::CardinalLast).expect("cue should serialize");
        assert_eq!(json, "\"cardinal_last\"");
        assert_eq!(RelativeCue::CardinalLast.to_string(), "cardinal_last");
    }
}
