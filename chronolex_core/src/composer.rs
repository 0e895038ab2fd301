//! One-time construction of [`LocaleConfiguration`]s.

use std::sync::Arc;

use tracing::info;

use crate::configuration::LocaleConfiguration;
use crate::culture::Culture;
use crate::data::LocaleData;
use crate::error::Result;
use crate::host::HostContext;
use crate::lexicon::LexiconDef;
use crate::normalize::Normalizer;
use crate::options::DateTimeOptions;
use crate::pattern::{PatternDef, PatternKey};
use crate::rules::SwiftRules;

/// The data a language contributes. Implemented once per locale by a
/// zero-sized type and chosen statically.
pub trait LocaleModule {
    const CULTURE: Culture;

    fn normalizer() -> Normalizer;

    fn patterns() -> Vec<PatternDef>;

    /// Keys this locale needs on top of [`PatternKey::COMMON_REQUIRED`].
    fn required_patterns() -> &'static [PatternKey] {
        &[]
    }

    fn lexicon() -> &'static LexiconDef;

    fn swift_rules() -> &'static SwiftRules;
}

/// Combines the host's sub-extractors with locale data.
#[derive(Debug, Clone)]
pub struct Composer {
    host: HostContext,
}

impl Composer {
    #[must_use]
    pub const fn new(host: HostContext) -> Self {
        Self { host }
    }

    #[must_use]
    pub const fn host(&self) -> &HostContext {
        &self.host
    }

    pub fn compose<M: LocaleModule>(&self, options: DateTimeOptions) -> Result<LocaleConfiguration> {
        self.compose_with_overrides::<M>(options, &[])
    }

    /// Compile fresh locale data (see [`LocaleData::compile`]) and assemble
    /// one configuration from it.
    pub fn compose_with_overrides<M: LocaleModule>(
        &self,
        options: DateTimeOptions,
        overrides: &[PatternDef],
    ) -> Result<LocaleConfiguration> {
        let data = Arc::new(LocaleData::compile::<M>(overrides)?);
        Ok(self.assemble(data, options))
    }

    /// Build a configuration over already compiled data. Every configuration
    /// assembled from the same `Arc` shares its catalog and lexicon.
    #[must_use]
    pub fn assemble(&self, data: Arc<LocaleData>, options: DateTimeOptions) -> LocaleConfiguration {
        info!(
            culture = %data.culture(),
            options = options.bits(),
            dmy = options.dmy_date_format,
            "Composed locale configuration"
        );
        LocaleConfiguration::new(data, options, self.host.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::ConfigurationError;
    use crate::host::{Extractor, PatternExtractor, SubExtractor};
    use crate::lexicon::{DateUnit, Season};
    use crate::rules::{CueRules, DayRule, DayRules, Marker, PeriodShapeRules, Precedence};
    use crate::swift::{RelativeCue, SwiftResolver};

    const PATTERNS: &[(PatternKey, &str)] = &[
        (PatternKey::NextPrefix, r"\bnext\b"),
        (PatternKey::PastPrefix, r"\blast\b"),
        (PatternKey::ThisPrefix, r"\bthis\b"),
        (PatternKey::SpecialDay, r"\b(today|tomorrow)\b"),
        (PatternKey::WeekDay, r"\b(sunday|monday)\b"),
        (PatternKey::Month, r"\bjanuary\b"),
        (PatternKey::DateUnit, r"\b(days?|weeks?)\b"),
        (PatternKey::RelativeMonth, r"\b(next|last|this)\s+month\b"),
        (PatternKey::On, r"^on$"),
        (PatternKey::Preposition, r"^(on|at)$"),
        (PatternKey::Connector, r"^,$"),
        (PatternKey::Ago, r"\bago\b"),
        (PatternKey::Later, r"\blater\b"),
        (PatternKey::Now, r"\bnow\b"),
    ];

    const CUES: CueRules = CueRules {
        next: &[Marker::Pattern(PatternKey::NextPrefix)],
        past: &[Marker::Pattern(PatternKey::PastPrefix)],
        this: &[Marker::Pattern(PatternKey::ThisPrefix)],
        precedence: Precedence::NextWins,
    };

    static RULES: SwiftRules = SwiftRules {
        day: DayRules {
            literals: &[DayRule::exact("today", 0), DayRule::exact("tomorrow", 1)],
            fallback: None,
        },
        month: CUES,
        year: CUES,
        day_or_month: CUES,
        shapes: PeriodShapeRules {
            cardinal_last: &[Marker::Exact("last")],
            ..PeriodShapeRules::NONE
        },
    };

    const fn suffix(_: u32) -> &'static str {
        "th"
    }

    static LEXICON: LexiconDef = LexiconDef {
        day_of_week: &[("sunday", 0), ("monday", 1)],
        month_of_year: &[("january", 1)],
        cardinal: &[("first", 1)],
        day_of_month_words: &[],
        ordinal_suffix: suffix,
        unit: &[("day", DateUnit::Day)],
        season: &[("winter", Season::Winter)],
    };

    struct Tiny;

    impl LocaleModule for Tiny {
        const CULTURE: Culture = Culture::English;

        fn normalizer() -> Normalizer {
            Normalizer::case_only()
        }

        fn patterns() -> Vec<PatternDef> {
            PatternDef::from_table(PATTERNS)
        }

        fn lexicon() -> &'static LexiconDef {
            &LEXICON
        }

        fn swift_rules() -> &'static SwiftRules {
            &RULES
        }
    }

    /// Same data without the `Now` pattern.
    struct MissingNow;

    impl LocaleModule for MissingNow {
        const CULTURE: Culture = Culture::German;

        fn normalizer() -> Normalizer {
            Normalizer::case_only()
        }

        fn patterns() -> Vec<PatternDef> {
            Tiny::patterns()
                .into_iter()
                .filter(|def| def.key != PatternKey::Now)
                .collect()
        }

        fn lexicon() -> &'static LexiconDef {
            &LEXICON
        }

        fn swift_rules() -> &'static SwiftRules {
            &RULES
        }
    }

    /// Needs a key the tables never provide.
    struct NeedsOr;

    impl LocaleModule for NeedsOr {
        const CULTURE: Culture = Culture::German;

        fn normalizer() -> Normalizer {
            Normalizer::case_only()
        }

        fn patterns() -> Vec<PatternDef> {
            Tiny::patterns()
        }

        fn required_patterns() -> &'static [PatternKey] {
            &[PatternKey::Or]
        }

        fn lexicon() -> &'static LexiconDef {
            &LEXICON
        }

        fn swift_rules() -> &'static SwiftRules {
            &RULES
        }
    }

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn composer() -> Composer {
        let host = SubExtractor::ALL
            .into_iter()
            .fold(HostContext::builder(), |builder, kind| {
                let extractor: Arc<dyn Extractor> = Arc::new(
                    PatternExtractor::new(kind, r"\d+").expect("test pattern should compile"),
                );
                builder.extractor(extractor)
            })
            .build()
            .expect("test host should build");
        Composer::new(host)
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_compose_tiny_locale() {
        let config = composer()
            .compose::<Tiny>(DateTimeOptions::default())
            .expect("tiny locale should compose");

        assert_eq!(config.culture(), Culture::English);
        assert_eq!(config.resolve_day_swift(" Tomorrow "), 1);
        assert_eq!(config.resolve_month_swift("next month"), 1);
        assert_eq!(config.month_cue("this month"), Some(RelativeCue::This));
        assert_eq!(config.month_cue("january"), None);
        assert_eq!(config.classify_cue("last"), Some(RelativeCue::CardinalLast));
        assert_eq!(config.classify_cue("two days ago"), Some(RelativeCue::Ago));
        assert!(config.is_connector(""));
        assert!(config.is_connector(" At "));
        assert!(!config.is_connector("between"));
        assert_eq!(config.relative_prefixes().len(), 3);
        assert!(config.am_pm_patterns().is_empty());
        assert_eq!(config.host().date().kind(), SubExtractor::Date);
    }

    #[test]
    fn test_missing_common_pattern_fails_at_construction() {
        let result = composer().compose::<MissingNow>(DateTimeOptions::default());
        assert!(matches!(
            result,
            Err(ConfigurationError::MissingPattern {
                key: PatternKey::Now,
                culture: Culture::German,
            })
        ));
    }

    #[test]
    fn test_missing_locale_pattern_fails_at_construction() {
        let result = composer().compose::<NeedsOr>(DateTimeOptions::default());
        assert!(matches!(
            result,
            Err(ConfigurationError::MissingPattern {
                key: PatternKey::Or,
                ..
            })
        ));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_overrides_replace_and_extend() {
        let overrides = [
            PatternDef::owned(PatternKey::Now, r"\bright now\b"),
            PatternDef::owned(PatternKey::Or, r"\bor\b"),
        ];
        let config = composer()
            .compose_with_overrides::<NeedsOr>(DateTimeOptions::default(), &overrides)
            .expect("override should supply the missing key");

        assert!(config.catalog().is_match(PatternKey::Now, "right now"));
        assert!(!config.catalog().is_match(PatternKey::Now, "now"));
        assert!(config.pattern(PatternKey::Or).is_some());
    }

    #[test]
    fn test_invalid_override_fails() {
        let overrides = [PatternDef::owned(PatternKey::Now, r"(now")];
        let result =
            composer().compose_with_overrides::<Tiny>(DateTimeOptions::default(), &overrides);
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidPattern {
                key: PatternKey::Now,
                ..
            })
        ));
    }

    #[test]
    fn test_unnormalized_override_fails() {
        let overrides = [PatternDef::owned(PatternKey::Now, r"\bRight now\b")];
        let result =
            composer().compose_with_overrides::<Tiny>(DateTimeOptions::default(), &overrides);
        assert!(matches!(
            result,
            Err(ConfigurationError::UnnormalizedPattern {
                key: PatternKey::Now,
                found: 'R',
                ..
            })
        ));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_assembled_configurations_share_data() {
        let composer = composer();
        let data = Arc::new(LocaleData::compile::<Tiny>(&[]).expect("tiny locale should compile"));
        let plain = composer.assemble(Arc::clone(&data), DateTimeOptions::default());
        let dmy = composer.assemble(
            Arc::clone(&data),
            DateTimeOptions::default().with_dmy_date_format(),
        );

        assert!(Arc::ptr_eq(plain.data(), dmy.data()));
        assert!(std::ptr::eq(plain.catalog(), dmy.catalog()));
        assert_ne!(plain.options(), dmy.options());
        assert_eq!(dmy.resolve_day_swift("tomorrow"), 1);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_options_are_kept() {
        let options = DateTimeOptions::from_bits(DateTimeOptions::CALENDAR).with_dmy_date_format();
        let config = composer()
            .compose::<Tiny>(options)
            .expect("tiny locale should compose");
        assert_eq!(config.options(), options);
    }
}
