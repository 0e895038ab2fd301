//! Property tests over every shipped locale: classifiers are total,
//! weekend and week-only never overlap, literal idioms take priority over
//! the relative fallback, and diacritic folding does not change results.

use std::sync::OnceLock;

use chronolex_core::{Culture, SwiftResolver, normalize::fold_diacritics};
use chronolex_locales::LocaleRegistry;
use proptest::prelude::*;

fn registry() -> &'static LocaleRegistry {
    static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| LocaleRegistry::with_defaults().expect("shipped locales should compose"))
}

/// Phrases assembled from relative-time vocabulary of all four languages.
fn phrase_strategy() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "the", "next", "last", "this", "day", "week", "weekend", "month", "year", "after",
        "before", "tomorrow", "yesterday", "la", "semaine", "prochaine", "dernière", "fin", "de",
        "mois", "cette", "année", "ans", "o", "próximo", "último", "fim", "semana", "mês", "ano",
        "amanhã", "anteontem", "depois", "nächste", "letzte", "Woche", "Wochenende", "Jahr",
    ]);
    prop::collection::vec(words, 0..6).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn classifiers_are_total(text in any::<String>()) {
        for config in registry().iter() {
            let _ = config.resolve_day_swift(&text);
            let _ = config.resolve_month_swift(&text);
            let _ = config.resolve_year_swift(&text);
            let _ = config.resolve_day_or_month_swift(&text);
            let _ = config.is_cardinal_last(&text);
            let _ = config.is_week_only(&text);
            let _ = config.is_month_only(&text);
            let _ = config.is_year_only(&text);
            let _ = config.is_weekend(&text);
            let _ = config.is_week_to_date(&text);
            let _ = config.is_month_to_date(&text);
            let _ = config.is_year_to_date(&text);
            let _ = config.is_future(&text);
            let _ = config.classify_cue(&text);
            let _ = config.is_connector(&text);
        }
    }

    #[test]
    fn offsets_stay_in_range(text in phrase_strategy()) {
        for config in registry().iter() {
            prop_assert!((-2..=2).contains(&config.resolve_day_swift(&text)));
            prop_assert!((-1..=1).contains(&config.resolve_month_swift(&text)));
            prop_assert!((-1..=1).contains(&config.resolve_year_swift(&text)));
            prop_assert!((-1..=1).contains(&config.resolve_day_or_month_swift(&text)));
        }
    }

    #[test]
    fn weekend_and_week_only_are_exclusive(text in phrase_strategy()) {
        for config in registry().iter() {
            prop_assert!(!(config.is_weekend(&text) && config.is_week_only(&text)));
        }
    }

    #[test]
    fn weekend_and_week_only_are_exclusive_for_any_text(text in any::<String>()) {
        for config in registry().iter() {
            prop_assert!(!(config.is_weekend(&text) && config.is_week_only(&text)));
        }
    }

    #[test]
    fn literal_suffix_beats_relative_fallback(
        lead in prop::sample::select(vec!["", "the ", "the next ", "the last ", "on the following "]),
    ) {
        let en = registry().get_any(Culture::English).expect("english should be registered");
        prop_assert_eq!(en.resolve_day_swift(&format!("{lead}day after tomorrow")), 2);
        prop_assert_eq!(en.resolve_day_swift(&format!("{lead}day before yesterday")), -2);
    }

    #[test]
    fn portuguese_ignores_diacritics(text in phrase_strategy()) {
        let pt = registry().get_any(Culture::Portuguese).expect("portuguese should be registered");
        let folded = fold_diacritics(&text);
        prop_assert_eq!(pt.resolve_day_swift(&text), pt.resolve_day_swift(&folded));
        prop_assert_eq!(pt.resolve_month_swift(&text), pt.resolve_month_swift(&folded));
        prop_assert_eq!(pt.is_week_only(&text), pt.is_week_only(&folded));
    }

    #[test]
    fn normalization_is_idempotent_per_locale(text in phrase_strategy()) {
        for config in registry().iter() {
            let once = config.normalize(&text).into_owned();
            prop_assert_eq!(config.normalize(&once), once.as_str());
        }
    }
}
