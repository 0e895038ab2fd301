//! Property tests for locale normalization.
//!
//! Lexical-map keys are validated against the normalizer, and classifiers
//! normalize their input once; both rely on normalization being a fixed
//! point after one application.

use chronolex_core::{Normalizer, normalize::fold_diacritics};
use proptest::prelude::*;

/// Latin, Greek and Cyrillic letters mixed with combining marks, ordinal
/// indicators and whitespace.
fn phrase_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ]{0,24}",
        "[a-zA-ZÀ-ÿ ]{0,24}",
        "[a-zÀ-ɏ\u{0300}-\u{036f}ºª .'-]{0,24}",
        "[Α-ωА-я \t]{0,16}",
        "[ \t\u{0301}]{0,3}[a-zãõçéê]{1,12}[ \t]{0,3}",
    ]
}

proptest! {
    #[test]
    fn normalize_is_idempotent_case_only(text in phrase_strategy()) {
        let normalizer = Normalizer::case_only();
        let once = normalizer.normalize(&text).into_owned();
        prop_assert_eq!(normalizer.normalize(&once), once.as_str());
    }

    #[test]
    fn normalize_is_idempotent_folding(text in phrase_strategy()) {
        let normalizer = Normalizer::folding_diacritics();
        let once = normalizer.normalize(&text).into_owned();
        prop_assert_eq!(normalizer.normalize(&once), once.as_str());
    }

    #[test]
    fn normalized_text_is_trimmed(text in phrase_strategy()) {
        for normalizer in [Normalizer::case_only(), Normalizer::folding_diacritics()] {
            let once = normalizer.normalize(&text);
            prop_assert_eq!(once.trim(), &*once);
        }
    }

    #[test]
    fn folding_removes_every_combining_mark(text in "[a-zà-ÿ\u{0300}-\u{036f}]{0,16}") {
        let folded = fold_diacritics(&text);
        prop_assert!(folded.chars().all(|c| !('\u{0300}'..='\u{036f}').contains(&c)), "folded output contains combining diacritics");
    }

    #[test]
    fn normalize_never_panics(text in any::<String>()) {
        let _ = Normalizer::case_only().normalize(&text);
        let _ = Normalizer::folding_diacritics().normalize(&text);
    }
}

#[test]
fn accented_and_plain_forms_agree_when_folding() {
    let normalizer = Normalizer::folding_diacritics();
    for (accented, plain) in [
        ("depois de amanhã", "depois de amanha"),
        ("Próximo Mês", "proximo mes"),
        ("sábado", "sabado"),
    ] {
        assert_eq!(normalizer.normalize(accented), normalizer.normalize(plain));
    }
}
