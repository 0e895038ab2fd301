//! Per-locale text normalization.
//!
//! Every classifier and every lexical-map key goes through the same
//! [`Normalizer`], so the two can never disagree. Folding rules are chosen per
//! locale: Portuguese matches "amanhã" and "amanha" alike, French keeps its
//! accents and lists both spellings explicitly.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// How far a locale folds characters beyond lower-casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Folding {
    /// Lower-case and canonically compose; accents are significant.
    #[default]
    CaseOnly,
    /// Lower-case and drop combining marks after canonical decomposition.
    Diacritics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Normalizer {
    folding: Folding,
}

impl Normalizer {
    #[must_use]
    pub const fn new(folding: Folding) -> Self {
        Self { folding }
    }

    #[must_use]
    pub const fn case_only() -> Self {
        Self::new(Folding::CaseOnly)
    }

    #[must_use]
    pub const fn folding_diacritics() -> Self {
        Self::new(Folding::Diacritics)
    }

    #[must_use]
    pub const fn folding(&self) -> Folding {
        self.folding
    }

    /// Normalize a span for comparison against locale data.
    ///
    /// Lower-cases, folds according to the locale, then trims. Trimming comes
    /// last so that marks stripped from the edges cannot leave whitespace
    /// behind, which keeps the function idempotent. Lower-case ASCII input
    /// is returned borrowed.
    #[must_use]
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let trimmed = text.trim();
        if trimmed.is_ascii() && !trimmed.bytes().any(|b| b.is_ascii_uppercase()) {
            return Cow::Borrowed(trimmed);
        }

        let lower = text.to_lowercase();
        let folded: String = match self.folding {
            Folding::CaseOnly => lower.nfc().collect(),
            Folding::Diacritics => fold_diacritics(&lower),
        };
        Cow::Owned(folded.trim().to_string())
    }

    /// Whether `text` is already in normal form.
    #[must_use]
    pub fn is_normalized(&self, text: &str) -> bool {
        self.normalize(text) == text
    }
}

/// Strip combining marks: "amanhã" becomes "amanha", "ç" becomes "c".
#[must_use]
pub fn fold_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}
