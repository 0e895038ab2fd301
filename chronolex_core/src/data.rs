//! Compiled per-culture locale data.

use tracing::{info, warn};

use crate::composer::LocaleModule;
use crate::culture::Culture;
use crate::error::{ConfigurationError, Result};
use crate::lexicon::Lexicon;
use crate::normalize::Normalizer;
use crate::pattern::{PatternCatalog, PatternDef, PatternKey};
use crate::rules::SwiftRules;

/// The option-independent half of a locale configuration: compiled
/// patterns, validated lexical maps and rules.
///
/// Compiled once per culture (and override set) and shared through an `Arc`
/// by every [`crate::LocaleConfiguration`] built from it.
#[derive(Debug)]
pub struct LocaleData {
    culture: Culture,
    normalizer: Normalizer,
    catalog: PatternCatalog,
    lexicon: Lexicon,
    rules: SwiftRules,
}

impl LocaleData {
    /// Compile a locale module's data, with `overrides` replacing built-in
    /// patterns key by key.
    ///
    /// Fails on the first pattern that does not compile or carries text the
    /// locale's normalizer would rewrite, required key that is absent, rule
    /// literal that is not normalized, or lexical map that is empty,
    /// unnormalized or has duplicate keys.
    pub fn compile<M: LocaleModule>(overrides: &[PatternDef]) -> Result<Self> {
        let culture = M::CULTURE;
        let normalizer = M::normalizer();
        let builtin = M::patterns();

        for over in overrides {
            if builtin.iter().any(|def| def.key == over.key) {
                warn!(%culture, key = %over.key, "Overriding built-in pattern");
            }
        }

        let catalog = PatternCatalog::compile(culture, builtin.iter().chain(overrides))?;
        if let Some((key, found)) = builtin
            .iter()
            .chain(overrides)
            .find_map(|def| def.unnormalized_char(&normalizer).map(|found| (def.key, found)))
        {
            return Err(ConfigurationError::UnnormalizedPattern {
                culture,
                key,
                found,
            });
        }

        let rules = *M::swift_rules();
        catalog.require(PatternKey::COMMON_REQUIRED)?;
        catalog.require(M::required_patterns())?;
        catalog.require(&rules.referenced_keys())?;
        rules.validate(culture, &normalizer)?;

        let lexicon = Lexicon::build(M::lexicon(), culture, &normalizer)?;

        info!(
            %culture,
            patterns = catalog.len(),
            overrides = overrides.len(),
            "Compiled locale data"
        );

        Ok(Self {
            culture,
            normalizer,
            catalog,
            lexicon,
            rules,
        })
    }

    #[must_use]
    pub const fn culture(&self) -> Culture {
        self.culture
    }

    #[must_use]
    pub const fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    #[must_use]
    pub const fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[must_use]
    pub const fn rules(&self) -> &SwiftRules {
        &self.rules
    }
}
