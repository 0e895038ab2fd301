//! Eager construction and shared lookup of locale configurations.

use std::sync::Arc;

use chronolex_core::{
    Composer, Culture, DateTimeOptions, HostContext, LocaleConfiguration, LocaleData, PatternDef,
    Result,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{English, French, German, Portuguese, reference_host};

/// One (culture, option set) pair to build, with optional pattern overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleRequest {
    pub culture: Culture,
    #[serde(default)]
    pub options: DateTimeOptions,
    #[serde(default)]
    pub pattern_overrides: Vec<PatternDef>,
}

impl LocaleRequest {
    #[must_use]
    pub const fn new(culture: Culture) -> Self {
        Self {
            culture,
            options: DateTimeOptions::new(),
            pattern_overrides: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_options(mut self, options: DateTimeOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_override(mut self, def: PatternDef) -> Self {
        self.pattern_overrides.push(def);
        self
    }
}

/// Compile the data of a culture's locale module.
pub fn locale_data(culture: Culture, overrides: &[PatternDef]) -> Result<LocaleData> {
    match culture {
        Culture::English => LocaleData::compile::<English>(overrides),
        Culture::French => LocaleData::compile::<French>(overrides),
        Culture::Portuguese => LocaleData::compile::<Portuguese>(overrides),
        Culture::German => LocaleData::compile::<German>(overrides),
    }
}

/// Compose the configuration for a single request.
pub fn compose(composer: &Composer, request: &LocaleRequest) -> Result<LocaleConfiguration> {
    let data = locale_data(request.culture, &request.pattern_overrides)?;
    Ok(composer.assemble(Arc::new(data), request.options))
}

/// Every configured locale, built up front and handed out as shared
/// read-only references.
#[derive(Debug, Clone, Default)]
pub struct LocaleRegistry {
    configurations: Vec<Arc<LocaleConfiguration>>,
}

impl LocaleRegistry {
    /// Compose every request before returning. The first failure aborts the
    /// whole build. Requests for the same culture and overrides share one
    /// compiled [`LocaleData`]. A later request for the same culture and
    /// options replaces an earlier one.
    pub fn build(host: HostContext, requests: &[LocaleRequest]) -> Result<Self> {
        let composer = Composer::new(host);
        let mut compiled: Vec<(Culture, &[PatternDef], Arc<LocaleData>)> = Vec::new();
        let mut configurations: Vec<Arc<LocaleConfiguration>> = Vec::with_capacity(requests.len());

        for request in requests {
            let overrides = request.pattern_overrides.as_slice();
            let data = if let Some((.., data)) = compiled
                .iter()
                .find(|(culture, over, _)| *culture == request.culture && *over == overrides)
            {
                Arc::clone(data)
            } else {
                let data = Arc::new(locale_data(request.culture, overrides)?);
                compiled.push((request.culture, overrides, Arc::clone(&data)));
                data
            };

            let configuration = Arc::new(composer.assemble(data, request.options));
            if let Some(existing) = configurations.iter_mut().find(|existing| {
                existing.culture() == request.culture && existing.options() == request.options
            }) {
                warn!(culture = %request.culture, "Duplicate locale request, keeping the later one");
                *existing = configuration;
            } else {
                configurations.push(configuration);
            }
        }

        info!(
            locales = configurations.len(),
            compiled = compiled.len(),
            "Locale registry ready"
        );
        Ok(Self { configurations })
    }

    /// All shipped locales with default options over the reference host.
    pub fn with_defaults() -> Result<Self> {
        let requests: Vec<LocaleRequest> = Culture::ALL.into_iter().map(LocaleRequest::new).collect();
        Self::build(reference_host()?, &requests)
    }

    #[must_use]
    pub fn get(&self, culture: Culture, options: DateTimeOptions) -> Option<Arc<LocaleConfiguration>> {
        self.configurations
            .iter()
            .find(|config| config.culture() == culture && config.options() == options)
            .cloned()
    }

    /// The first configuration built for `culture`, whatever its options.
    #[must_use]
    pub fn get_any(&self, culture: Culture) -> Option<Arc<LocaleConfiguration>> {
        self.configurations
            .iter()
            .find(|config| config.culture() == culture)
            .cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<LocaleConfiguration>> {
        self.configurations.iter()
    }

    #[must_use]
    pub fn cultures(&self) -> Vec<Culture> {
        let mut cultures: Vec<Culture> = self.iter().map(|config| config.culture()).collect();
        cultures.sort_unstable();
        cultures.dedup();
        cultures
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chronolex_core::{ConfigurationError, PatternKey, SwiftResolver};

    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_with_defaults_builds_every_locale() {
        let registry = LocaleRegistry::with_defaults().expect("shipped locales should compose");
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.cultures(), Culture::ALL.to_vec());
        for culture in Culture::ALL {
            let config = registry
                .get(culture, DateTimeOptions::default())
                .expect("default options should be registered");
            assert_eq!(config.culture(), culture);
        }
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_option_sets_are_separate_entries() {
        let host = reference_host().expect("reference host should build");
        let dmy = DateTimeOptions::default().with_dmy_date_format();
        let requests = [
            LocaleRequest::new(Culture::French),
            LocaleRequest::new(Culture::French).with_options(dmy),
        ];
        let registry = LocaleRegistry::build(host, &requests).expect("requests should compose");

        assert_eq!(registry.len(), 2);
        assert!(registry.get(Culture::French, dmy).is_some());
        assert!(registry.get(Culture::English, dmy).is_none());
        assert!(registry.get_any(Culture::French).is_some());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_duplicate_request_keeps_later_overrides() {
        let host = reference_host().expect("reference host should build");
        let requests = [
            LocaleRequest::new(Culture::English),
            LocaleRequest::new(Culture::English)
                .with_override(PatternDef::owned(PatternKey::Now, r"\bnowadays\b")),
        ];
        let registry = LocaleRegistry::build(host, &requests).expect("requests should compose");

        assert_eq!(registry.len(), 1);
        let config = registry
            .get_any(Culture::English)
            .expect("english should be registered");
        assert!(config.catalog().is_match(PatternKey::Now, "nowadays"));
        assert_eq!(config.resolve_day_swift("tomorrow"), 1);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_bad_override_aborts_build() {
        let host = reference_host().expect("reference host should build");
        let requests = [
            LocaleRequest::new(Culture::German),
            LocaleRequest::new(Culture::Portuguese)
                .with_override(PatternDef::owned(PatternKey::Ago, r"(atras")),
        ];
        let result = LocaleRegistry::build(host, &requests);
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidPattern {
                culture: Culture::Portuguese,
                key: PatternKey::Ago,
                ..
            })
        ));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_overrides_get_their_own_data() {
        let host = reference_host().expect("reference host should build");
        let dmy = DateTimeOptions::default().with_dmy_date_format();
        let requests = [
            LocaleRequest::new(Culture::English),
            LocaleRequest::new(Culture::English)
                .with_options(dmy)
                .with_override(PatternDef::owned(PatternKey::Now, r"\bnowadays\b")),
        ];
        let registry = LocaleRegistry::build(host, &requests).expect("requests should compose");

        let plain = registry
            .get(Culture::English, DateTimeOptions::default())
            .expect("default options should be registered");
        let custom = registry.get(Culture::English, dmy).expect("dmy should be registered");
        assert!(!Arc::ptr_eq(plain.data(), custom.data()));
        assert!(!plain.catalog().is_match(PatternKey::Now, "nowadays"));
        assert!(custom.catalog().is_match(PatternKey::Now, "nowadays"));
    }

    #[test]
    fn test_accented_override_rejected_for_folding_locale() {
        let request = LocaleRequest::new(Culture::Portuguese)
            .with_override(PatternDef::owned(PatternKey::Now, r"\b(já)\b"));
        let result = reference_host()
            .and_then(|host| LocaleRegistry::build(host, std::slice::from_ref(&request)));
        assert!(matches!(
            result,
            Err(ConfigurationError::UnnormalizedPattern {
                culture: Culture::Portuguese,
                key: PatternKey::Now,
                found: 'á',
            })
        ));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_folded_override_composes() {
        let host = reference_host().expect("reference host should build");
        let request = LocaleRequest::new(Culture::Portuguese)
            .with_override(PatternDef::owned(PatternKey::Now, r"\b(ja|agora)\b"));
        let registry = LocaleRegistry::build(host, &[request]).expect("folded override should compose");
        let pt = registry
            .get_any(Culture::Portuguese)
            .expect("portuguese should be registered");
        assert!(pt.catalog().is_match(PatternKey::Now, &pt.normalize("Já")));
    }

    #[test]
    fn test_new_request_uses_default_options() {
        let request = LocaleRequest::new(Culture::German);
        assert_eq!(request.options, DateTimeOptions::default());
        assert!(request.pattern_overrides.is_empty());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_request_from_json() {
        let request: LocaleRequest = serde_json::from_str(
            r#"{"culture": "pt", "pattern_overrides": [{"key": "now", "pattern": "\\bagora\\b"}]}"#,
        )
        .expect("valid request JSON should parse");
        assert_eq!(request.culture, Culture::Portuguese);
        assert_eq!(request.options, DateTimeOptions::default());
        assert_eq!(request.pattern_overrides.len(), 1);
    }
}
