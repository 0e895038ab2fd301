use std::borrow::Cow;
use std::sync::Arc;

use crate::culture::Culture;
use crate::data::LocaleData;
use crate::host::HostContext;
use crate::lexicon::Lexicon;
use crate::normalize::Normalizer;
use crate::options::DateTimeOptions;
use crate::pattern::{PatternCatalog, PatternKey, PatternMatcher};
use crate::rules::SwiftRules;
use crate::swift::{RelativeCue, SwiftResolver};

/// Everything the recognition engine needs to know about one language under
/// one option set.
///
/// Built by [`crate::Composer`], immutable afterwards, and safe to share
/// across threads behind an `Arc`. The compiled [`LocaleData`] is itself
/// shared by every option set of the same culture.
#[derive(Debug, Clone)]
pub struct LocaleConfiguration {
    data: Arc<LocaleData>,
    options: DateTimeOptions,
    host: HostContext,
}

impl LocaleConfiguration {
    pub(crate) const fn new(data: Arc<LocaleData>, options: DateTimeOptions, host: HostContext) -> Self {
        Self {
            data,
            options,
            host,
        }
    }

    #[must_use]
    pub fn culture(&self) -> Culture {
        self.data.culture()
    }

    #[must_use]
    pub const fn options(&self) -> DateTimeOptions {
        self.options
    }

    #[must_use]
    pub const fn data(&self) -> &Arc<LocaleData> {
        &self.data
    }

    #[must_use]
    pub fn normalizer(&self) -> &Normalizer {
        self.data.normalizer()
    }

    #[must_use]
    pub fn catalog(&self) -> &PatternCatalog {
        self.data.catalog()
    }

    #[must_use]
    pub fn pattern(&self, key: PatternKey) -> Option<&PatternMatcher> {
        self.catalog().get(key)
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        self.data.lexicon()
    }

    #[must_use]
    pub fn rules(&self) -> &SwiftRules {
        self.data.rules()
    }

    #[must_use]
    pub const fn host(&self) -> &HostContext {
        &self.host
    }

    /// The locale's normal form of `text`, as every classifier sees it.
    #[must_use]
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.normalizer().normalize(text)
    }

    /// Relative cue of a month phrase; `None` when the phrase carries none,
    /// as opposed to `Some(This)` for an explicit "this month".
    #[must_use]
    pub fn month_cue(&self, text: &str) -> Option<RelativeCue> {
        self.rules().month.classify(&self.normalize(text), self.catalog())
    }

    #[must_use]
    pub fn year_cue(&self, text: &str) -> Option<RelativeCue> {
        self.rules().year.classify(&self.normalize(text), self.catalog())
    }

    #[must_use]
    pub fn day_or_month_cue(&self, text: &str) -> Option<RelativeCue> {
        self.rules()
            .day_or_month
            .classify(&self.normalize(text), self.catalog())
    }

    /// Tag a relative marker span.
    ///
    /// Cardinal "last" is checked first, then the month-family cues, then
    /// the ago and later markers.
    #[must_use]
    pub fn classify_cue(&self, text: &str) -> Option<RelativeCue> {
        let text = self.normalize(text);
        if self.rules().shapes.is_cardinal_last(&text, self.catalog()) {
            return Some(RelativeCue::CardinalLast);
        }

        self.rules()
            .month
            .classify(&text, self.catalog())
            .or_else(|| {
                self.catalog()
                    .is_match(PatternKey::Ago, &text)
                    .then_some(RelativeCue::Ago)
            })
            .or_else(|| {
                self.catalog()
                    .is_match(PatternKey::Later, &text)
                    .then_some(RelativeCue::In)
            })
    }

    /// Whether the text between a date and a time may join them: nothing at
    /// all, a preposition, or a connector word.
    #[must_use]
    pub fn is_connector(&self, text: &str) -> bool {
        let text = self.normalize(text);
        text.is_empty()
            || self.catalog().is_match(PatternKey::Preposition, &text)
            || self.catalog().is_match(PatternKey::Connector, &text)
    }

    /// The THIS, PAST and NEXT prefix matchers the locale defines, in that
    /// order.
    #[must_use]
    pub fn relative_prefixes(&self) -> Vec<&PatternMatcher> {
        [
            PatternKey::ThisPrefix,
            PatternKey::PastPrefix,
            PatternKey::NextPrefix,
        ]
        .into_iter()
        .filter_map(|key| self.catalog().get(key))
        .collect()
    }

    /// The AM and PM matchers the locale defines.
    #[must_use]
    pub fn am_pm_patterns(&self) -> Vec<&PatternMatcher> {
        [PatternKey::Am, PatternKey::Pm]
            .into_iter()
            .filter_map(|key| self.catalog().get(key))
            .collect()
    }
}

impl SwiftResolver for LocaleConfiguration {
    fn resolve_day_swift(&self, text: &str) -> i32 {
        self.rules().day.resolve(&self.normalize(text), self.catalog())
    }

    fn resolve_month_swift(&self, text: &str) -> i32 {
        self.month_cue(text).map_or(0, RelativeCue::direction)
    }

    fn resolve_year_swift(&self, text: &str) -> i32 {
        self.year_cue(text).map_or(0, RelativeCue::direction)
    }

    fn resolve_day_or_month_swift(&self, text: &str) -> i32 {
        self.day_or_month_cue(text).map_or(0, RelativeCue::direction)
    }

    fn is_cardinal_last(&self, text: &str) -> bool {
        self.rules()
            .shapes
            .is_cardinal_last(&self.normalize(text), self.catalog())
    }

    fn is_week_only(&self, text: &str) -> bool {
        self.rules()
            .shapes
            .is_week_only(&self.normalize(text), self.catalog())
    }

    fn is_month_only(&self, text: &str) -> bool {
        self.rules()
            .shapes
            .is_month_only(&self.normalize(text), self.catalog())
    }

    fn is_year_only(&self, text: &str) -> bool {
        self.rules()
            .shapes
            .is_year_only(&self.normalize(text), self.catalog())
    }

    fn is_weekend(&self, text: &str) -> bool {
        self.rules()
            .shapes
            .is_weekend(&self.normalize(text), self.catalog())
    }

    fn is_week_to_date(&self, text: &str) -> bool {
        self.rules()
            .shapes
            .is_week_to_date(&self.normalize(text), self.catalog())
    }

    fn is_month_to_date(&self, text: &str) -> bool {
        self.rules()
            .shapes
            .is_month_to_date(&self.normalize(text), self.catalog())
    }

    fn is_year_to_date(&self, text: &str) -> bool {
        self.rules()
            .shapes
            .is_year_to_date(&self.normalize(text), self.catalog())
    }

    fn is_future(&self, text: &str) -> bool {
        self.rules()
            .shapes
            .is_future(&self.normalize(text), self.catalog())
    }
}
