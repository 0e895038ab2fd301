//! Run every classifier of one locale over a phrase and show where the
//! offsets land relative to a reference date.

use std::str::FromStr;

use chrono::{Local, Months, NaiveDate, TimeDelta};
use chronolex_core::{Culture, SwiftResolver};
use tracing::debug;

use super::load_registry;

/// Input parameters for the Resolve command strategy.
#[derive(Debug, Clone)]
pub struct ResolveInput {
    /// Phrase to classify, e.g. "the day after tomorrow"
    pub text: String,
    /// Culture tag such as `en-us` or `pt`
    pub locale: String,
    /// Reference date; today when absent
    pub reference: Option<NaiveDate>,
}

/// Strategy for classifying a phrase with one composed locale.
#[derive(Debug, Clone, Copy)]
pub struct ResolveStrategy;

impl super::CommandStrategy for ResolveStrategy {
    type Input = ResolveInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let culture = Culture::from_str(&input.locale)?;
        let (_, registry) = load_registry()?;
        let locale = registry
            .get_any(culture)
            .ok_or_else(|| anyhow::anyhow!("Locale {culture} is not configured"))?;

        let reference = input.reference.unwrap_or_else(|| Local::now().date_naive());
        let text = input.text.as_str();
        debug!(%culture, %reference, text, "Resolving phrase");

        let day = locale.resolve_day_swift(text);
        let month = locale.resolve_month_swift(text);
        let year = locale.resolve_year_swift(text);
        let day_or_month = locale.resolve_day_or_month_swift(text);

        println!("Locale: {culture}");
        println!("Text: {text}");
        println!("Normalized: {}", locale.normalize(text));
        println!();

        println!("Swift:");
        println!("  Day: {day}");
        println!("  Month: {month}");
        println!("  Year: {year}");
        println!("  Day or Month: {day_or_month}");
        println!();

        println!("Shape:");
        println!("  Cardinal Last: {}", locale.is_cardinal_last(text));
        println!("  Week Only: {}", locale.is_week_only(text));
        println!("  Weekend: {}", locale.is_weekend(text));
        println!("  Month Only: {}", locale.is_month_only(text));
        println!("  Year Only: {}", locale.is_year_only(text));
        println!("  Week To Date: {}", locale.is_week_to_date(text));
        println!("  Month To Date: {}", locale.is_month_to_date(text));
        println!("  Year To Date: {}", locale.is_year_to_date(text));
        println!("  Future: {}", locale.is_future(text));
        println!("  Connector: {}", locale.is_connector(text));
        println!();

        let cue = locale
            .classify_cue(text)
            .map_or("(none)", |cue| cue.as_str());
        println!("Cue: {cue}");
        println!();

        println!("Reference: {reference}");
        println!("  Day Shift: {}", format_date(shift_days(reference, day)));
        println!("  Month Shift: {}", format_date(shift_months(reference, month)));
        println!(
            "  Year Shift: {}",
            format_date(year.checked_mul(12).and_then(|months| shift_months(reference, months)))
        );

        Ok(())
    }
}

fn shift_days(reference: NaiveDate, days: i32) -> Option<NaiveDate> {
    reference.checked_add_signed(TimeDelta::days(i64::from(days)))
}

/// Calendar-aware month shift; the day is clamped to the target month's end.
fn shift_months(reference: NaiveDate, months: i32) -> Option<NaiveDate> {
    let delta = Months::new(months.unsigned_abs());
    if months < 0 {
        reference.checked_sub_months(delta)
    } else {
        reference.checked_add_months(delta)
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "(out of range)".to_string(), |date| date.to_string())
}
