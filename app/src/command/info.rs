use chronolex_core::{DateTimeOptions, LocaleConfiguration};

use super::load_registry;

/// Strategy for listing every composed locale: option set, pattern keys and
/// lexical map sizes.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let (config, registry) = load_registry()?;

        println!("=== chronolex Configuration ===\n");
        println!("Log Level: {}", config.log_level);
        println!("Locales: {}", registry.len());
        println!();

        for locale in registry.iter() {
            print_locale(locale);
            println!();
        }

        Ok(())
    }
}

fn print_locale(locale: &LocaleConfiguration) {
    println!("{}:", locale.culture());
    println!("  Options: {}", format_options(locale.options()));
    println!("  Folding: {:?}", locale.normalizer().folding());

    let keys: Vec<&str> = locale.catalog().keys().map(|key| key.as_str()).collect();
    println!("  Patterns ({}): {}", keys.len(), keys.join(", "));

    println!("  Maps:");
    for (kind, size) in locale.lexicon().sizes() {
        println!("    {kind}: {size}");
    }
}

fn format_options(options: DateTimeOptions) -> String {
    let mut set = Vec::new();
    if options.skip_from_to_merge {
        set.push("skip_from_to_merge");
    }
    if options.split_date_and_time {
        set.push("split_date_and_time");
    }
    if options.calendar {
        set.push("calendar");
    }
    if options.extended_types {
        set.push("extended_types");
    }
    if options.dmy_date_format {
        set.push("dmy_date_format");
    }

    if set.is_empty() {
        format!("(none, bits={})", options.bits())
    } else {
        format!("{} (bits={})", set.join(", "), options.bits())
    }
}
