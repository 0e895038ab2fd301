#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use chrono::NaiveDate;
use chronolex_config::Config;
use clap::{Parser, Subcommand};
use command::{
    CommandStrategy, InfoStrategy, InitStrategy, ResolveInput, ResolveStrategy, VersionStrategy,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "chronolex")]
#[command(about = "Relative date/time cue classifier", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a phrase with one locale
    Resolve {
        /// Phrase to classify
        text: String,

        /// Culture tag (en-us, fr-fr, pt-br, de-de)
        #[arg(short = 'l', long, default_value = "en-us")]
        locale: String,

        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(short = 'r', long)]
        reference: Option<NaiveDate>,
    },
    /// Show composed locales
    Info,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

/// `RUST_LOG` wins; otherwise the config's `log_level`, otherwise `info`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = Config::load_or_default().map_or_else(|_| "info".to_string(), |c| c.log_level);
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            text,
            locale,
            reference,
        } => ResolveStrategy.execute(ResolveInput {
            text,
            locale,
            reference,
        }),
        Commands::Info => InfoStrategy.execute(()),
        Commands::Init => InitStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
