//! Static strategy pattern for CLI commands.
//!
//! Each command is its own strategy type with its own input type, so the
//! dispatch in `main` is resolved at compile time.

use chronolex_config::Config;
use chronolex_locales::{LocaleRegistry, reference_host};
use tracing::info;

mod info;
mod init;
mod resolve;
mod version;

pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use resolve::{ResolveInput, ResolveStrategy};
pub use version::VersionStrategy;

/// Load the config (or the built-in one) and compose every listed locale.
fn load_registry() -> anyhow::Result<(Config, LocaleRegistry)> {
    let config = Config::load_or_default()?;
    let requests = config.requests()?;
    let registry = LocaleRegistry::build(reference_host()?, &requests)?;
    info!(locales = registry.len(), "Registry composed");
    Ok((config, registry))
}

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
