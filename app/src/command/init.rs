use chronolex_config::Config;

/// Strategy for writing the default configuration to
/// `~/chronolex/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Config::create_config()?;
        println!("Created config file at: {}", path.display());
        println!("Next steps:");
        println!("  1. Edit the locale list and options if needed");
        println!("  2. Run 'chronolex info' to check the composed locales");
        Ok(())
    }
}
