pub mod config;
pub mod driver;
pub mod initialization;
pub mod logging_system;

pub use config::{Config, ConfigError, TracingLevel};
pub use driver::{DEMO_MESSAGES, run_demo, run_demo_to};
pub use initialization::{DirectiveError, FallbackStrategy, InitializationError, LogDirective};
pub use logging_system::{LoggingSystem, setup_logging_safe};

use crate::chain::{Dispatch, LogChain};
use std::io::Write;
use std::process;
use tracing::{error, info};

pub struct App {
    config: Config,
    chain: LogChain,
}

impl App {
    pub fn from_args<I, T>(args: I) -> Result<Self, Box<dyn std::error::Error + Send + Sync>>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::from_args(args)?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let final_config = config.resolve()?;

        setup_logging_safe(&final_config)?;

        info!("Starting log-chain v{}", crate::VERSION);
        info!(
            "Configuration: chain_order={:?}, log_level={:?}",
            final_config.chain_order, final_config.log_level
        );

        let chain = LogChain::from_order(&final_config.chain_order);

        Ok(Self {
            config: final_config,
            chain,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn chain(&self) -> &LogChain {
        &self.chain
    }

    /// Runs the demonstration scenario against `out`.
    pub fn run_to<W: Write + ?Sized>(
        &self,
        out: &mut W,
    ) -> Result<Vec<Dispatch>, Box<dyn std::error::Error + Send + Sync>> {
        let outcomes = run_demo_to(&self.chain, out)?;
        out.flush()?;
        Ok(outcomes)
    }

    /// Runs the demonstration scenario against process stdout.
    pub fn run(&self) -> Result<Vec<Dispatch>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(run_demo(&self.chain)?)
    }
}

// Main entry point for the application
pub fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = match App::from_args(std::env::args_os()) {
        Ok(app) => app,
        Err(e) => {
            // --help and --version arrive as clap errors that print to stdout.
            if let Some(ConfigError::Cli(cli)) = e.downcast_ref::<ConfigError>()
                && !cli.use_stderr()
            {
                cli.print()?;
                return Ok(());
            }
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = app.run() {
        error!("Application error: {}", e);
        process::exit(1);
    }

    Ok(())
}
