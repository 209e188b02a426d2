use super::{ConfigError, TracingLevel};
use crate::domain::Severity;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
#[serde(default)]
pub struct Config {
    /// Diagnostic log level (stderr only)
    #[arg(long, env = "LOG_CHAIN_LOG_LEVEL", default_value = "warn")]
    pub log_level: TracingLevel,

    /// Extra tracing directives, e.g. `log_chain::chain=trace`
    #[arg(long = "log-directive", env = "LOG_CHAIN_LOG_DIRECTIVES", value_delimiter = ',')]
    pub log_directives: Vec<String>,

    /// Processor order, head first
    #[arg(
        long,
        env = "LOG_CHAIN_ORDER",
        value_delimiter = ',',
        default_value = "info,debug,error"
    )]
    pub chain_order: Vec<Severity>,

    /// Configuration file path (optional)
    #[serde(skip)]
    #[arg(long = "config", env = "LOG_CHAIN_CONFIG")]
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: TracingLevel::Warn,
            log_directives: Vec::new(),
            chain_order: vec![Severity::Info, Severity::Debug, Severity::Error],
            config_file: None,
        }
    }
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::try_parse_from(args)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a TOML file. Keys missing from the file keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.config_file = Some(path.to_path_buf());
        config.validate()?;
        Ok(config)
    }

    /// Resolves the effective configuration: a config file, when named,
    /// replaces the argument and environment values.
    pub fn resolve(self) -> Result<Self, ConfigError> {
        match &self.config_file {
            Some(path) => Config::from_file(path),
            None => Ok(self),
        }
    }
}
