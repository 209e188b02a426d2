use super::config::{Config, TracingLevel};
use super::initialization::{FallbackStrategy, InitializationError, LogDirective};
use parking_lot::RwLock;
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Collects filter directives and installs the global subscriber.
///
/// Diagnostics always go to stderr; stdout belongs to the processors.
pub struct LoggingSystem {
    directives: RwLock<Vec<LogDirective>>,
    fallback_level: TracingLevel,
}

impl LoggingSystem {
    pub fn new() -> Self {
        Self {
            directives: RwLock::new(Vec::new()),
            fallback_level: TracingLevel::Warn,
        }
    }

    /// Adds a `target=level` directive. Malformed input never fails startup:
    /// it is skipped or kept at the fallback level.
    pub fn add_directive(&self, directive_str: &str) {
        match LogDirective::parse(directive_str) {
            Ok(directive) => self.directives.write().push(directive),
            Err(e) => match e.fallback_strategy() {
                FallbackStrategy::UseDefaultLevel => {
                    eprintln!("Warning: {e}, using default level");
                    self.add_default_directive(directive_str);
                }
                FallbackStrategy::SkipDirective => {
                    eprintln!("Warning: {e}, skipping directive");
                }
            },
        }
    }

    fn add_default_directive(&self, directive_str: &str) {
        let target = directive_str.split('=').next().unwrap_or("unknown").trim();
        let directive = LogDirective::new(target, self.fallback_level);
        self.directives.write().push(directive);
    }

    pub fn initialize_tracing(&self, default_level: TracingLevel) -> Result<(), InitializationError> {
        let filter_string = self.build_filter_string(default_level);

        let env_filter = EnvFilter::try_new(&filter_string).map_err(|e| {
            InitializationError::LoggingInitFailed {
                details: format!("Failed to create EnvFilter with '{filter_string}'"),
                source: Box::new(e),
            }
        })?;

        let subscriber = tracing_subscriber::registry().with(env_filter).with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .compact(),
        );

        tracing::subscriber::set_global_default(subscriber).map_err(|e| {
            InitializationError::LoggingInitFailed {
                details: "Failed to set global tracing subscriber".to_string(),
                source: Box::new(e),
            }
        })?;

        Ok(())
    }

    pub fn build_filter_string(&self, default_level: TracingLevel) -> String {
        let directives = self.directives.read();

        let mut filter_parts = Vec::with_capacity(directives.len() + 1);
        filter_parts.push(default_level.as_str().to_string());
        filter_parts.extend(directives.iter().map(LogDirective::to_filter_string));

        filter_parts.join(",")
    }
}

impl Default for LoggingSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Installs the global subscriber once per process. Later calls report the
/// outcome of the first one, including its failure reason.
pub fn setup_logging_safe(config: &Config) -> Result<(), InitializationError> {
    static INIT: OnceLock<Result<(), String>> = OnceLock::new();

    let outcome = INIT.get_or_init(|| {
        let logging_system = LoggingSystem::new();
        for directive in &config.log_directives {
            logging_system.add_directive(directive);
        }
        logging_system
            .initialize_tracing(config.log_level)
            .map_err(|e| e.to_string())
    });

    outcome
        .clone()
        .map_err(|details| InitializationError::LoggingInitFailed {
            source: Box::new(std::io::Error::other(details.clone())),
            details,
        })
}
