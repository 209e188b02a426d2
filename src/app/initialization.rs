use super::config::TracingLevel;
use std::str::FromStr;
use thiserror::Error;

/// A `target=level` directive that could not be parsed.
#[derive(Error, Debug)]
pub enum DirectiveError {
    #[error("Invalid log level '{input}'. Valid levels: {valid_levels:?}")]
    InvalidLogLevel {
        input: String,
        valid_levels: Vec<String>,
    },

    #[error("Invalid directive format '{input}'. Expected: '{expected}'")]
    InvalidDirectiveFormat { input: String, expected: String },

    #[error("Empty target in directive '{input}'")]
    EmptyTarget { input: String },
}

impl DirectiveError {
    pub fn fallback_strategy(&self) -> FallbackStrategy {
        match self {
            DirectiveError::InvalidLogLevel { .. } => FallbackStrategy::UseDefaultLevel,
            DirectiveError::InvalidDirectiveFormat { .. } => FallbackStrategy::SkipDirective,
            DirectiveError::EmptyTarget { .. } => FallbackStrategy::SkipDirective,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackStrategy {
    UseDefaultLevel,
    SkipDirective,
}

#[derive(Error, Debug)]
pub enum InitializationError {
    #[error("Logging system initialization failed: {details}")]
    LoggingInitFailed {
        details: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl FromStr for TracingLevel {
    type Err = DirectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(TracingLevel::Error),
            "warn" | "warning" => Ok(TracingLevel::Warn),
            "info" => Ok(TracingLevel::Info),
            "debug" => Ok(TracingLevel::Debug),
            "trace" => Ok(TracingLevel::Trace),
            _ => Err(DirectiveError::InvalidLogLevel {
                input: s.to_string(),
                valid_levels: ["error", "warn", "info", "debug", "trace"]
                    .iter()
                    .map(|l| l.to_string())
                    .collect(),
            }),
        }
    }
}

/// A single `target=level` filter directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDirective {
    pub target: String,
    pub level: TracingLevel,
}

impl LogDirective {
    pub fn new(target: impl Into<String>, level: TracingLevel) -> Self {
        Self {
            target: target.into(),
            level,
        }
    }

    pub fn parse(input: &str) -> Result<Self, DirectiveError> {
        let Some((target, level)) = input.trim().split_once('=') else {
            return Err(DirectiveError::InvalidDirectiveFormat {
                input: input.to_string(),
                expected: "target=level".to_string(),
            });
        };

        let target = target.trim();
        if target.is_empty() {
            return Err(DirectiveError::EmptyTarget {
                input: input.to_string(),
            });
        }

        Ok(Self::new(target, level.trim().parse()?))
    }

    pub fn to_filter_string(&self) -> String {
        format!("{}={}", self.target, self.level.as_str())
    }
}
