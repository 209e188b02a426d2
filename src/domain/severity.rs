use super::ChainError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity tag carried by every message and owned by every processor.
///
/// Equality is the only relation that matters: there is no ordering, so a
/// `Debug` message is never picked up by the `Info` processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Debug,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Debug, Severity::Error];

    /// Stable integer code, used by untyped callers.
    pub const fn code(self) -> i32 {
        match self {
            Severity::Info => 1,
            Severity::Debug => 2,
            Severity::Error => 3,
        }
    }

    /// Maps a raw code back to a severity. Codes outside the set yield `None`.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Severity::Info),
            2 => Some(Severity::Debug),
            3 => Some(Severity::Error),
            _ => None,
        }
    }

    /// Human-readable label printed in front of `Log:`.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Debug => "Debug",
            Severity::Error => "Error",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            "error" => Ok(Severity::Error),
            _ => Err(ChainError::UnknownSeverity(s.to_string())),
        }
    }
}

// Same case-insensitive rules as `FromStr`, so config files accept `INFO` too.
impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
