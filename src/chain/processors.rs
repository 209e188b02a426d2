use super::LogProcessor;
use crate::domain::Severity;

/// Consumes `Severity::Info` messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct InfoLogProcessor;

/// Consumes `Severity::Debug` messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugLogProcessor;

/// Consumes `Severity::Error` messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorLogProcessor;

impl LogProcessor for InfoLogProcessor {
    fn severity(&self) -> Severity {
        Severity::Info
    }
}

impl LogProcessor for DebugLogProcessor {
    fn severity(&self) -> Severity {
        Severity::Debug
    }
}

impl LogProcessor for ErrorLogProcessor {
    fn severity(&self) -> Severity {
        Severity::Error
    }
}

/// Returns the stock processor owning `severity`.
pub fn processor_for(severity: Severity) -> Box<dyn LogProcessor> {
    match severity {
        Severity::Info => Box::new(InfoLogProcessor),
        Severity::Debug => Box::new(DebugLogProcessor),
        Severity::Error => Box::new(ErrorLogProcessor),
    }
}
