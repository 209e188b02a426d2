use super::Severity;

/// A severity-tagged line travelling through the chain. Never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogMessage<'a> {
    pub severity: Severity,
    pub text: &'a str,
}

impl<'a> LogMessage<'a> {
    pub const fn new(severity: Severity, text: &'a str) -> Self {
        Self { severity, text }
    }
}
