use crate::domain::Severity;

#[cfg(test)]
use mockall::automock;

/// One link of the chain, responsible for exactly one severity.
#[cfg_attr(test, automock)]
pub trait LogProcessor: Send + Sync {
    /// The severity this processor consumes.
    fn severity(&self) -> Severity;

    /// Exact-equality match; no severity implies another.
    fn handles(&self, severity: Severity) -> bool {
        severity == self.severity()
    }

    /// The line written when this processor consumes a message, without the
    /// trailing newline.
    fn format_line(&self, text: &str) -> String {
        format!("{} Log: {}", self.severity().label(), text)
    }
}
