//! Domain layer for log-chain.
//!
//! Contains the canonical types shared across all modules:
//! - `Severity`: The closed set of message severities (Info/Debug/Error)
//! - `LogMessage`: A severity-tagged line of text on its way through the chain
//! - `ChainError`: Top-level error type

pub mod error;
pub mod log_message;
pub mod severity;

pub use error::ChainError;
pub use log_message::LogMessage;
pub use severity::Severity;
