use thiserror::Error;

/// Top-level error type for chain dispatch.
///
/// An unmatched severity is not an error; it is dropped silently by the chain.
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),

    #[error("Unknown severity '{0}'. Valid severities: INFO, DEBUG, ERROR")]
    UnknownSeverity(String),
}
