//! Severity-routed processor chain.
//!
//! A `LogChain` is an ordered, immutable sequence of `LogProcessor`s.
//! Dispatch walks the sequence head-first; the first processor whose identity
//! equals the message severity writes the line and stops the walk. Running
//! off the end of the sequence is the terminator: the message is dropped
//! without output and without error.

mod log_chain;
mod processor;
mod processors;

pub use log_chain::{Dispatch, LogChain, LogChainBuilder};
pub use processor::LogProcessor;
pub use processors::{DebugLogProcessor, ErrorLogProcessor, InfoLogProcessor, processor_for};

#[cfg(test)]
pub use processor::MockLogProcessor;
