use super::{DebugLogProcessor, ErrorLogProcessor, InfoLogProcessor, LogProcessor, processor_for};
use crate::domain::{ChainError, LogMessage, Severity};
use std::fmt;
use std::io::{self, Write};

/// Outcome of a single `log` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A processor with this identity consumed the message.
    Handled(Severity),
    /// The message ran off the end of the chain.
    Dropped,
}

impl Dispatch {
    pub fn is_handled(&self) -> bool {
        matches!(self, Dispatch::Handled(_))
    }
}

/// Ordered, immutable chain of processors.
///
/// The head is tried first. Order is fixed once the chain is built; `wrap`
/// consumes the chain and returns a new one with a new head.
pub struct LogChain {
    processors: Vec<Box<dyn LogProcessor>>,
}

impl LogChain {
    /// Start a head-first builder.
    pub fn builder() -> LogChainBuilder {
        LogChainBuilder::new()
    }

    /// A chain with no processors. Every message is dropped.
    pub fn empty() -> Self {
        Self {
            processors: Vec::new(),
        }
    }

    /// Info -> Debug -> Error.
    pub fn standard() -> Self {
        Self::builder()
            .link(InfoLogProcessor)
            .link(DebugLogProcessor)
            .link(ErrorLogProcessor)
            .build()
    }

    /// Builds a chain from severities listed head-first.
    pub fn from_order(order: &[Severity]) -> Self {
        order
            .iter()
            .fold(Self::builder(), |builder, severity| {
                builder.link_boxed(processor_for(*severity))
            })
            .build()
    }

    /// Puts `processor` in front of the current head.
    ///
    /// Composing innermost first, `LogChain::empty().wrap(Error).wrap(Debug).wrap(Info)`
    /// yields the same chain as `LogChain::standard()`.
    pub fn wrap<P: LogProcessor + 'static>(mut self, processor: P) -> Self {
        self.processors.insert(0, Box::new(processor));
        self
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Processor identities, head first.
    pub fn order(&self) -> Vec<Severity> {
        self.processors.iter().map(|p| p.severity()).collect()
    }

    /// Position of the processor that would consume `severity`, if any.
    pub fn handler_for(&self, severity: Severity) -> Option<usize> {
        self.processors.iter().position(|p| p.handles(severity))
    }

    /// Walks the chain for `message`, writing at most one line to `out`.
    pub fn dispatch<W: Write + ?Sized>(
        &self,
        out: &mut W,
        message: LogMessage<'_>,
    ) -> Result<Dispatch, ChainError> {
        for (position, processor) in self.processors.iter().enumerate() {
            if processor.handles(message.severity) {
                writeln!(out, "{}", processor.format_line(message.text))?;
                tracing::trace!(
                    severity = %message.severity,
                    position = position,
                    "Message handled"
                );
                return Ok(Dispatch::Handled(processor.severity()));
            }
            tracing::trace!(
                severity = %message.severity,
                position = position,
                "Forwarding to next processor"
            );
        }

        tracing::trace!(severity = %message.severity, "Message fell through chain");
        Ok(Dispatch::Dropped)
    }

    pub fn log_to<W: Write + ?Sized>(
        &self,
        out: &mut W,
        severity: Severity,
        text: &str,
    ) -> Result<Dispatch, ChainError> {
        self.dispatch(out, LogMessage::new(severity, text))
    }

    /// Dispatches an untyped severity code. Undefined codes are dropped
    /// silently, exactly as a severity with no processor in the chain would be.
    pub fn log_code_to<W: Write + ?Sized>(
        &self,
        out: &mut W,
        code: i32,
        text: &str,
    ) -> Result<Dispatch, ChainError> {
        match Severity::from_code(code) {
            Some(severity) => self.log_to(out, severity, text),
            None => {
                tracing::trace!(code = code, "Undefined severity code dropped");
                Ok(Dispatch::Dropped)
            }
        }
    }

    /// Dispatches to process stdout, flushing after the call.
    pub fn log(&self, severity: Severity, text: &str) -> Result<Dispatch, ChainError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let dispatch = self.log_to(&mut out, severity, text)?;
        out.flush()?;
        Ok(dispatch)
    }

    pub fn log_code(&self, code: i32, text: &str) -> Result<Dispatch, ChainError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let dispatch = self.log_code_to(&mut out, code, text)?;
        out.flush()?;
        Ok(dispatch)
    }
}

impl Default for LogChain {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for LogChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogChain")
            .field("order", &self.order())
            .finish()
    }
}

/// Head-first builder: each `link` appends a processor toward the terminator.
#[derive(Default)]
pub struct LogChainBuilder {
    processors: Vec<Box<dyn LogProcessor>>,
}

impl LogChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link<P: LogProcessor + 'static>(self, processor: P) -> Self {
        self.link_boxed(Box::new(processor))
    }

    pub fn link_boxed(mut self, processor: Box<dyn LogProcessor>) -> Self {
        self.processors.push(processor);
        self
    }

    pub fn build(self) -> LogChain {
        let chain = LogChain {
            processors: self.processors,
        };
        tracing::debug!(order = ?chain.order(), "Built log chain");
        chain
    }
}
