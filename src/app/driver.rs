use crate::chain::{Dispatch, LogChain};
use crate::domain::{ChainError, LogMessage, Severity};
use std::io::Write;

/// The demonstration calls, one per severity, in issue order.
pub const DEMO_MESSAGES: [LogMessage<'static>; 3] = [
    LogMessage::new(Severity::Info, "This is a INFO Log"),
    LogMessage::new(Severity::Debug, "This is a DEBUG Log"),
    LogMessage::new(Severity::Error, "This is a ERROR Log"),
];

/// Issues every demonstration message through `chain` to process stdout.
pub fn run_demo(chain: &LogChain) -> Result<Vec<Dispatch>, ChainError> {
    tracing::info!(order = ?chain.order(), "Running demonstration scenario");

    let outcomes = DEMO_MESSAGES
        .iter()
        .map(|message| chain.log(message.severity, message.text))
        .collect::<Result<Vec<_>, _>>()?;

    report(&outcomes);
    Ok(outcomes)
}

/// Same scenario as `run_demo`, written to `out`.
pub fn run_demo_to<W: Write + ?Sized>(
    chain: &LogChain,
    out: &mut W,
) -> Result<Vec<Dispatch>, ChainError> {
    tracing::info!(order = ?chain.order(), "Running demonstration scenario");

    let outcomes = DEMO_MESSAGES
        .iter()
        .map(|message| chain.dispatch(out, *message))
        .collect::<Result<Vec<_>, _>>()?;

    report(&outcomes);
    Ok(outcomes)
}

fn report(outcomes: &[Dispatch]) {
    let handled = outcomes.iter().filter(|d| d.is_handled()).count();
    tracing::info!(
        handled = handled,
        dropped = outcomes.len() - handled,
        "Demonstration scenario finished"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        let outcomes = run_demo_to(&LogChain::standard(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Info Log: This is a INFO Log\n\
             Debug Log: This is a DEBUG Log\n\
             Error Log: This is a ERROR Log\n"
        );
        assert_eq!(
            outcomes,
            vec![
                Dispatch::Handled(Severity::Info),
                Dispatch::Handled(Severity::Debug),
                Dispatch::Handled(Severity::Error),
            ]
        );
    }

    #[test]
    fn test_demo_with_partial_chain() {
        let mut out = Vec::new();
        let chain = LogChain::from_order(&[Severity::Debug]);
        let outcomes = run_demo_to(&chain, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Debug Log: This is a DEBUG Log\n");
        assert_eq!(
            outcomes,
            vec![
                Dispatch::Dropped,
                Dispatch::Handled(Severity::Debug),
                Dispatch::Dropped,
            ]
        );
    }
}
