//! # Mock Collaborator
//!
//! Utilities for testing delegating code in isolation.
//!
//! # Testing Strategy
//! Real collaborators write to stdout, which a test cannot observe without
//! scraping process output. [`MockCollaborator`] records each capability
//! call in a ledger instead, so a test can assert the *exactly once*
//! delegation property and script failures deterministically.
//!
//! The ledger is **per-thread**: the construct capability is an associated
//! function, so there is no instance through which a test could hand the
//! mock a shared handle, and Rust's test runner executes each `#[test]` on
//! its own thread, so per-thread state isolates parallel tests for free.
//! Call [`MockCollaborator::reset`] at the start of every test.
//!
//! # Example
//! ```rust
//! use collab_framework::{require, MockCollaborator, MockError};
//!
//! MockCollaborator::reset();
//! require::<MockCollaborator>().unwrap();
//! assert_eq!(MockCollaborator::constructed(), 1);
//! assert_eq!(MockCollaborator::printed(), 1);
//!
//! MockCollaborator::fail_next_print("paper jam");
//! let err = require::<MockCollaborator>().unwrap_err();
//! assert_eq!(err, MockError::Print("paper jam".to_string()));
//!
//! // Ensures no scripted failure was left unconsumed.
//! MockCollaborator::verify();
//! ```

use crate::collaborator::Collaborator;
use std::cell::RefCell;
use std::fmt;

/// Errors scripted onto the mock's capabilities.
///
/// Each variant carries the reason string the test scripted, so assertions
/// can check that the delegation propagated it verbatim.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MockError {
    /// The construct capability was scripted to fail.
    #[error("scripted construct failure: {0}")]
    Construct(String),
    /// The print capability was scripted to fail.
    #[error("scripted print failure: {0}")]
    Print(String),
}

/// Per-thread record of capability calls and pending scripted failures.
#[derive(Debug, Default)]
struct Ledger {
    constructed: u32,
    printed: u32,
    next_construct_failure: Option<String>,
    next_print_failure: Option<String>,
}

thread_local! {
    static LEDGER: RefCell<Ledger> = RefCell::new(Ledger::default());
}

/// A collaborator that records instead of printing.
///
/// Counts reflect **successful** capability calls only: a scripted failure
/// consumes its script entry and leaves the counts untouched, which is what
/// lets tests prove that a failed construct never reaches print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockCollaborator;

impl fmt::Display for MockCollaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MockCollaborator")
    }
}

impl MockCollaborator {
    /// Clears counts and pending scripted failures for the current thread.
    pub fn reset() {
        LEDGER.with(|ledger| *ledger.borrow_mut() = Ledger::default());
    }

    /// Number of successful construct calls since the last reset.
    pub fn constructed() -> u32 {
        LEDGER.with(|ledger| ledger.borrow().constructed)
    }

    /// Number of successful print calls since the last reset.
    pub fn printed() -> u32 {
        LEDGER.with(|ledger| ledger.borrow().printed)
    }

    /// Scripts the next construct call to fail with `reason`.
    pub fn fail_next_construct(reason: impl Into<String>) {
        LEDGER.with(|ledger| ledger.borrow_mut().next_construct_failure = Some(reason.into()));
    }

    /// Scripts the next print call to fail with `reason`.
    pub fn fail_next_print(reason: impl Into<String>) {
        LEDGER.with(|ledger| ledger.borrow_mut().next_print_failure = Some(reason.into()));
    }

    /// Verifies that every scripted failure was consumed.
    ///
    /// Panics otherwise: a script the code under test never hit usually
    /// means the test exercised the wrong path.
    pub fn verify() {
        LEDGER.with(|ledger| {
            let ledger = ledger.borrow();
            let mut unmet = Vec::new();
            if ledger.next_construct_failure.is_some() {
                unmet.push("construct");
            }
            if ledger.next_print_failure.is_some() {
                unmet.push("print");
            }
            if !unmet.is_empty() {
                panic!("unconsumed scripted failures: {}", unmet.join(", "));
            }
        });
    }
}

impl Collaborator for MockCollaborator {
    type Error = MockError;

    fn construct() -> Result<Self, Self::Error> {
        LEDGER.with(|ledger| {
            let mut ledger = ledger.borrow_mut();
            if let Some(reason) = ledger.next_construct_failure.take() {
                return Err(MockError::Construct(reason));
            }
            ledger.constructed += 1;
            Ok(MockCollaborator)
        })
    }

    fn print(&self) -> Result<(), Self::Error> {
        LEDGER.with(|ledger| {
            let mut ledger = ledger.borrow_mut();
            if let Some(reason) = ledger.next_print_failure.take() {
                return Err(MockError::Print(reason));
            }
            ledger.printed += 1;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Collaborator, MockCollaborator, MockError};

    #[test]
    fn counts_accumulate_until_reset() {
        MockCollaborator::reset();

        let first = MockCollaborator::construct().expect("unscripted construct succeeds");
        first.print().expect("unscripted print succeeds");
        first.print().expect("unscripted print succeeds");

        assert_eq!(MockCollaborator::constructed(), 1);
        assert_eq!(MockCollaborator::printed(), 2);

        MockCollaborator::reset();
        assert_eq!(MockCollaborator::constructed(), 0);
        assert_eq!(MockCollaborator::printed(), 0);
    }

    #[test]
    fn scripted_construct_failure_is_consumed_once() {
        MockCollaborator::reset();
        MockCollaborator::fail_next_construct("down");

        let err = MockCollaborator::construct().unwrap_err();
        assert_eq!(err, MockError::Construct("down".to_string()));

        // The script is spent; the next call succeeds.
        MockCollaborator::construct().expect("script already consumed");
        assert_eq!(MockCollaborator::constructed(), 1);
    }

    #[test]
    fn scripted_print_failure_is_consumed_once() {
        MockCollaborator::reset();
        MockCollaborator::fail_next_print("jam");

        let mock = MockCollaborator::construct().expect("unscripted construct succeeds");
        let err = mock.print().unwrap_err();
        assert_eq!(err, MockError::Print("jam".to_string()));

        mock.print().expect("script already consumed");
        assert_eq!(MockCollaborator::printed(), 1);
    }

    #[test]
    fn verify_passes_when_scripts_are_consumed() {
        MockCollaborator::reset();
        MockCollaborator::fail_next_print("jam");

        let mock = MockCollaborator::construct().expect("unscripted construct succeeds");
        let _ = mock.print().unwrap_err();

        MockCollaborator::verify();
    }

    #[test]
    #[should_panic(expected = "unconsumed scripted failures")]
    fn verify_panics_on_unconsumed_script() {
        MockCollaborator::reset();
        MockCollaborator::fail_next_construct("never hit");
        MockCollaborator::verify();
    }
}
