//! Test registration, execution and the exit contract.
//!
//! A [`Harness`] runs each test action the moment it is registered, catches
//! whatever failure the action produces, folds the outcome into a
//! [`RunResult`] and hands the line to the [`Reporter`]. A run is one linear
//! pass: [`Harness::finish`] consumes the harness and yields the final counts.
//!
//! ```
//! use sitecheck::{check, Harness, Reporter};
//! use termcolor::Buffer;
//!
//! let mut out = Buffer::no_color();
//! let mut harness = Harness::new(Reporter::new(&mut out));
//! harness.test("truth", || {
//!     check!(true);
//!     Ok(())
//! });
//! harness.test("falsehood", || {
//!     check!(false, "boom");
//!     Ok(())
//! });
//! let result = harness.finish();
//! assert_eq!((result.passed, result.failed), (1, 1));
//! assert_eq!(result.exit_code(), 1);
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

use termcolor::WriteColor;
use tracing::debug;

use crate::errors::{CheckError, FailureKind};
use crate::report::Reporter;

/// Aggregate pass/fail counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunResult {
    pub passed: usize,
    pub failed: usize,
}

impl RunResult {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// `0` when nothing failed, `1` otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    /// Increments exactly one counter.
    pub fn record(&mut self, outcome: &TestOutcome) {
        match outcome {
            TestOutcome::Passed => self.passed += 1,
            TestOutcome::Failed(_) => self.failed += 1,
        }
    }
}

impl From<RunResult> for ExitCode {
    fn from(result: RunResult) -> Self {
        ExitCode::from(result.exit_code())
    }
}

/// What the runner keeps of a failed test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFailure {
    pub name: String,
    pub message: String,
    pub kind: FailureKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    Passed,
    Failed(TestFailure),
}

impl TestOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, TestOutcome::Passed)
    }
}

pub struct Harness<W: WriteColor> {
    reporter: Reporter<W>,
    result: RunResult,
}

impl<W: WriteColor> Harness<W> {
    pub fn new(reporter: Reporter<W>) -> Self {
        Self {
            reporter,
            result: RunResult::default(),
        }
    }

    /// Prints the run banner.
    pub fn start(&mut self, title: &str) {
        self.reporter.banner(title);
    }

    /// Runs `action` now and records its outcome.
    ///
    /// Errors returned by the action and panics raised inside it are both
    /// captured here; neither stops later tests from running.
    pub fn test<F>(&mut self, name: &str, action: F) -> TestOutcome
    where
        F: FnOnce() -> Result<(), CheckError>,
    {
        let outcome = match panic::catch_unwind(AssertUnwindSafe(action)) {
            Ok(Ok(())) => TestOutcome::Passed,
            Ok(Err(e)) => TestOutcome::Failed(TestFailure {
                name: name.to_string(),
                message: e.to_string(),
                kind: e.kind(),
            }),
            Err(payload) => TestOutcome::Failed(TestFailure {
                name: name.to_string(),
                message: panic_message(payload.as_ref()),
                kind: FailureKind::Panic,
            }),
        };

        match &outcome {
            TestOutcome::Passed => {
                debug!(test = name, "passed");
                self.reporter.pass(name);
            }
            TestOutcome::Failed(failure) => {
                debug!(test = name, kind = %failure.kind, message = %failure.message, "failed");
                self.reporter.fail(name, &failure.message);
            }
        }
        self.result.record(&outcome);
        outcome
    }

    /// Counters so far.
    pub fn result(&self) -> RunResult {
        self.result
    }

    /// Prints the summary and ends the run.
    pub fn finish(mut self) -> RunResult {
        self.reporter.summary(&self.result);
        self.result
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    CheckError::Panicked { message }.to_string()
}
