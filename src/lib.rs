//! sitecheck: an assertion-based smoke-test harness.
//!
//! Tests are named actions that return `Result<(), CheckError>`. The
//! [`Harness`] runs them in registration order, reports each outcome, and
//! turns the final [`RunResult`] into a process exit code.

pub use crate::errors::{CheckError, FailureKind};
pub use crate::harness::{Harness, RunResult, TestFailure, TestOutcome};
pub use crate::probe::{FsProbe, MemoryProbe, Probe};
pub use crate::report::Reporter;
pub use crate::suite::{Suite, TestCase};

pub mod assert;
pub mod cli;
pub mod config;
pub mod errors;
pub mod harness;
pub mod manifest;
pub mod portfolio;
pub mod probe;
pub mod report;
pub mod suite;
