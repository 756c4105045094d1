//! Colorized, line-oriented reporting of test outcomes.
//!
//! The reporter is purely presentational: it never decides whether a test
//! passed, and a failed write never changes the run's counters.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};
use tracing::warn;

use crate::harness::RunResult;

pub const PASS_MARKER: &str = "✓";
pub const FAIL_MARKER: &str = "✗";

/// Writes report lines to any color-capable sink.
pub struct Reporter<W: WriteColor> {
    out: W,
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn banner(&mut self, title: &str) {
        let res = self.write_banner(title);
        self.swallow(res);
    }

    pub fn pass(&mut self, name: &str) {
        let res = self.write_pass(name);
        self.swallow(res);
    }

    pub fn fail(&mut self, name: &str, message: &str) {
        let res = self.write_fail(name, message);
        self.swallow(res);
    }

    /// Prints the summary block, then the all-clear line when nothing failed.
    pub fn summary(&mut self, result: &RunResult) {
        let res = self.write_summary(result);
        self.swallow(res);
    }

    fn write_banner(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        self.colored(Color::Blue, title)?;
        writeln!(self.out)?;
        writeln!(self.out)
    }

    fn write_pass(&mut self, name: &str) -> io::Result<()> {
        self.colored(Color::Green, PASS_MARKER)?;
        writeln!(self.out, " {}", name)
    }

    fn write_fail(&mut self, name: &str, message: &str) -> io::Result<()> {
        self.colored(Color::Red, FAIL_MARKER)?;
        writeln!(self.out, " {}", name)?;
        write!(self.out, "  ")?;
        self.colored(Color::Red, &format!("Error: {}", message))?;
        writeln!(self.out)
    }

    fn write_summary(&mut self, result: &RunResult) -> io::Result<()> {
        writeln!(self.out)?;
        self.colored(Color::Blue, "Test Summary:")?;
        writeln!(self.out)?;
        self.colored(Color::Green, &format!("Passed: {}", result.passed))?;
        writeln!(self.out)?;
        self.colored(Color::Red, &format!("Failed: {}", result.failed))?;
        writeln!(self.out)?;
        writeln!(self.out, "Total: {}", result.total())?;
        writeln!(self.out)?;
        if result.all_passed() {
            self.colored(Color::Green, &format!("All tests passed! {}", PASS_MARKER))?;
            writeln!(self.out)?;
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    fn colored(&mut self, color: Color, text: &str) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }

    fn swallow(&self, res: io::Result<()>) {
        if let Err(e) = res {
            warn!(error = %e, "failed to write report line");
        }
    }
}
