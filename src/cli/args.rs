//! Defines the command-line arguments for the sitecheck CLI.
//!
//! Every flag is optional; running the binary with no arguments checks the
//! current directory.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use termcolor::ColorChoice;

use crate::config::{auto_color, HarnessConfig};

#[derive(Debug, Parser)]
#[command(
    name = "sitecheck",
    version,
    about = "Smoke-test the portfolio website checkout: required files, config markers and manifest fields."
)]
pub struct SitecheckArgs {
    /// Project root to check.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// When to colorize the report.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Log probe accesses and test outcomes to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn to_choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto => auto_color(),
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

impl SitecheckArgs {
    pub fn config(&self) -> HarnessConfig {
        HarnessConfig {
            root: self.root.clone(),
            color: self.color.to_choice(),
        }
    }
}
