//! Command-line surface for the `difflace` binary.

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "difflace")]
#[command(about = "Context and unified diff hunk formatting core")]
#[command(version)]
pub struct Cli {
    /// First file to compare.
    pub file0: std::path::PathBuf,

    /// Second file to compare.
    pub file1: std::path::PathBuf,

    /// Output style.
    #[arg(short = 's', long, value_enum, default_value = "unified")]
    pub style: Style,

    /// Lines of context (alias for -U/-C depending on style).
    #[arg(short = 'U', long = "unified-context", value_name = "N")]
    pub unified_context: Option<u32>,

    #[arg(short = 'C', long = "context-lines", value_name = "N")]
    pub context_context: Option<u32>,

    /// Ignore changes whose lines are all blank.
    #[arg(short = 'b', long = "ignore-blank-lines")]
    pub ignore_blank_lines: bool,

    /// Ignore changes whose lines all match this pattern.
    #[arg(short = 'I', long = "ignore-matching-lines", value_name = "REGEX")]
    pub ignore_regex: Option<String>,

    /// Show the nearest preceding line matching this pattern in each hunk header.
    #[arg(short = 'F', long = "show-function-line", value_name = "REGEX")]
    pub function_regex: Option<String>,

    /// Prefix output lines with a tab instead of a space where applicable.
    #[arg(short = 't', long = "initial-tab")]
    pub initial_tab: bool,

    /// Expand tabs in output lines to the given column width.
    #[arg(long = "expand-tabs")]
    pub expand_tabs: bool,

    #[arg(long = "tabsize", default_value_t = 8)]
    pub tabsize: u32,

    /// Use this label in place of the first file's name and timestamp.
    #[arg(short = 'L', long = "label", value_name = "LABEL", num_args = 0..=2)]
    pub labels: Vec<String>,

    /// strftime-style pattern used to render modification times.
    #[arg(long = "time-format", value_name = "FMT")]
    pub time_format: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    #[must_use]
    pub fn context_lines(&self) -> u32 {
        match self.style {
            Style::Unified => self.unified_context.or(self.context_context).unwrap_or(3),
            Style::Context => self.context_context.or(self.unified_context).unwrap_or(3),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Style {
    Unified,
    Context,
}
