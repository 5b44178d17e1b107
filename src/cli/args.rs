use clap::{Parser, ValueEnum};
use mvre::{GroupZero, MatchOptions, OptionsError, RenameOptions};
use std::ffi::OsString;

const LONG_ABOUT: &str = "\
Backreferences in NEWNAME are resolved against the groups of PATTERN, in path order. \
Group 0 is the whole matched path. Both `\\1' and `$1' are accepted.

PATTERN and NEWNAME may be absolute or relative. Every segment of PATTERN is a regular \
expression, so escape `.' to match it literally; a segment that is exactly `.' or `..' \
still means the current or parent directory. In NEWNAME only `\\' and `$' need escaping.";

/// mvre: rename large amounts of files using regular expressions.
#[derive(Debug, Parser)]
#[command(name = "mvre", version)]
#[command(about = "Rename large amounts of files using regular expressions", long_about = LONG_ABOUT)]
pub struct Cli {
    /// Match existing paths against this pattern
    #[arg(value_name = "PATTERN")]
    pub pattern: OsString,

    /// New name for each match (backreferences are resolved)
    #[arg(value_name = "NEWNAME")]
    pub new_name: OsString,

    /// Print each move as it happens
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Assume yes as the answer to all prompts
    #[arg(short = 'y', long = "yes")]
    pub assume_yes: bool,

    /// Print the planned moves without moving anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Replace existing destinations
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Match pattern segments case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Let group 0 stand for the last path segment instead of the whole path
    #[arg(long)]
    pub leaf_group_zero: bool,

    /// Output format for --dry-run
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

impl Cli {
    pub fn rename_options(&self) -> Result<RenameOptions, OptionsError> {
        let matching = MatchOptions::builder()
            .case_insensitive(self.ignore_case)
            .build()?;
        let group_zero = if self.leaf_group_zero {
            GroupZero::LeafName
        } else {
            GroupZero::SourcePath
        };

        RenameOptions::builder()
            .matching(matching)
            .group_zero(group_zero)
            .assume_yes(self.assume_yes)
            .verbose(self.verbose)
            .overwrite(self.force)
            .dry_run(self.dry_run)
            .build()
    }
}
