//! Command-line interface module.
//!
//! Flags follow the single-dash long style (`-dir`, `-exclude`); the usual
//! double-dash spelling works too. [`normalize_args`] rewrites the former
//! into the latter before Clap sees them.
//!
//! # Example Usage
//!
//! ```bash
//! # Scan the current directory
//! tfmodscan
//!
//! # Scan a tree, skipping some directory names wherever they appear
//! tfmodscan -dir ./infrastructure -exclude .git,vendor
//! ```

use crate::config::{parse_exclude_list, Config};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Long flags that may be written with a single dash.
const SINGLE_DASH_FLAGS: &[&str] = &["dir", "exclude"];

/// tfmodscan - list GitHub-hosted Terraform modules used in a directory tree.
#[derive(Parser, Debug)]
#[command(
    name = "tfmodscan",
    author,
    version,
    about = "Scan Terraform files for GitHub-hosted module references",
    long_about = "tfmodscan walks a directory tree, finds `module` blocks in .tf files whose \
                  source points at github.com, and prints them as a table with the ref each \
                  one is pinned to.",
    after_help = "Example:\n  tfmodscan -dir ./infrastructure -exclude .git,vendor"
)]
pub struct Cli {
    /// Directory to scan for Terraform modules
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub dir: PathBuf,

    /// Comma-separated list of directory names to exclude (e.g. .git,vendor,test)
    #[arg(long, value_name = "NAMES", default_value = "")]
    pub exclude: String,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logs except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable styled table headers
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long flags.
    #[must_use]
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Names of directories to prune, split from `--exclude`.
    #[must_use]
    pub fn exclude_dirs(&self) -> Vec<String> {
        parse_exclude_list(&self.exclude)
    }

    /// Build the run configuration from the parsed arguments.
    #[must_use]
    pub fn to_config(&self) -> Config {
        let mut config = Config::default().with_exclude_dirs(self.exclude_dirs());
        config.output.colored = !self.no_color;
        config
    }
}

/// Rewrite `-dir`/`-exclude` (and their `=value` forms) to double-dash.
///
/// Everything else, including the program name, passes through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let Some(s) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = s.strip_prefix('-').filter(|r| !r.starts_with('-')) else {
                return arg;
            };
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if SINGLE_DASH_FLAGS.contains(&name) {
                OsString::from(format!("-{s}"))
            } else {
                arg
            }
        })
        .collect()
}
