//! Command-line interface definitions for `champion-pack`.

use camino::Utf8PathBuf;
use clap::{ArgAction, Args as ClapArgs, Parser};

/// Parsed CLI arguments for `champion-pack`.
#[derive(Debug, Parser)]
#[command(name = "champion-pack")]
#[command(about = "Pack champion sources into a generated TypeScript module")]
#[command(version)]
pub struct Args {
    /// Configuration file to load instead of `champion-pack.toml`.
    #[arg(long = "config", short = 'c', value_name = "PATH")]
    pub config_path: Option<Utf8PathBuf>,
    /// Values that override the file and environment layers.
    #[command(flatten)]
    pub overrides: CliOverrides,
    /// Logging verbosity flags.
    #[command(flatten)]
    pub verbosity: Verbosity,
}

/// Configuration values supplied on the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq, ClapArgs)]
pub struct CliOverrides {
    /// Directory scanned for champion files.
    #[arg(long, value_name = "PATH")]
    pub root_dir: Option<Utf8PathBuf>,
    /// Path of the generated module.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output_path: Option<Utf8PathBuf>,
    /// File name suffix that marks a champion (for example `.s`).
    #[arg(long, value_name = "TEXT")]
    pub suffix: Option<String>,
    /// Name of the exported constant.
    #[arg(long, value_name = "IDENT")]
    pub export_name: Option<String>,
    /// Exclude champions whose source contains this exact text.
    #[arg(long, value_name = "TEXT", conflicts_with = "exclude_line")]
    pub exclude_pattern: Option<String>,
    /// Exclude champions containing this line (newline terminator implied).
    #[arg(long, value_name = "LINE")]
    pub exclude_line: Option<String>,
    /// Write non-ASCII characters verbatim instead of `\uXXXX` escapes.
    #[arg(long = "utf8", action = ArgAction::SetTrue)]
    pub is_utf8: bool,
}

/// Logging verbosity flags.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ClapArgs)]
pub struct Verbosity {
    /// Increase log detail (repeat for more).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Only report errors.
    #[arg(short, long = "quiet", conflicts_with = "verbose")]
    pub is_quiet: bool,
}
