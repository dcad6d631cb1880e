//! CLI argument definitions for normcheck.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "normcheck",
    version,
    about = "Functional dependency reasoning and normalization exercise grading",
    long_about = "Reason about functional dependencies and grade database normalization exercises.\n\n\
                  Exercises are JSON files holding canonical attribute tokens, dependencies,\n\
                  keys and proposed 2NF/3NF schemas."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// TOML file with key search and grading settings.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the closure of an attribute set.
    Closure(ClosureArgs),

    /// Print the minimal cover of an exercise's dependencies.
    Cover(ExerciseArgs),

    /// Print the candidate keys of an exercise's universal relation.
    Keys(KeysArgs),

    /// Classify the universal relation against 2NF and 3NF.
    NormalForm(KeysArgs),

    /// Grade a student answer against a reference answer.
    Grade(GradeArgs),
}

#[derive(Args)]
pub struct ExerciseArgs {
    /// Exercise JSON file.
    #[arg(value_name = "EXERCISE")]
    pub exercise: PathBuf,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ClosureArgs {
    #[command(flatten)]
    pub input: ExerciseArgs,

    /// Comma-separated attributes to close over.
    #[arg(long = "attrs", value_name = "A,B")]
    pub attrs: String,
}

#[derive(Args)]
pub struct KeysArgs {
    #[command(flatten)]
    pub input: ExerciseArgs,

    /// Enumerate at most this many optional attributes (overrides config).
    #[arg(long = "max-optional", value_name = "N")]
    pub max_optional: Option<usize>,
}

#[derive(Args)]
pub struct GradeArgs {
    /// Reference answer JSON file.
    #[arg(value_name = "REFERENCE")]
    pub reference: PathBuf,

    /// Student answer JSON file.
    #[arg(value_name = "STUDENT")]
    pub student: PathBuf,

    /// Require nested dependency chains to match in order.
    #[arg(long = "strict-order")]
    pub strict_order: bool,

    /// Fail instead of warn when the attribute list is reordered.
    #[arg(long = "strict-attribute-order")]
    pub strict_attribute_order: bool,

    /// Enumerate at most this many optional attributes (overrides config).
    #[arg(long = "max-optional", value_name = "N")]
    pub max_optional: Option<usize>,

    /// Print the full report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
