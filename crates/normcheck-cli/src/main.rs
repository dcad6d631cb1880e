//! normcheck command-line interface.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use normcheck_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{load_config, run_closure, run_cover, run_grade, run_keys, run_normal_form};
use crate::summary::{
    print_closure, print_cover, print_grade_report, print_json, print_keys, print_normal_form,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Runs the selected command; a grade with any failing task exits with 1.
fn run(cli: &Cli) -> anyhow::Result<i32> {
    let config = load_config(cli.config.as_deref())?;
    match &cli.command {
        Command::Closure(args) => {
            let outcome = run_closure(args)?;
            if args.input.json {
                print_json(&outcome)?;
            } else {
                print_closure(&outcome);
            }
        }
        Command::Cover(args) => {
            let outcome = run_cover(args)?;
            if args.json {
                print_json(&outcome)?;
            } else {
                print_cover(&outcome);
            }
        }
        Command::Keys(args) => {
            let result = run_keys(args, &config)?;
            if args.input.json {
                print_json(&result)?;
            } else {
                print_keys(&result);
            }
        }
        Command::NormalForm(args) => {
            let outcome = run_normal_form(args, &config)?;
            if args.input.json {
                print_json(&outcome)?;
            } else {
                print_normal_form(&outcome);
            }
        }
        Command::Grade(args) => {
            let report = run_grade(args, &config)?;
            if args.json {
                print_json(&report)?;
            } else {
                print_grade_report(&report);
            }
            if report.has_failures() {
                return Ok(1);
            }
        }
    }
    Ok(0)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let mut config = LogConfig::default()
        .with_level(level_filter)
        .with_format(format)
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
