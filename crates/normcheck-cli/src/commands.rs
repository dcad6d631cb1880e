use std::path::Path;

use anyhow::{Context, Result};
use normcheck_core::{candidate_keys, check_2nf, check_3nf, closure, minimal_cover};
use normcheck_grade::{GradeReport, grade_exercise};
use normcheck_cli::config::Config;
use normcheck_cli::input::{load_exercise, parse_attribute_list};
use normcheck_model::{KeySearchOptions, KeySearchResult, TaskStatus};
use tracing::{debug, info, info_span};

use crate::cli::{ClosureArgs, ExerciseArgs, GradeArgs, KeysArgs};
use crate::types::{ClosureOutcome, CoverOutcome, NormalFormOutcome};

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = Config::load_optional(path)?;
    debug!(
        max_optional = config.keys.max_optional,
        strict_nested_order = config.grading.strict_nested_order,
        "configuration loaded"
    );
    Ok(config)
}

pub fn run_closure(args: &ClosureArgs) -> Result<ClosureOutcome> {
    let exercise = load_exercise(&args.input.exercise)?;
    let attributes = parse_attribute_list(&args.attrs).context("parse --attrs")?;
    let universe = exercise.universe();
    let closure = closure(&attributes, &exercise.dependencies());
    let superkey = !universe.is_empty() && universe.is_subset(&closure);
    Ok(ClosureOutcome {
        attributes,
        closure,
        superkey,
    })
}

pub fn run_cover(args: &ExerciseArgs) -> Result<CoverOutcome> {
    let exercise = load_exercise(&args.exercise)?;
    let fds = exercise.dependencies();
    let cover = minimal_cover(&fds);
    info!(input = fds.len(), cover = cover.len(), "minimal cover computed");
    Ok(CoverOutcome {
        input: fds.len(),
        cover,
    })
}

pub fn run_keys(args: &KeysArgs, config: &Config) -> Result<KeySearchResult> {
    let exercise = load_exercise(&args.input.exercise)?;
    let cover = minimal_cover(&exercise.dependencies());
    let result = candidate_keys(
        &exercise.universe(),
        &cover,
        &key_options(config, args.max_optional),
    );
    info!(
        keys = result.keys.len(),
        nodes = result.nodes_visited,
        "candidate keys computed"
    );
    Ok(result)
}

/// Classifies the universal relation of an exercise.
pub fn run_normal_form(args: &KeysArgs, config: &Config) -> Result<NormalFormOutcome> {
    let exercise = load_exercise(&args.input.exercise)?;
    let relation = exercise.universe();
    let cover = minimal_cover(&exercise.dependencies());
    let keys = candidate_keys(&relation, &cover, &key_options(config, args.max_optional));
    let second = check_2nf(&relation, &cover, &keys.keys);
    let third = check_3nf(&relation, &cover, &keys.keys);
    info!(second = second.ok, third = third.ok, "normal forms checked");
    Ok(NormalFormOutcome {
        relation,
        cover,
        keys,
        second,
        third,
    })
}

pub fn run_grade(args: &GradeArgs, config: &Config) -> Result<GradeReport> {
    let span = info_span!("grade_files", student = %args.student.display());
    let _guard = span.enter();
    let reference = load_exercise(&args.reference).context("load reference answer")?;
    let student = load_exercise(&args.student).context("load student answer")?;
    let mut options = config.grading_options();
    options.key_search = key_options(config, args.max_optional);
    if args.strict_order {
        options = options.with_strict_nested_order(true);
    }
    if args.strict_attribute_order {
        options = options.with_strict_attribute_order(true);
    }
    let report = grade_exercise(&reference, &student, &options);
    info!(
        tasks = report.tasks.len(),
        failures = report.count(TaskStatus::Fail),
        "grading complete"
    );
    Ok(report)
}

/// Command-line bound wins over the configuration file.
fn key_options(config: &Config, max_optional: Option<usize>) -> KeySearchOptions {
    match max_optional {
        Some(bound) => config.keys.with_max_optional(bound),
        None => config.keys,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_configured_bound() {
        let config = Config::parse("[keys]\nmax_optional = 12\n").unwrap();
        assert_eq!(key_options(&config, None).max_optional, 12);
        assert_eq!(key_options(&config, Some(3)).max_optional, 3);
    }
}
