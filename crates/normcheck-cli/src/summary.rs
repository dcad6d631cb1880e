use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use serde::Serialize;

use normcheck_grade::GradeReport;
use normcheck_model::{
    Attribute as AttributeName, FailureReason, FunctionalDependency, KeySearchResult,
    NormalFormReport, TaskNote, TaskResult, TaskStatus, TaskValue, format_set,
};

use crate::types::{ClosureOutcome, CoverOutcome, NormalFormOutcome};

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_closure(outcome: &ClosureOutcome) {
    println!(
        "{}+ = {}",
        format_set(&outcome.attributes),
        format_set(&outcome.closure)
    );
    if outcome.superkey {
        println!("Superkey: yes");
    } else {
        println!("Superkey: no");
    }
}

pub fn print_cover(outcome: &CoverOutcome) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Dependency")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, fd) in outcome.cover.iter().enumerate() {
        table.add_row(vec![Cell::new(index + 1), Cell::new(fd)]);
    }
    println!(
        "Minimal cover ({} of {} dependencies):",
        outcome.cover.len(),
        outcome.input
    );
    println!("{table}");
}

pub fn print_keys(result: &KeySearchResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Candidate key")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, key) in result.keys.iter().enumerate() {
        table.add_row(vec![Cell::new(index + 1), Cell::new(format_set(key))]);
    }
    println!("{table}");
    println!("Prime attributes: {}", format_set(&result.prime_attributes()));
    println!("Search nodes: {}", result.nodes_visited);
    if result.truncated {
        println!(
            "Search truncated; skipped attributes: {}",
            join_attributes(&result.skipped)
        );
    }
}

pub fn print_normal_form(outcome: &NormalFormOutcome) {
    println!("Relation: {}", format_set(&outcome.relation));
    println!("Candidate keys:");
    print_keys(&outcome.keys);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Form"),
        header_cell("Status"),
        header_cell("Violations"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    table.add_row(form_row("2NF", &outcome.second));
    table.add_row(form_row("3NF", &outcome.third));
    println!("{table}");
}

pub fn print_grade_report(report: &GradeReport) {
    if !report.fingerprint_match {
        println!("Note: attribute lists differ between reference and student answers");
    }
    if let Some(score) = &report.score {
        println!(
            "Dependency score: {} ({:.0}%)",
            score.label,
            score.ratio * 100.0
        );
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Task"),
        header_cell("Status"),
        header_cell("Details"),
    ]);
    apply_grade_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for result in &report.tasks {
        table.add_row(vec![
            Cell::new(result.task.label()).add_attribute(Attribute::Bold),
            status_cell(result.status),
            Cell::new(task_details(result)),
        ]);
    }
    println!("{table}");
    println!(
        "PASS {}  WARN {}  FAIL {}  INSF {}",
        report.count(TaskStatus::Pass),
        report.count(TaskStatus::Warn),
        report.count(TaskStatus::Fail),
        report.count(TaskStatus::Insf)
    );
}

fn form_row(label: &str, report: &NormalFormReport) -> Vec<Cell> {
    let status = if report.ok {
        Cell::new("OK").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        Cell::new("VIOLATED").fg(Color::Red).add_attribute(Attribute::Bold)
    };
    let violations = if report.violations.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(format_fds(&report.violations))
    };
    vec![Cell::new(label), status, violations]
}

fn task_details(result: &TaskResult) -> String {
    let mut lines = Vec::new();
    if let Some(reason) = &result.reason {
        lines.push(describe_reason(reason));
    }
    if let Some(missing) = &result.missing {
        lines.push(format!("missing: {}", format_value(missing)));
    }
    if let Some(extra) = &result.extra {
        lines.push(format!("extra: {}", format_value(extra)));
    }
    lines.extend(result.notes.iter().map(describe_note));
    if lines.is_empty() {
        "-".to_string()
    } else {
        lines.join("\n")
    }
}

fn describe_reason(reason: &FailureReason) -> String {
    match reason {
        FailureReason::NoReferenceAttributes => "reference answer has no attributes".to_string(),
        FailureReason::NoPrimaryKey => "reference answer has no primary key".to_string(),
        FailureReason::SetMismatch => "sets differ".to_string(),
        FailureReason::NotSuperkey => "key does not determine every attribute".to_string(),
        FailureReason::NotMinimal => "key is not minimal".to_string(),
        FailureReason::AttributeOrder => "attributes listed in another order".to_string(),
        FailureReason::ChainOrder => "chain order differs".to_string(),
        FailureReason::Coverage => "schema does not cover the attributes".to_string(),
        FailureReason::NormalFormViolation {
            relation,
            normal_form,
            violations,
        } => format!(
            "{relation} violates {normal_form}: {}",
            format_fds(violations)
        ),
    }
}

fn describe_note(note: &TaskNote) -> String {
    match note {
        TaskNote::Score(score) => format!("score {} ({:.2})", score.label, score.ratio),
        TaskNote::OrderNotChecked => "chain order not checked".to_string(),
        TaskNote::LosslessJoinNotShown => "lossless join not shown".to_string(),
        TaskNote::DependenciesNotPreserved => "dependencies not preserved".to_string(),
        TaskNote::KeySearchTruncated { skipped } => {
            format!("key search truncated, skipped {}", join_attributes(skipped))
        }
    }
}

fn format_value(value: &TaskValue) -> String {
    match value {
        TaskValue::Attributes(attributes) => join_attributes(attributes),
        TaskValue::Dependencies(fds) => format_fds(fds),
        TaskValue::Chains(chains) => chains
            .iter()
            .map(|chain| format!("[{}]", format_fds(chain)))
            .collect::<Vec<_>>()
            .join(" "),
        TaskValue::Relations(relations) => relations
            .iter()
            .map(|relation| format!("{}{}", relation.name, format_set(&relation.attributes)))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn join_attributes(attributes: &[AttributeName]) -> String {
    attributes
        .iter()
        .map(AttributeName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_fds(fds: &[FunctionalDependency]) -> String {
    fds.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn status_cell(status: TaskStatus) -> Cell {
    let cell = Cell::new(status.as_str()).add_attribute(Attribute::Bold);
    match status {
        TaskStatus::Pass => cell.fg(Color::Green),
        TaskStatus::Warn => cell.fg(Color::Yellow),
        TaskStatus::Fail => cell.fg(Color::Red),
        TaskStatus::Insf => cell.fg(Color::DarkGrey),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_grade_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Fixed(24)),
        ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ColumnConstraint::UpperBoundary(Width::Percentage(75)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

#[cfg(test)]
mod tests {
    use normcheck_model::{NormalForm, Task};

    use super::*;

    #[test]
    fn details_list_reason_then_differences() {
        let fd = FunctionalDependency::new(["customer"], "city");
        let result = TaskResult::fail(Task::TransitiveDependencies, FailureReason::SetMismatch)
            .with_missing(TaskValue::Dependencies(vec![fd]));
        assert_eq!(
            task_details(&result),
            "sets differ\nmissing: customer -> city"
        );
    }

    #[test]
    fn violation_names_relation_and_form() {
        let reason = FailureReason::NormalFormViolation {
            relation: "orders".to_string(),
            normal_form: NormalForm::Third,
            violations: vec![FunctionalDependency::new(["customer"], "city")],
        };
        assert_eq!(
            describe_reason(&reason),
            "orders violates 3NF: customer -> city"
        );
    }

    #[test]
    fn truncation_note_lists_skipped_attributes() {
        let note = TaskNote::KeySearchTruncated {
            skipped: vec![AttributeName::from("x"), AttributeName::from("y")],
        };
        assert_eq!(describe_note(&note), "key search truncated, skipped x, y");
    }
}
