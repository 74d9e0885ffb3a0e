//! The `mathforge grade` command.

use std::path::PathBuf;

use anyhow::Result;

use mathforge_core::grader::{grade, GradeReport};
use mathforge_core::paper::read_answer_file;

use crate::config::load_config_from;

pub fn execute(
    submission: PathBuf,
    key: Option<PathBuf>,
    output: Option<PathBuf>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let key_path = key.unwrap_or_else(|| config.output_dir.join(&config.answer_file));
    let output_path = output.unwrap_or_else(|| config.output_dir.join(&config.grade_file));

    let reference = read_answer_file(&key_path)?;
    let submitted = read_answer_file(&submission)?;

    let report = grade(&reference, &submitted);
    report.save(&output_path)?;

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            // text format
            print!("{}", report.to_text());
            print_summary(&report);
        }
    }

    eprintln!("Grade report saved to: {}", output_path.display());

    Ok(())
}

fn print_summary(report: &GradeReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Result", "Count", "Problems"]);
    table.add_row(vec![
        Cell::new("Correct"),
        Cell::new(report.correct.len()),
        Cell::new(join_indices(&report.correct)),
    ]);
    table.add_row(vec![
        Cell::new("Wrong"),
        Cell::new(report.wrong.len()),
        Cell::new(join_indices(&report.wrong)),
    ]);

    eprintln!("\n{table}");
}

fn join_indices(indices: &[u32]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
