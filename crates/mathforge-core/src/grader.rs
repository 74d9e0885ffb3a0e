//! Grading: reference answers vs. a submission.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::value::Value;

/// The outcome of grading one submission, indices sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeReport {
    /// Indices answered correctly.
    pub correct: Vec<u32>,
    /// Indices answered wrongly, unanswered, or not in the reference.
    pub wrong: Vec<u32>,
}

/// Classify every index in `reference ∪ submitted`.
///
/// An index is correct iff it appears in both mappings with equal
/// value. A submitted answer to an unknown index is wrong; so is an
/// unanswered reference index.
pub fn grade(reference: &BTreeMap<u32, Value>, submitted: &BTreeMap<u32, Value>) -> GradeReport {
    let mut correct = Vec::new();
    let mut wrong = Vec::new();

    for (index, answer) in submitted {
        match reference.get(index) {
            Some(expected) if expected == answer => correct.push(*index),
            _ => wrong.push(*index),
        }
    }
    for index in reference.keys() {
        if !submitted.contains_key(index) {
            wrong.push(*index);
        }
    }

    correct.sort_unstable();
    wrong.sort_unstable();
    GradeReport { correct, wrong }
}

impl GradeReport {
    /// The two-line text report.
    pub fn to_text(&self) -> String {
        format!(
            "Correct: {} ({})\nWrong: {} ({})\n",
            self.correct.len(),
            join_indices(&self.correct),
            self.wrong.len(),
            join_indices(&self.wrong),
        )
    }

    /// Write the text report to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_text())?;
        Ok(())
    }
}

fn join_indices(indices: &[u32]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
