//! The `[index] payload` paper file codec.
//!
//! Exercise files, answer keys, and graded submissions all share one
//! line grammar: `[<index>] <payload>`, newline-terminated UTF-8. For
//! exercise files the payload is an expression followed by `=`; for
//! answer files it is a formatted answer. Reading tolerates blank lines
//! and skips lines that do not open with a bracket, warning as it goes.

use std::collections::BTreeMap;
use std::path::Path;

use crate::answer::{format_answer, parse_answer};
use crate::engine::ProblemSet;
use crate::error::{Error, Result};
use crate::value::Value;

/// Render one exercise line.
pub fn exercise_line(index: u32, text: &str) -> String {
    format!("[{index}] {text} =")
}

/// Render one answer line.
pub fn answer_line(index: u32, value: &Value) -> String {
    format!("[{index}] {}", format_answer(value))
}

/// Write the exercise file for a problem set.
pub fn write_exercise_file(path: &Path, set: &ProblemSet) -> Result<()> {
    let mut out = String::new();
    for p in &set.problems {
        out.push_str(&exercise_line(p.index, &p.text));
        out.push('\n');
    }
    std::fs::write(path, out)?;
    Ok(())
}

/// Write the answer-key file for a problem set.
pub fn write_answer_file(path: &Path, set: &ProblemSet) -> Result<()> {
    let mut out = String::new();
    for p in &set.problems {
        out.push_str(&answer_line(p.index, &p.answer));
        out.push('\n');
    }
    std::fs::write(path, out)?;
    Ok(())
}

/// Read a `[index] answer` file into an answer mapping.
///
/// A missing file is reported as [`Error::FileNotFound`], not a raw
/// I/O failure. A trailing `=` in the payload (exercise-file style) is
/// stripped before the answer is parsed, so a graded submission may be
/// written against either file shape.
pub fn read_answer_file(path: &Path) -> Result<BTreeMap<u32, Value>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let mut answers = BTreeMap::new();

    for (lineno, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let Some(payload) = split_indexed_line(line) else {
            tracing::warn!(
                "skipping line {} in {}: not an `[index] payload` line",
                lineno + 1,
                path.display()
            );
            continue;
        };
        let (index, payload) = payload;
        let index: u32 = index
            .trim()
            .parse()
            .map_err(|_| Error::InvalidAnswerFormat(line.to_string()))?;
        let answer_text = payload.split('=').next().unwrap_or("").trim();
        answers.insert(index, parse_answer(answer_text)?);
    }

    Ok(answers)
}

/// Split `[index] payload` into its two pieces, or `None` when the line
/// does not match the bracket shape.
fn split_indexed_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('[')?;
    let close = rest.find(']')?;
    Some((&rest[..close], &rest[close + 1..]))
}

/// One problem found while checking a paper file.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The problem index, when the line got far enough to have one.
    pub index: Option<u32>,
    /// What is wrong with the line.
    pub message: String,
}

/// Result of checking a paper file without failing on bad lines.
#[derive(Debug, Clone)]
pub struct PaperCheck {
    /// Number of well-formed entries.
    pub entries: usize,
    /// Everything that was wrong.
    pub warnings: Vec<ValidationWarning>,
}

/// Check a paper file, collecting warnings instead of failing.
pub fn validate_paper(path: &Path) -> Result<PaperCheck> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let mut seen_indices = std::collections::HashSet::new();
    let mut entries = 0usize;
    let mut warnings = Vec::new();

    for (lineno, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let Some((index, payload)) = split_indexed_line(line) else {
            warnings.push(ValidationWarning {
                index: None,
                message: format!("line {}: not an `[index] payload` line", lineno + 1),
            });
            continue;
        };
        let Ok(index) = index.trim().parse::<u32>() else {
            warnings.push(ValidationWarning {
                index: None,
                message: format!("line {}: unreadable index {index:?}", lineno + 1),
            });
            continue;
        };
        if !seen_indices.insert(index) {
            warnings.push(ValidationWarning {
                index: Some(index),
                message: format!("duplicate index {index}"),
            });
        }
        let answer_text = payload.split('=').next().unwrap_or("").trim();
        match parse_answer(answer_text) {
            Ok(_) => entries += 1,
            Err(_) => warnings.push(ValidationWarning {
                index: Some(index),
                message: format!("unparseable payload {answer_text:?}"),
            }),
        }
    }

    Ok(PaperCheck { entries, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Problem;
    use crate::value::{fraction, integer};

    fn sample_set() -> ProblemSet {
        ProblemSet {
            problems: vec![
                Problem {
                    index: 1,
                    text: "(1 + 2 × 3) - 4".into(),
                    answer: integer(3),
                },
                Problem {
                    index: 2,
                    text: "1/2 + 3/4".into(),
                    answer: fraction(5, 4).unwrap(),
                },
            ],
        }
    }

    #[test]
    fn line_rendering() {
        assert_eq!(exercise_line(1, "2 + 3"), "[1] 2 + 3 =");
        assert_eq!(answer_line(2, &fraction(5, 2).unwrap()), "[2] 2'1/2");
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let set = sample_set();

        let answers_path = dir.path().join("Answers.txt");
        write_answer_file(&answers_path, &set).unwrap();
        let read = read_answer_file(&answers_path).unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[&1], integer(3));
        assert_eq!(read[&2], fraction(5, 4).unwrap());

        // Exercise files parse as far as their indices go; payloads are
        // expressions, which are not answers.
        let exercises_path = dir.path().join("Exercises.txt");
        write_exercise_file(&exercises_path, &set).unwrap();
        let content = std::fs::read_to_string(&exercises_path).unwrap();
        assert_eq!(content, "[1] (1 + 2 × 3) - 4 =\n[2] 1/2 + 3/4 =\n");
    }

    #[test]
    fn missing_file_is_a_value_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        assert!(matches!(
            read_answer_file(&path),
            Err(Error::FileNotFound(p)) if p == path
        ));
    }

    #[test]
    fn trailing_equals_and_blank_lines_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submission.txt");
        std::fs::write(&path, "[1] 3/4 =\n\n[2] 5\n   \n[3] 2'1/2  \n").unwrap();
        let read = read_answer_file(&path).unwrap();
        assert_eq!(read[&1], fraction(3, 4).unwrap());
        assert_eq!(read[&2], integer(5));
        assert_eq!(read[&3], fraction(5, 2).unwrap());
    }

    #[test]
    fn non_bracket_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submission.txt");
        std::fs::write(&path, "name: somebody\n[1] 5\n").unwrap();
        let read = read_answer_file(&path).unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[&1], integer(5));
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submission.txt");
        std::fs::write(&path, "[1] abc\n").unwrap();
        assert!(matches!(
            read_answer_file(&path),
            Err(Error::InvalidAnswerFormat(_))
        ));
    }

    #[test]
    fn validate_reports_duplicates_and_bad_payloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.txt");
        std::fs::write(&path, "[1] 5\n[1] 6\njunk\n[2] abc\n[x] 1\n").unwrap();
        let check = validate_paper(&path).unwrap();
        assert_eq!(check.entries, 2);
        assert_eq!(check.warnings.len(), 4);
        assert!(check
            .warnings
            .iter()
            .any(|w| w.message.contains("duplicate index 1")));
        assert!(check
            .warnings
            .iter()
            .any(|w| w.message.contains("unparseable payload")));
        assert!(check
            .warnings
            .iter()
            .any(|w| w.message.contains("unreadable index")));
    }
}
