//! The `mathforge generate` command.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use mathforge_core::engine::{Batch, BatchConfig};
use mathforge_core::paper;
use mathforge_core::Error;

use crate::config::load_config_from;

pub fn execute(
    count: Option<u32>,
    range: Option<i64>,
    fractions: bool,
    seed: Option<u64>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let count = count.unwrap_or(config.default_count);
    let range = range.unwrap_or(config.default_range);
    let allow_fraction = fractions || config.allow_fractions;
    let output_dir = output.unwrap_or_else(|| config.output_dir.clone());

    let mut batch = Batch::new(BatchConfig {
        count,
        range,
        allow_fraction,
    })?;

    let mut rng = match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    let exercises_path = output_dir.join(&config.exercise_file);
    let answers_path = output_dir.join(&config.answer_file);

    let mut exercises = std::fs::File::create(&exercises_path)
        .with_context(|| format!("failed to create {}", exercises_path.display()))?;
    let mut answers = std::fs::File::create(&answers_path)
        .with_context(|| format!("failed to create {}", answers_path.display()))?;

    tracing::info!(count, range, allow_fraction, "generating batch");

    // Write each problem as it is produced, so a batch that dies
    // part-way still leaves the finished lines on disk.
    let mut achieved = 0u32;
    let mut failure: Option<Error> = None;
    for _ in 0..count {
        match batch.next_problem(&mut rng) {
            Ok(problem) => {
                writeln!(
                    exercises,
                    "{}",
                    paper::exercise_line(problem.index, &problem.text)
                )?;
                writeln!(
                    answers,
                    "{}",
                    paper::answer_line(problem.index, &problem.answer)
                )?;
                achieved += 1;
            }
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }

    eprintln!(
        "Generated {achieved}/{count} problems (r={range}, fractions {})",
        if allow_fraction { "on" } else { "off" }
    );
    eprintln!("Exercises:  {}", exercises_path.display());
    eprintln!("Answer key: {}", answers_path.display());

    match failure {
        Some(e) => Err(e).with_context(|| format!("stopped after {achieved} of {count} problems")),
        None => Ok(()),
    }
}
