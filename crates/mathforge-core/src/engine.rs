//! Batch problem production.
//!
//! A [`Batch`] owns the session-wide seen set and hands out indexed
//! problems one at a time, so the caller can write each problem as it
//! is produced and report the count actually achieved if generation
//! dies part-way through.

use std::collections::HashSet;

use rand::Rng;

use crate::error::{Error, Result};
use crate::generator::{generate_expression, MAX_OPERATORS};
use crate::value::Value;

/// Parameters of one generation batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of problems to produce.
    pub count: u32,
    /// Exclusive upper bound on integer leaves and inclusive bound on
    /// fraction denominators.
    pub range: i64,
    /// Whether proper fractions may appear (and division must produce
    /// non-whole quotients).
    pub allow_fraction: bool,
}

impl BatchConfig {
    /// Check the caller-supplied parameters.
    pub fn validate(&self) -> Result<()> {
        if self.count < 1 {
            return Err(Error::InvalidInput(format!(
                "problem count must be at least 1, got {}",
                self.count
            )));
        }
        if self.range < 4 {
            return Err(Error::InvalidInput(format!(
                "numeric range must be at least 4, got {}",
                self.range
            )));
        }
        Ok(())
    }
}

/// One generated problem: a 1-based index, the rendered expression, and
/// its exact answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub index: u32,
    pub text: String,
    pub answer: Value,
}

/// An ordered set of problems, indices `1..=n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemSet {
    pub problems: Vec<Problem>,
}

impl ProblemSet {
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

/// A generation session: validated config plus the seen set.
///
/// The seen set grows monotonically over the batch and is discarded
/// with it.
pub struct Batch {
    config: BatchConfig,
    seen: HashSet<String>,
    next_index: u32,
}

impl Batch {
    /// Create a batch, validating the config.
    pub fn new(config: BatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            seen: HashSet::new(),
            next_index: 1,
        })
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Number of problems produced so far.
    pub fn produced(&self) -> u32 {
        self.next_index - 1
    }

    /// Produce the next problem, deduplicated against everything this
    /// batch has already produced.
    pub fn next_problem<R: Rng>(&mut self, rng: &mut R) -> Result<Problem> {
        let expr = generate_expression(
            rng,
            MAX_OPERATORS,
            self.config.range,
            self.config.allow_fraction,
            &mut self.seen,
        )?;
        let problem = Problem {
            index: self.next_index,
            text: expr.text,
            answer: expr.value,
        };
        self.next_index += 1;
        Ok(problem)
    }

    /// Produce the whole batch in memory.
    pub fn run<R: Rng>(mut self, rng: &mut R) -> Result<ProblemSet> {
        let mut problems = Vec::with_capacity(self.config.count as usize);
        for _ in 0..self.config.count {
            problems.push(self.next_problem(rng)?);
        }
        Ok(ProblemSet { problems })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn config_validation() {
        assert!(BatchConfig { count: 5, range: 10, allow_fraction: false }
            .validate()
            .is_ok());
        assert!(matches!(
            BatchConfig { count: 0, range: 10, allow_fraction: false }.validate(),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            BatchConfig { count: 5, range: 3, allow_fraction: false }.validate(),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn batch_produces_requested_count_with_sequential_indices() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let config = BatchConfig { count: 3, range: 40, allow_fraction: true };
        let set = Batch::new(config).unwrap().run(&mut rng).unwrap();
        assert_eq!(set.len(), 3);
        let indices: Vec<u32> = set.problems.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn batch_problems_are_distinct() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let config = BatchConfig { count: 20, range: 300, allow_fraction: false };
        let set = Batch::new(config).unwrap().run(&mut rng).unwrap();
        let mut texts = std::collections::HashSet::new();
        for p in &set.problems {
            assert!(texts.insert(p.text.clone()), "duplicate problem {}", p.text);
        }
    }

    #[test]
    fn incremental_production_tracks_progress() {
        let mut rng = ChaCha20Rng::seed_from_u64(13);
        let config = BatchConfig { count: 5, range: 50, allow_fraction: false };
        let mut batch = Batch::new(config).unwrap();
        assert_eq!(batch.produced(), 0);
        let first = batch.next_problem(&mut rng).unwrap();
        assert_eq!(first.index, 1);
        assert_eq!(batch.produced(), 1);
        let second = batch.next_problem(&mut rng).unwrap();
        assert_eq!(second.index, 2);
        assert_eq!(batch.produced(), 2);
    }

    #[test]
    fn same_seed_replays_the_same_batch() {
        let config = BatchConfig { count: 5, range: 50, allow_fraction: true };
        let mut rng_a = ChaCha20Rng::seed_from_u64(99);
        let mut rng_b = ChaCha20Rng::seed_from_u64(99);
        let set_a = Batch::new(config).unwrap().run(&mut rng_a).unwrap();
        let set_b = Batch::new(config).unwrap().run(&mut rng_b).unwrap();
        assert_eq!(set_a, set_b);
    }
}
