//! Seed-sweeping property runner
//!
//! Runs a property once per seed on the rayon thread pool. Each run gets
//! its own seeded generator, so a failure can be replayed from its seed.

use std::fmt;

use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::patterns;

/// A single failing run
#[derive(Debug, Clone)]
pub struct PropertyFailure {
    /// Seed that reproduces the failure
    pub seed: u64,
    /// What went wrong
    pub message: String,
}

/// Result of sweeping a property over many seeds
#[derive(Debug)]
pub struct PropertyReport {
    /// Name of the property
    pub name: String,
    /// Number of seeds run
    pub runs: usize,
    /// Failing runs, ordered by seed
    pub failures: Vec<PropertyFailure>,
}

impl PropertyReport {
    /// Check whether every run passed
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Panic with a readable summary if any run failed
    pub fn assert_passed(&self) {
        assert!(self.passed(), "{self}");
    }
}

impl fmt::Display for PropertyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {}/{} runs passed",
            self.name,
            self.runs - self.failures.len(),
            self.runs
        )?;
        for failure in self.failures.iter().take(10) {
            writeln!(f, "  seed {}: {}", failure.seed, failure.message)?;
        }
        Ok(())
    }
}

/// Run `property` for every seed in `seeds`
pub fn run_property<F>(name: &str, seeds: std::ops::Range<u64>, property: F) -> PropertyReport
where
    F: Fn(&mut ChaCha8Rng) -> Result<(), String> + Sync,
{
    let runs = (seeds.end.saturating_sub(seeds.start)) as usize;
    let mut failures: Vec<PropertyFailure> = seeds
        .into_par_iter()
        .filter_map(|seed| {
            let mut rng = patterns::rng(seed);
            property(&mut rng)
                .err()
                .map(|message| PropertyFailure { seed, message })
        })
        .collect();
    failures.sort_by_key(|f| f.seed);

    PropertyReport {
        name: name.to_string(),
        runs,
        failures,
    }
}
