// src/simulation/mod.rs

//! Drives grid evolution: the public `Simulator` facade and the internal
//! stepping engine.
//!
//! A step is synchronous: every cell's next state is computed from the
//! previous generation's snapshot, so updates are order-independent and a
//! step always yields a brand-new `Grid` value.

// Make engine module crate visible for tests
mod results;
pub(crate) mod engine;

// Re-export the main public interface types
pub use results::{Checkpoint, SimulationResult};

use crate::core::Grid;
use crate::rule::{EvolutionRule, GaussianRule};

/// Orchestrates multi-generation evolution of a [`Grid`].
///
/// The simulator is parameterized over the [`EvolutionRule`] so alternative
/// rules swap in behind the same stepping contract; [`GaussianRule`] is the
/// default. The simulator itself is stateless - grids go in, grids come out.
pub struct Simulator<R: EvolutionRule = GaussianRule> {
    rule: R,
}

impl Simulator<GaussianRule> {
    /// Creates a simulator running the default Gaussian-smoothed rule.
    pub fn new() -> Self {
        Self { rule: GaussianRule }
    }
}

impl Default for Simulator<GaussianRule> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: EvolutionRule> Simulator<R> {
    /// Creates a simulator running a caller-supplied rule.
    pub fn with_rule(rule: R) -> Self {
        Self { rule }
    }

    /// The rule this simulator applies.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Advances `grid` by one generation.
    ///
    /// Reads only from `grid` and returns a fresh value; the input is never
    /// mutated, so older snapshots remain valid alongside the new one.
    pub fn step(&self, grid: &Grid) -> Grid {
        engine::advance(grid, &self.rule)
    }

    /// Advances `grid` by exactly `generations` steps.
    ///
    /// `step_n(grid, 0)` is the identity and returns a copy of the input.
    pub fn step_n(&self, grid: &Grid, generations: usize) -> Grid {
        let mut current = grid.clone();
        for _ in 0..generations {
            current = self.step(&current);
        }
        current
    }

    /// Advances `generations` steps, capturing a [`Checkpoint`] at every
    /// requested generation index.
    ///
    /// Index 0 means the initial grid. Duplicate indices collapse to one
    /// capture and indices beyond `generations` are ignored. Each
    /// checkpoint's diagnostics are computed from its own snapshot.
    ///
    /// # Arguments
    /// * `initial` - The starting grid; left untouched.
    /// * `generations` - Number of steps to advance in total.
    /// * `checkpoints` - Generation indices to capture, in any order.
    ///
    /// # Returns
    /// * A [`SimulationResult`] with the captured checkpoints in ascending
    ///   generation order.
    pub fn run(
        &self,
        initial: &Grid,
        generations: usize,
        checkpoints: &[usize],
    ) -> SimulationResult {
        let mut wanted: Vec<usize> = checkpoints
            .iter()
            .copied()
            .filter(|&generation| generation <= generations)
            .collect();
        wanted.sort_unstable();
        wanted.dedup();

        let mut result = SimulationResult::new();
        let mut grid = initial.clone();
        for generation in 0..=generations {
            if wanted.binary_search(&generation).is_ok() {
                result.record(Checkpoint::capture(generation, grid.clone()));
            }
            if generation < generations {
                grid = self.step(&grid);
            }
        }
        result
    }
}
