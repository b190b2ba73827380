// src/simulation/results.rs

use crate::analysis;
use crate::core::Grid;
use std::fmt;

/// A grid snapshot captured at one requested generation, together with the
/// scalar diagnostics derived from that same snapshot.
///
/// The three diagnostics are computed at capture time from the stored grid,
/// so they always describe exactly the snapshot a consumer exports - never
/// a neighboring generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    generation: usize,
    grid: Grid,
    total_probability: f64,
    entropy: f64,
    mean_probability: f64,
}

impl Checkpoint {
    /// Captures a snapshot and its diagnostics. (Internal visibility)
    pub(crate) fn capture(generation: usize, grid: Grid) -> Self {
        let total_probability = analysis::total_probability(&grid);
        let entropy = analysis::entropy(&grid);
        let mean_probability = analysis::mean_probability(&grid);
        Self {
            generation,
            grid,
            total_probability,
            entropy,
            mean_probability,
        }
    }

    /// The generation index this snapshot was captured at (0 is the
    /// initial grid).
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The captured grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Sum of per-cell alive probabilities at capture time.
    pub fn total_probability(&self) -> f64 {
        self.total_probability
    }

    /// Total binary entropy at capture time.
    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    /// Mean per-cell alive probability at capture time.
    pub fn mean_probability(&self) -> f64 {
        self.mean_probability
    }

    /// Row-major per-cell alive probabilities of the snapshot, shaped like
    /// the grid and ready for tabular export.
    pub fn probabilities(&self) -> Vec<Vec<f64>> {
        analysis::probabilities(&self.grid)
    }
}

/// Holds the checkpoints captured during a [`Simulator::run`].
///
/// [`Simulator::run`]: crate::simulation::Simulator::run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Checkpoints in ascending generation order.
    checkpoints: Vec<Checkpoint>,
}

impl SimulationResult {
    /// Creates a new, empty result set. (Internal visibility)
    pub(crate) fn new() -> Self {
        Self { checkpoints: Vec::new() }
    }

    /// Appends a captured checkpoint. (Internal visibility)
    pub(crate) fn record(&mut self, checkpoint: Checkpoint) {
        self.checkpoints.push(checkpoint);
    }

    /// All captured checkpoints, in ascending generation order.
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    /// The checkpoint captured at `generation`, if one was requested.
    pub fn checkpoint(&self, generation: usize) -> Option<&Checkpoint> {
        self.checkpoints
            .iter()
            .find(|checkpoint| checkpoint.generation == generation)
    }

    /// Number of captured checkpoints.
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Returns `true` if no checkpoint was captured.
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results:")?;
        if self.checkpoints.is_empty() {
            writeln!(f, "  No checkpoints were captured.")?;
        } else {
            writeln!(f, "  Checkpoints:")?;
            for checkpoint in &self.checkpoints {
                writeln!(
                    f,
                    "    generation {:>4}: total probability {:.6}, entropy {:.6}, mean probability {:.6}",
                    checkpoint.generation,
                    checkpoint.total_probability,
                    checkpoint.entropy,
                    checkpoint.mean_probability,
                )?;
            }
        }
        Ok(())
    }
}
