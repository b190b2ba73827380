// src/lib.rs

//! `qlife` - A quantum-inspired Game of Life on a two-dimensional lattice
//!
//! Each cell carries a complex "aliveness" amplitude instead of a binary
//! state. One generation sums the neighbor amplitudes coherently - phases
//! reinforce or cancel, which is where the interference-like dynamics come
//! from - and feeds the squared magnitude of that sum through Gaussian
//! birth/survival weightings that smooth Conway's hard 2/3-neighbor rules.
//!
//! The rule is an approximate, non-unitary smoothing heuristic. Probability
//! totals drift across generations; they are surfaced as per-checkpoint
//! diagnostics and never enforced.

pub mod analysis;
pub mod core;
pub mod patterns;
pub mod rule;
pub mod simulation;

// Re-export the most common types for easier top-level use
pub use core::{CellState, Grid, QlifeError};
pub use rule::{EvolutionRule, GaussianRule};
pub use simulation::{Checkpoint, SimulationResult, Simulator};
pub use analysis::{
    entropy,
    mean_probability,
    measure,
    probabilities,
    sample_collapse,
    total_probability,
};

// Example 1: Glider evolution with checkpoint diagnostics
// Demonstrates seeding a named pattern, advancing it, and reading the
// per-checkpoint diagnostics computed from each captured snapshot.
/// ```
/// use qlife::{analysis, patterns, Simulator};
///
/// let grid = patterns::glider(8, 8, true).expect("an 8x8 grid holds the glider");
/// let simulator = Simulator::new();
/// let result = simulator.run(&grid, 10, &[0, 5, 10]);
///
/// assert_eq!(result.checkpoints().len(), 3);
///
/// // The initial snapshot is fully classical: five live cells, no entropy.
/// let start = result.checkpoint(0).expect("generation 0 was requested");
/// assert!((start.total_probability() - 5.0).abs() < 1e-12);
/// assert_eq!(start.entropy(), 0.0);
/// let alive = analysis::measure(start.grid(), 0.5)
///     .iter()
///     .flatten()
///     .filter(|&&alive| alive)
///     .count();
/// assert_eq!(alive, 5);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Superposition seeding and measurement
// Demonstrates placing a balanced superposition and reading it back through
// the probability map and both collapse operations.
/// ```
/// use qlife::{analysis, patterns};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let pattern = vec![vec![false; 3]; 3];
/// let grid = patterns::from_pattern(&pattern, false).expect("3x3 pattern");
/// let grid = patterns::add_superposition(&grid, 1, 1, 0.5, 0.0).expect("(1, 1) is in range");
///
/// let probabilities = analysis::probabilities(&grid);
/// assert!((probabilities[1][1] - 0.5).abs() < 1e-12);
/// assert_eq!(probabilities[0][0], 0.0);
///
/// // Deterministic thresholded collapse.
/// assert!(analysis::measure(&grid, 0.25)[1][1]);
/// assert!(!analysis::measure(&grid, 0.75)[1][1]);
///
/// // Stochastic collapse takes the random source as an argument.
/// let mut rng = StdRng::seed_from_u64(1);
/// let sampled = analysis::sample_collapse(&grid, &mut rng);
/// assert_eq!(sampled.len(), 3);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
