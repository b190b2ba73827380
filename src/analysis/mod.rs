// src/analysis/mod.rs

//! Diagnostics and measurement over grid snapshots.
//!
//! Everything here is a pure read of one snapshot. Total probability is a
//! trend indicator, not a conserved quantity: the evolution rule is a
//! non-unitary smoothing heuristic and makes no conservation promise.

use crate::core::Grid;
use rand::{Rng, RngExt};

/// Sum of `|amplitude|^2` over all cells.
///
/// Not invariant across steps; useful for watching how strongly the rule is
/// damping or amplifying the lattice.
pub fn total_probability(grid: &Grid) -> f64 {
    grid.cells().iter().map(|cell| cell.probability()).sum()
}

/// Per-cell alive probabilities, row-major, shaped like the grid.
pub fn probabilities(grid: &Grid) -> Vec<Vec<f64>> {
    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| grid.at(row, col).probability())
                .collect()
        })
        .collect()
}

/// Arithmetic mean of the per-cell alive probabilities.
pub fn mean_probability(grid: &Grid) -> f64 {
    total_probability(grid) / (grid.rows() * grid.cols()) as f64
}

/// Total binary entropy of the snapshot.
///
/// Each cell contributes `-p*ln(p) - (1-p)*ln(1-p)`; the term is defined as
/// zero when `p` is within machine epsilon of 0 or 1, so classical cells
/// contribute nothing and `ln(0)` never occurs.
///
/// # Returns
/// * The entropy sum in nats; exactly 0.0 for a fully classical grid.
pub fn entropy(grid: &Grid) -> f64 {
    grid.cells()
        .iter()
        .map(|cell| binary_entropy(cell.probability()))
        .sum()
}

fn binary_entropy(p: f64) -> f64 {
    if p <= f64::EPSILON || p >= 1.0 - f64::EPSILON {
        return 0.0;
    }
    -p * p.ln() - (1.0 - p) * (1.0 - p).ln()
}

/// Deterministic thresholded collapse: `probability > threshold` per cell.
///
/// This is a design simplification, not a Born-rule sample - the comparison
/// is strict, reproducible, and suited to regression fixtures. For the
/// stochastic variant see [`sample_collapse`].
pub fn measure(grid: &Grid, threshold: f64) -> Vec<Vec<bool>> {
    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| grid.at(row, col).probability() > threshold)
                .collect()
        })
        .collect()
}

/// Stochastic collapse: each cell reads alive with probability
/// `|amplitude|^2`, drawn independently from `rng`.
///
/// The random source is an argument so callers own reproducibility (seed a
/// `StdRng` in tests, pass a fresh one elsewhere). Cells at probability
/// exactly 0 or 1 collapse deterministically on every draw.
///
/// # Arguments
/// * `grid` - The snapshot to collapse.
/// * `rng` - Source for the per-cell Bernoulli draws.
pub fn sample_collapse<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Vec<Vec<bool>> {
    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| rng.random::<f64>() < grid.at(row, col).probability())
                .collect()
        })
        .collect()
}
