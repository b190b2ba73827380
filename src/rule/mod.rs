// src/rule/mod.rs

//! The smoothed birth/survival rule and the trait seam it sits behind.
//!
//! Classical Life branches on an integral neighbor count; here the count is
//! replaced by the squared magnitude of the coherent neighbor-amplitude sum,
//! and the hard 2/3-neighbor thresholds become Gaussian weightings centered
//! near them. The rule is deliberately non-unitary: it is a smoothing
//! heuristic, and probability totals drift across generations.

use crate::core::rule_constants::{
    BIRTH_PEAK, MAX_NEIGHBORS, PHASE_COUPLING, SURVIVAL_FLOOR, SURVIVAL_GAIN, SURVIVAL_PEAK,
};
use crate::core::CellState;
use num_complex::Complex;

/// A per-cell evolution rule: current state plus the coherent neighbor sum
/// in, next state out.
///
/// The stepper is written against this trait so alternative rules (for
/// instance a gate-based rendition of the same dynamics) slot in as whole
/// implementations rather than as special cases inside the engine. `Sync`
/// is required because cell updates within one step run in parallel.
pub trait EvolutionRule: Sync {
    /// Computes the next state of a cell from the previous generation's
    /// values. Must be pure: the engine calls it concurrently.
    fn next_state(&self, cell: &CellState, neighbor_sum: Complex<f64>) -> CellState;
}

/// The Gaussian-smoothed Conway analogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GaussianRule;

/// Continuous stand-in for "number of living neighbors": the squared
/// magnitude of the coherent neighbor sum, normalized by the nominal
/// neighborhood size and rescaled back.
///
/// The normalize-then-rescale expression reduces algebraically to
/// `|neighbor_sum|^2`, but the literal form is kept because existing
/// fixtures were generated against it. Constructively aligned phases can
/// push this value well past the nominal 0-8 range.
pub fn effective_neighbor_count(neighbor_sum: Complex<f64>) -> f64 {
    neighbor_sum.norm_sqr() / MAX_NEIGHBORS * MAX_NEIGHBORS
}

/// Survival weighting: a unit-width Gaussian over the effective neighbor
/// count, centered at 2.5 to straddle classical Life's 2-3 survival band.
pub fn survival_factor(effective_count: f64) -> f64 {
    (-(effective_count - SURVIVAL_PEAK).powi(2) / 2.0).exp()
}

/// Birth weighting: a unit-width Gaussian centered at classical Life's
/// 3-neighbor birth condition.
pub fn birth_factor(effective_count: f64) -> f64 {
    (-(effective_count - BIRTH_PEAK).powi(2) / 2.0).exp()
}

impl EvolutionRule for GaussianRule {
    fn next_state(&self, cell: &CellState, neighbor_sum: Complex<f64>) -> CellState {
        let count = effective_neighbor_count(neighbor_sum);
        let neighbor_phase = neighbor_sum.arg();

        let amplitude = if cell.probability() > 0.5 {
            // Predominantly alive: scale the existing amplitude, keeping a
            // floor of the prior magnitude even deep in the Gaussian tail.
            cell.amplitude() * (SURVIVAL_FLOOR + SURVIVAL_GAIN * survival_factor(count))
        } else {
            // Predominantly dead: a newborn cell takes its magnitude from
            // the birth factor and inherits the neighborhood's coherent phase.
            Complex::from_polar(birth_factor(count), neighbor_phase)
        };

        // The accumulator advances on both branches; a zero neighbor sum
        // contributes arg(0) = 0 and leaves it unchanged.
        CellState::new(amplitude, cell.phase() + PHASE_COUPLING * neighbor_phase)
    }
}
