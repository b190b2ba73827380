// src/core/cell.rs

use num_complex::Complex;
use std::fmt;

/// The state of a single lattice cell.
///
/// The complex `amplitude` is the weight of the cell's "alive" quality; its
/// squared magnitude is read as the probability of the cell being alive, so
/// the magnitude is kept inside [0, 1] at every construction site. The
/// amplitude for "dead" is implicit (`sqrt(1 - |amplitude|^2)`) and never
/// stored.
///
/// `phase` is a separate accumulator, in radians, fed a fraction of the
/// neighborhood phase each generation. It is deliberately unconstrained:
/// there is no wraparound into [0, 2π), callers may normalize for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellState {
    amplitude: Complex<f64>,
    phase: f64,
}

impl CellState {
    /// Creates a cell state, clamping the amplitude magnitude into [0, 1].
    ///
    /// Magnitudes above 1 describe an invalid physical state; the amplitude
    /// is rescaled onto the unit circle with its argument preserved.
    /// In-range amplitudes pass through untouched.
    pub fn new(amplitude: Complex<f64>, phase: f64) -> Self {
        let magnitude = amplitude.norm();
        let amplitude = if magnitude > 1.0 { amplitude / magnitude } else { amplitude };
        Self { amplitude, phase }
    }

    /// A fully dead cell: zero amplitude, zero accumulated phase.
    pub fn dead() -> Self {
        Self { amplitude: Complex::new(0.0, 0.0), phase: 0.0 }
    }

    /// A classically alive cell: amplitude 1 + 0i, zero accumulated phase.
    pub fn alive() -> Self {
        Self { amplitude: Complex::new(1.0, 0.0), phase: 0.0 }
    }

    /// Builds a superposed cell from an alive probability and an amplitude
    /// argument: `sqrt(p) * e^(i*phase)`.
    ///
    /// The probability is clamped into [0, 1] before use. The auxiliary
    /// phase accumulator starts at zero; only neighbor coupling advances it.
    pub fn from_probability(alive_probability: f64, phase: f64) -> Self {
        let p = alive_probability.clamp(0.0, 1.0);
        Self { amplitude: Complex::from_polar(p.sqrt(), phase), phase: 0.0 }
    }

    /// The complex alive-amplitude.
    pub fn amplitude(&self) -> Complex<f64> {
        self.amplitude
    }

    /// The accumulated coupling phase, in radians.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Probability of the cell being alive: `|amplitude|^2`.
    pub fn probability(&self) -> f64 {
        self.amplitude.norm_sqr()
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell[{:.4}, φ={:.4}]", self.amplitude, self.phase)
    }
}
