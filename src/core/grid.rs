// src/core/grid.rs

use super::cell::CellState;
use super::error::QlifeError;
use super::neighborhood::{moore_neighbors, MOORE_OFFSETS};
use num_complex::Complex;
use num_traits::Zero;

/// A rectangular lattice of [`CellState`] values with a fixed boundary policy.
///
/// A `Grid` is an immutable value: its shape never changes after
/// construction, and every evolution step produces a brand-new `Grid` over a
/// freshly allocated cell array. Nothing is shared between generations, so
/// references to older snapshots stay valid and unaffected while the
/// simulation advances.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    periodic: bool,
    /// Row-major cell storage, exactly `rows * cols` entries.
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates an all-dead grid.
    ///
    /// # Arguments
    /// * `rows`, `cols` - Lattice dimensions; both must be positive.
    /// * `periodic` - Boundary policy: toroidal wraparound when `true`,
    ///   hard edges when `false`. Fixed for the grid's lifetime.
    ///
    /// # Returns
    /// * `Ok(Grid)` with every cell at zero amplitude and zero phase.
    /// * `Err(QlifeError::InvalidDimension)` when either dimension is zero.
    pub fn new(rows: usize, cols: usize, periodic: bool) -> Result<Self, QlifeError> {
        if rows == 0 || cols == 0 {
            return Err(QlifeError::InvalidDimension {
                message: format!("grid dimensions must be positive, got {rows}x{cols}"),
            });
        }
        Ok(Self {
            rows,
            cols,
            periodic,
            cells: vec![CellState::dead(); rows * cols],
        })
    }

    /// Wraps an already-built cell array. (Internal visibility)
    pub(crate) fn from_cells(
        rows: usize,
        cols: usize,
        periodic: bool,
        cells: Vec<CellState>,
    ) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, periodic, cells }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the lattice wraps around at its edges.
    pub fn periodic(&self) -> bool {
        self.periodic
    }

    /// Read-only access to the row-major cell array.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// The cell at `(row, col)`, or `None` outside the lattice.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellState> {
        (row < self.rows && col < self.cols).then(|| &self.cells[self.idx(row, col)])
    }

    /// Returns a new grid with the cell at `(row, col)` replaced.
    ///
    /// This is an explicit-coordinate operation: there is no periodic
    /// wraparound here, and out-of-range coordinates are an error.
    pub fn with_cell(
        &self,
        row: usize,
        col: usize,
        state: CellState,
    ) -> Result<Self, QlifeError> {
        if row >= self.rows || col >= self.cols {
            return Err(QlifeError::OutOfBounds {
                row,
                col,
                message: format!("cell outside {}x{} grid", self.rows, self.cols),
            });
        }
        let mut cells = self.cells.clone();
        let index = self.idx(row, col);
        cells[index] = state;
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            periodic: self.periodic,
            cells,
        })
    }

    /// Moore-neighbor coordinates of `(row, col)` under this grid's
    /// boundary policy. See [`moore_neighbors`].
    pub fn neighbor_coords(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        moore_neighbors(row, col, self.rows, self.cols, self.periodic)
    }

    /// Coherent sum of the neighbor amplitudes of `(row, col)`.
    ///
    /// Amplitudes are summed as complex numbers, not magnitudes, so aligned
    /// neighbor phases reinforce and opposed phases cancel. This is the
    /// interference mechanism of the whole engine.
    pub fn neighbor_sum(&self, row: usize, col: usize) -> Complex<f64> {
        let (rows_i, cols_i) = (self.rows as i64, self.cols as i64);
        let mut sum = Complex::zero();

        for (dr, dc) in MOORE_OFFSETS {
            let r = row as i64 + dr;
            let c = col as i64 + dc;
            if self.periodic {
                let r = ((r + rows_i) % rows_i) as usize;
                let c = ((c + cols_i) % cols_i) as usize;
                sum += self.cells[self.idx(r, c)].amplitude();
            } else {
                if r < 0 || r >= rows_i || c < 0 || c >= cols_i {
                    continue;
                }
                sum += self.cells[self.idx(r as usize, c as usize)].amplitude();
            }
        }

        sum
    }

    /// Unchecked indexed access for the stepping engine. (Internal visibility)
    pub(crate) fn at(&self, row: usize, col: usize) -> &CellState {
        &self.cells[self.idx(row, col)]
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}
