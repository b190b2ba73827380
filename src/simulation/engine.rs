// src/simulation/engine.rs

use crate::core::{CellState, Grid};
use crate::rule::EvolutionRule;
use rayon::prelude::*;

/// Computes one synchronous generation: every cell's next state is derived
/// from `grid` (the previous generation) only, never from sibling updates.
///
/// Because each update reads the immutable previous snapshot and writes a
/// disjoint slot of the fresh array, the per-cell work has no ordering
/// constraints and is mapped across the rayon pool. The input grid is left
/// untouched; the output owns a newly allocated cell array.
pub(crate) fn advance<R: EvolutionRule>(grid: &Grid, rule: &R) -> Grid {
    let cols = grid.cols();
    let cells: Vec<CellState> = (0..grid.rows() * cols)
        .into_par_iter()
        .map(|index| {
            let (row, col) = (index / cols, index % cols);
            rule.next_state(grid.at(row, col), grid.neighbor_sum(row, col))
        })
        .collect();

    Grid::from_cells(grid.rows(), cols, grid.periodic(), cells)
}
