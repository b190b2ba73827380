// src/core/neighborhood.rs

//! Moore-neighborhood resolution under both boundary policies.

/// Row/column offsets of the Moore neighborhood, center excluded.
/// The order is fixed so neighbor traversal is reproducible in tests.
pub(crate) const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Resolves the Moore neighbors of `(row, col)` on a `rows` x `cols` lattice.
///
/// With `periodic` set, out-of-range coordinates wrap via non-negative
/// modulo (`(coord + dimension) % dimension`) and the result always holds
/// exactly 8 entries. Without it, coordinates outside the lattice are
/// omitted, so corner cells resolve to 3 neighbors and edge cells to 5.
///
/// Pure and deterministic; the returned order follows [`MOORE_OFFSETS`].
pub fn moore_neighbors(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
    periodic: bool,
) -> Vec<(usize, usize)> {
    let (rows_i, cols_i) = (rows as i64, cols as i64);
    let mut coords = Vec::with_capacity(MOORE_OFFSETS.len());

    for (dr, dc) in MOORE_OFFSETS {
        let r = row as i64 + dr;
        let c = col as i64 + dc;
        if periodic {
            coords.push((
                ((r + rows_i) % rows_i) as usize,
                ((c + cols_i) % cols_i) as usize,
            ));
        } else if r >= 0 && r < rows_i && c >= 0 && c < cols_i {
            coords.push((r as usize, c as usize));
        }
    }

    coords
}
