use crate::color::Cell;
use crate::grid::{CellPos, Grid};

/// Cells covered by a `size`×`size` brush centred on `center`.
///
/// With `half = size / 2` the covered rows are
/// `center.row - half ..= center.row + size - half - 1`, and likewise for
/// columns, so even sizes extend one cell further up and left.
pub fn brush_footprint(center: CellPos, size: usize) -> impl Iterator<Item = CellPos> {
    let size = size.max(1) as i32;
    let half = size / 2;
    (-half..size - half)
        .flat_map(move |d_row| (-half..size - half).map(move |d_col| center.offset(d_row, d_col)))
}

/// Stamp the brush into a copy of `grid`.
///
/// Returns the new grid and whether any cell changed. Cells outside the grid
/// are skipped. Erasing is a stamp with `Cell::Transparent`.
pub fn apply_brush(grid: &Grid, center: CellPos, size: usize, cell: Cell) -> (Grid, bool) {
    let mut next = grid.clone();
    let changed = stamp(&mut next, center, size, cell);
    (next, changed)
}

/// In-place variant used while a drag is in progress
pub(crate) fn stamp(grid: &mut Grid, center: CellPos, size: usize, cell: Cell) -> bool {
    let mut changed = false;
    for pos in brush_footprint(center, size) {
        changed |= grid.set(pos, cell);
    }
    changed
}
