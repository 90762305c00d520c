use crate::color::Cell;
use crate::grid::{CellPos, Grid};

/// 4-connected flood fill from `seed`.
///
/// Repaints the region sharing the seed's value with `fill`. Returns the
/// input unchanged (and `false`) when the seed is outside the grid or already
/// holds `fill`.
pub fn flood_fill(grid: &Grid, seed: CellPos, fill: Cell) -> (Grid, bool) {
    let Some(target) = grid.cell_at(seed) else {
        return (grid.clone(), false);
    };
    if target == fill {
        return (grid.clone(), false);
    }

    let width = grid.width();
    let mut next = grid.clone();
    let mut visited = vec![false; width * grid.height()];
    let mut stack = vec![seed];

    while let Some(pos) = stack.pop() {
        if !grid.contains(pos) {
            continue;
        }
        let index = pos.row as usize * width + pos.col as usize;
        if visited[index] || grid.cell_at(pos) != Some(target) {
            continue;
        }
        visited[index] = true;
        next.set(pos, fill);

        stack.push(pos.offset(-1, 0));
        stack.push(pos.offset(1, 0));
        stack.push(pos.offset(0, -1));
        stack.push(pos.offset(0, 1));
    }

    (next, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_fill_blank_grid_paints_everything() {
        let grid = Grid::new(6, 5).unwrap();
        let (filled, changed) = flood_fill(&grid, CellPos::new(2, 2), Cell::from(Color::RED));

        assert!(changed);
        assert!(filled.cells().iter().all(|c| *c == Cell::from(Color::RED)));
    }

    #[test]
    fn test_fill_outside_grid_is_noop() {
        let grid = Grid::new(4, 4).unwrap();
        let (same, changed) = flood_fill(&grid, CellPos::new(-1, 2), Cell::from(Color::RED));
        assert!(!changed);
        assert_eq!(same, grid);
    }

    #[test]
    fn test_fill_does_not_cross_diagonals() {
        // Wall on the anti-diagonal splits the grid into two 4-connected halves
        let grid = Grid::new(4, 4).unwrap();
        let wall = Cell::from(Color::BLACK);
        let grid = grid.set_many((0..4).map(|i| (CellPos::new(i, 3 - i), wall)));

        let (filled, _) = flood_fill(&grid, CellPos::new(0, 0), Cell::from(Color::RED));

        assert_eq!(filled.get(0, 0).unwrap(), Cell::from(Color::RED));
        assert_eq!(filled.get(1, 1).unwrap(), Cell::from(Color::RED));
        assert_eq!(filled.get(3, 3).unwrap(), Cell::Transparent);
        assert_eq!(filled.get(2, 2).unwrap(), Cell::Transparent);
    }
}
