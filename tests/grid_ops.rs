use pixel_grid::{Cell, CellPos, Color, Grid, GridError, SizeLimits};

// Paint a recognisable diagonal pattern
fn create_test_grid(width: usize, height: usize) -> Grid {
    let grid = Grid::new(width, height).unwrap();
    let cells = (0..height as i32)
        .flat_map(|row| (0..width as i32).map(move |col| CellPos::new(row, col)))
        .filter(|pos| (pos.row + pos.col) % 3 == 0)
        .map(|pos| (pos, Cell::from(Color::Custom([pos.row as u8, pos.col as u8, 7]))));
    grid.set_many(cells)
}

#[test]
fn test_new_grid_is_transparent() {
    let grid = Grid::new(16, 16).unwrap();
    assert_eq!(grid.width(), 16);
    assert_eq!(grid.height(), 16);
    assert!(grid.is_blank());
    assert_eq!(grid.rows().count(), 16);
    assert!(grid.rows().all(|row| row.len() == 16));
}

#[test]
fn test_create_rejects_out_of_range_dimensions() {
    assert!(matches!(
        Grid::new(3, 16),
        Err(GridError::InvalidDimension { width: 3, height: 16, min: 4, max: 64 })
    ));
    assert!(Grid::new(16, 65).is_err());
    assert!(Grid::new(4, 64).is_ok());

    let limits = SizeLimits { min: 2, max: 8 };
    assert!(Grid::with_limits(2, 2, &limits).is_ok());
    assert!(Grid::with_limits(9, 2, &limits).is_err());
}

#[test]
fn test_get_out_of_bounds() {
    let grid = Grid::new(4, 5).unwrap();
    assert_eq!(grid.get(4, 3), Ok(Cell::Transparent));
    assert!(matches!(grid.get(5, 0), Err(GridError::OutOfBounds { row: 5, col: 0, .. })));
    assert!(matches!(grid.get(0, 4), Err(GridError::OutOfBounds { .. })));
}

#[test]
fn test_set_many_drops_out_of_bounds_cells() {
    let grid = Grid::new(4, 4).unwrap();
    let red = Cell::from(Color::RED);
    let next = grid.set_many([
        (CellPos::new(-1, 0), red),
        (CellPos::new(0, 4), red),
        (CellPos::new(2, 2), red),
    ]);

    assert_eq!(next.get(2, 2).unwrap(), red);
    assert_eq!(next.changed_cells(&grid), vec![CellPos::new(2, 2)]);
    // The receiver is untouched
    assert!(grid.is_blank());
}

#[test]
fn test_snapshots_are_independent() {
    let mut live = Grid::new(8, 8).unwrap();
    let snapshot = live.clone();

    assert!(live.set(CellPos::new(0, 0), Cell::from(Color::RED)));
    assert!(snapshot.is_blank());
    assert!(live.differs_from(&snapshot));
}

#[test]
fn test_resize_keeps_top_left_content() {
    let limits = SizeLimits::default();
    let grid = create_test_grid(10, 8);
    let smaller = grid.resize(6, 5, &limits);

    assert_eq!((smaller.width(), smaller.height()), (6, 5));
    for row in 0..5 {
        for col in 0..6 {
            assert_eq!(smaller.get(row, col), grid.get(row, col));
        }
    }
}

#[test]
fn test_resize_grow_then_shrink_restores_cells() {
    let limits = SizeLimits::default();
    let grid = create_test_grid(12, 9);
    let grown = grid.resize(20, 30, &limits);

    // Newly exposed cells are transparent
    assert_eq!(grown.get(29, 19).unwrap(), Cell::Transparent);
    assert_eq!(grown.get(3, 15).unwrap(), Cell::Transparent);

    let restored = grown.resize(12, 9, &limits);
    assert_eq!(restored, grid);
}

#[test]
fn test_resize_clamps_dimensions() {
    let limits = SizeLimits::default();
    let grid = Grid::new(16, 16).unwrap();

    let tiny = grid.resize(1, 0, &limits);
    assert_eq!((tiny.width(), tiny.height()), (4, 4));

    let huge = grid.resize(100, 65, &limits);
    assert_eq!((huge.width(), huge.height()), (64, 64));
}

#[test]
fn test_clear_keeps_dimensions() {
    let grid = create_test_grid(7, 5);
    let cleared = grid.clear();

    assert!(cleared.is_blank());
    assert_eq!((cleared.width(), cleared.height()), (7, 5));
    assert!(!grid.is_blank());
}

#[test]
fn test_offset_saturates() {
    let edge = CellPos::new(i32::MAX, i32::MIN);
    assert_eq!(edge.offset(1, -1), edge);
    assert_eq!(CellPos::new(2, 3).offset(-1, 1), CellPos::new(1, 4));
}
