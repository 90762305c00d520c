use pixel_grid::export::{cell_edges, export_file_name, export_png, export_size};
use pixel_grid::{Cell, CellPos, Color, ExportError, Grid, SizeLimits, rasterize};

// Every cell painted with a color unique to its position
fn create_unique_grid(width: usize, height: usize) -> Grid {
    let grid = Grid::with_limits(width, height, &SizeLimits { min: 1, max: 64 }).unwrap();
    let cells = (0..height as i32).flat_map(|row| {
        (0..width as i32).map(move |col| {
            (
                CellPos::new(row, col),
                Cell::from(Color::Custom([row as u8, col as u8, 200])),
            )
        })
    });
    grid.set_many(cells)
}

#[test]
fn test_cell_edges_span_output() {
    assert_eq!(cell_edges(3, 10), vec![0, 3, 7, 10]);
    assert_eq!(cell_edges(4, 16), vec![0, 4, 8, 12, 16]);
    // Halves round up
    assert_eq!(cell_edges(4, 10), vec![0, 3, 5, 8, 10]);
}

#[test]
fn test_export_tiles_without_gaps_or_overlaps() {
    let grid = create_unique_grid(3, 3);
    let buffer = rasterize(&grid, 10, 10).unwrap();
    let edges = cell_edges(3, 10);

    // Each pixel belongs to exactly one cell and carries that cell's color
    let mut coverage = vec![0u32; 100];
    for row in 0..3 {
        for col in 0..3 {
            for y in edges[row]..edges[row + 1] {
                for x in edges[col]..edges[col + 1] {
                    coverage[y * 10 + x] += 1;
                    assert_eq!(buffer.pixel(x, y), Some([row as u8, col as u8, 200, 255]));
                }
            }
        }
    }
    assert!(coverage.iter().all(|&hits| hits == 1));
}

#[test]
fn test_tiling_holds_for_awkward_sizes() {
    for (grid_size, out) in [((7, 5), (16, 16)), ((13, 4), (100, 37)), ((64, 64), (1600, 1600))] {
        let grid = create_unique_grid(grid_size.0, grid_size.1);
        let buffer = rasterize(&grid, out.0, out.1).unwrap();
        let edges_x = cell_edges(grid_size.0, out.0);
        let edges_y = cell_edges(grid_size.1, out.1);

        assert_eq!(edges_x.first(), Some(&0));
        assert_eq!(edges_x.last(), Some(&out.0));
        assert!(edges_x.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(edges_y.last(), Some(&out.1));
        // No pixel left transparent in a fully painted grid
        assert!(buffer.as_rgba().chunks(4).all(|px| px[3] == 255));
    }
}

#[test]
fn test_transparent_cells_stay_transparent() {
    let grid = Grid::new(4, 4).unwrap();
    let grid = grid.set_many([(CellPos::new(0, 0), Cell::from(Color::RED))]);
    let buffer = rasterize(&grid, 8, 8).unwrap();

    assert_eq!(buffer.pixel(0, 0), Some([0xef, 0x44, 0x44, 0xff]));
    assert_eq!(buffer.pixel(1, 1), Some([0xef, 0x44, 0x44, 0xff]));
    assert_eq!(buffer.pixel(2, 0), Some([0, 0, 0, 0]));
    assert_eq!(buffer.pixel(7, 7), Some([0, 0, 0, 0]));
}

#[test]
fn test_zero_sized_export_fails() {
    let grid = Grid::new(4, 4).unwrap();
    assert!(matches!(
        rasterize(&grid, 0, 10),
        Err(ExportError::InvalidResolution { width: 0, height: 10 })
    ));
}

#[test]
fn test_export_size_follows_aspect_ratio() {
    assert_eq!(export_size(16, 16, 512), (512, 512));
    assert_eq!(export_size(32, 16, 512), (512, 256));
    assert_eq!(export_size(16, 48, 512), (171, 512));
    assert_eq!(export_size(5, 4, 16), (16, 13));
}

#[test]
fn test_png_export_decodes() {
    let grid = Grid::new(16, 8).unwrap();
    let grid = grid.set_many([(CellPos::new(0, 0), Cell::from(Color::BLUE))]);
    let exported = export_png(&grid, 64).unwrap();

    assert_eq!(exported.file_name, "pixel-art-16x8-64x32.png");
    assert_eq!(export_file_name(&grid, 64, 32), exported.file_name);

    let decoded = image::load_from_memory(&exported.png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (64, 32));
    assert_eq!(decoded.get_pixel(0, 0).0, [0x3b, 0x82, 0xf6, 0xff]);
    assert_eq!(decoded.get_pixel(63, 31).0, [0, 0, 0, 0]);
}

#[test]
fn test_oversized_export_fails_instead_of_panicking() {
    let grid = Grid::new(4, 4).unwrap();
    assert!(matches!(
        rasterize(&grid, usize::MAX / 2, 3),
        Err(ExportError::InvalidResolution { height: 3, .. })
    ));
    assert!(rasterize(&grid, 3, usize::MAX).is_err());
}

#[test]
fn test_edges_for_huge_outputs_do_not_overflow() {
    let edges = cell_edges(64, usize::MAX);
    assert_eq!(edges.first(), Some(&0));
    assert_eq!(edges.last(), Some(&usize::MAX));
    assert!(edges.windows(2).all(|w| w[0] < w[1]));

    assert_eq!(export_size(64, 32, usize::MAX).0, usize::MAX);
}
