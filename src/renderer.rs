use egui::{Color32, ColorImage, Vec2};

use crate::color::Cell;
use crate::export::PixelBuffer;
use crate::grid::{CellPos, Grid};

/// Edge length of the on-screen canvas along its longer side, in points
pub const CANVAS_SIZE: f32 = 512.0;

/// Cells drawn over the grid while a shape drag is in progress
#[derive(Debug, Clone, Copy)]
pub struct Preview<'a> {
    pub cells: &'a [CellPos],
    pub cell: Cell,
}

/// One pixel per cell, with the preview (if any) drawn on top
pub fn grid_image(grid: &Grid, preview: Option<Preview<'_>>) -> ColorImage {
    let mut image = ColorImage::new([grid.width(), grid.height()], Color32::TRANSPARENT);
    for (pixel, cell) in image.pixels.iter_mut().zip(grid.cells()) {
        *pixel = cell.to_color32();
    }

    if let Some(preview) = preview {
        let color = preview.cell.to_color32();
        for pos in preview.cells.iter().filter(|pos| grid.contains(**pos)) {
            image.pixels[pos.row as usize * grid.width() + pos.col as usize] = color;
        }
    }
    image
}

/// Display size of the canvas, keeping cells square
pub fn canvas_size(grid: &Grid, longest_side: f32) -> Vec2 {
    let (w, h) = (grid.width() as f32, grid.height() as f32);
    if w >= h {
        Vec2::new(longest_side, longest_side * h / w)
    } else {
        Vec2::new(longest_side * w / h, longest_side)
    }
}

impl PixelBuffer {
    /// Convert to an egui image, e.g. for an export preview texture
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied([self.width(), self.height()], self.as_rgba())
    }
}
