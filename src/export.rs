use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use log::{debug, info};

use crate::error::{ExportError, ExportResult};
use crate::grid::Grid;

/// RGBA8 pixels, row-major, initialised fully transparent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    rgba: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a transparent buffer. Fails for zero sizes, for sizes an
    /// image file cannot describe, and when the allocation itself fails.
    pub fn new(width: usize, height: usize) -> ExportResult<Self> {
        let invalid = || ExportError::InvalidResolution { width, height };
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        if u32::try_from(width).is_err() || u32::try_from(height).is_err() {
            return Err(invalid());
        }
        let len = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(invalid)?;

        let mut rgba = Vec::new();
        rgba.try_reserve_exact(len).map_err(|_| invalid())?;
        rgba.resize(len, 0);
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]])
    }

    /// Fill the half-open rectangle `[x0, x1) × [y0, y1)`
    fn fill_rect(&mut self, x0: usize, x1: usize, y0: usize, y1: usize, color: [u8; 4]) {
        for y in y0..y1.min(self.height) {
            let row = y * self.width;
            for x in x0..x1.min(self.width) {
                let i = (row + x) * 4;
                self.rgba[i..i + 4].copy_from_slice(&color);
            }
        }
    }

    pub fn to_rgba_image(&self) -> ExportResult<RgbaImage> {
        let size_error = || ExportError::BufferSize {
            width: self.width,
            height: self.height,
            len: self.rgba.len(),
        };
        let width = u32::try_from(self.width).map_err(|_| size_error())?;
        let height = u32::try_from(self.height).map_err(|_| size_error())?;
        RgbaImage::from_raw(width, height, self.rgba.clone()).ok_or_else(size_error)
    }

    /// Encode as a PNG file in memory
    pub fn encode_png(&self) -> ExportResult<Vec<u8>> {
        let image = self.to_rgba_image()?;
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, ImageFormat::Png)?;
        Ok(bytes.into_inner())
    }
}

/// Pixel offsets of the cell boundaries along one axis.
///
/// `edges[i] = round(i * pixels / cells)` for `i` in `0..=cells`, so
/// consecutive edges tile `[0, pixels)` exactly even when `pixels` is not a
/// multiple of `cells`.
pub fn cell_edges(cells: usize, pixels: usize) -> Vec<usize> {
    if cells == 0 {
        return vec![0];
    }
    (0..=cells).map(|i| scale_rounded(pixels, i, cells)).collect()
}

/// `round(value * numerator / denominator)` with halves rounded up, computed
/// without overflow. Callers keep `numerator <= denominator`, so the result
/// never exceeds `value`.
fn scale_rounded(value: usize, numerator: usize, denominator: usize) -> usize {
    let denominator = denominator as u128;
    let scaled = value as u128 * numerator as u128;
    let (quotient, remainder) = (scaled / denominator, scaled % denominator);
    let rounded = quotient + u128::from(2 * remainder >= denominator);
    usize::try_from(rounded).unwrap_or(value)
}

/// Render the grid into an `out_width`×`out_height` buffer.
///
/// Painted cells fill their pixel rectangle with their color; transparent
/// cells leave theirs untouched.
pub fn rasterize(grid: &Grid, out_width: usize, out_height: usize) -> ExportResult<PixelBuffer> {
    let mut buffer = PixelBuffer::new(out_width, out_height)?;
    let edges_x = cell_edges(grid.width(), out_width);
    let edges_y = cell_edges(grid.height(), out_height);

    for (row, cells) in grid.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let Some(color) = cell.color() else {
                continue;
            };
            let [r, g, b] = color.rgb();
            buffer.fill_rect(
                edges_x[col],
                edges_x[col + 1],
                edges_y[row],
                edges_y[row + 1],
                [r, g, b, 0xff],
            );
        }
    }

    debug!(
        "Rasterized {}x{} grid to {}x{} pixels",
        grid.width(),
        grid.height(),
        out_width,
        out_height
    );
    Ok(buffer)
}

/// Output size for an export at `resolution`, matching the grid's aspect
/// ratio. The longer side gets `resolution` pixels.
pub fn export_size(grid_width: usize, grid_height: usize, resolution: usize) -> (usize, usize) {
    if grid_width > grid_height {
        (resolution, scale_rounded(resolution, grid_height, grid_width))
    } else if grid_height > grid_width {
        (scale_rounded(resolution, grid_width, grid_height), resolution)
    } else {
        (resolution, resolution)
    }
}

/// Download name for an exported image
pub fn export_file_name(grid: &Grid, out_width: usize, out_height: usize) -> String {
    format!(
        "pixel-art-{}x{}-{}x{}.png",
        grid.width(),
        grid.height(),
        out_width,
        out_height
    )
}

/// A finished export ready to hand to the host for download
#[derive(Debug, Clone)]
pub struct ExportedImage {
    pub file_name: String,
    pub width: usize,
    pub height: usize,
    pub png: Vec<u8>,
}

/// Rasterize `grid` at `resolution` and encode it as PNG
pub fn export_png(grid: &Grid, resolution: usize) -> ExportResult<ExportedImage> {
    let (width, height) = export_size(grid.width(), grid.height(), resolution);
    let buffer = rasterize(grid, width, height)?;
    let png = buffer.encode_png()?;
    let file_name = export_file_name(grid, width, height);
    info!("Exported {} ({} bytes)", file_name, png.len());
    Ok(ExportedImage {
        file_name,
        width,
        height,
        png,
    })
}
