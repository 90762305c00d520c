use std::collections::HashSet;
use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::grid::{CellPos, Grid};

/// Hollow shapes the shape tool can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Square,
    Circle,
    Rhombus,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::Rhombus,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Rhombus => "rhombus",
        }
    }

    /// Kinds drawn inside a forced square bounding box
    fn is_equilateral(&self) -> bool {
        !matches!(self, Self::Rectangle)
    }
}

/// Inclusive cell bounds of a dragged shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    top: i32,
    left: i32,
    bottom: i32,
    right: i32,
}

impl Bounds {
    fn from_drag(grid: &Grid, start: CellPos, end: CellPos, kind: ShapeKind) -> Self {
        let max_row = grid.height() as i32 - 1;
        let max_col = grid.width() as i32 - 1;
        let start = CellPos::new(start.row.clamp(0, max_row), start.col.clamp(0, max_col));
        let end = CellPos::new(end.row.clamp(0, max_row), end.col.clamp(0, max_col));

        let mut bounds = Self {
            top: start.row.min(end.row),
            left: start.col.min(end.col),
            bottom: start.row.max(end.row),
            right: start.col.max(end.col),
        };

        if kind.is_equilateral() {
            let size = (bounds.bottom - bounds.top).max(bounds.right - bounds.left);
            bounds.bottom = bounds.top + size;
            bounds.right = bounds.left + size;
            // Slide the anchor back rather than overflow the far edge
            if bounds.bottom > max_row {
                bounds.bottom = max_row;
                bounds.top = (max_row - size).max(0);
            }
            if bounds.right > max_col {
                bounds.right = max_col;
                bounds.left = (max_col - size).max(0);
            }
        }
        bounds
    }

    fn border(&self) -> Vec<CellPos> {
        let mut cells = Vec::new();
        for col in self.left..=self.right {
            cells.push(CellPos::new(self.top, col));
            if self.bottom != self.top {
                cells.push(CellPos::new(self.bottom, col));
            }
        }
        for row in self.top + 1..self.bottom {
            cells.push(CellPos::new(row, self.left));
            if self.right != self.left {
                cells.push(CellPos::new(row, self.right));
            }
        }
        cells
    }

    fn ellipse_samples(&self) -> Vec<CellPos> {
        let center_row = round_half_up(f64::from(self.top + self.bottom) / 2.0);
        let center_col = round_half_up(f64::from(self.left + self.right) / 2.0);
        let radius = f64::from((self.bottom - self.top).abs()) / 2.0;
        let steps = round_half_up(TAU * radius).max(12);

        (0..steps)
            .map(|step| {
                let theta = TAU * f64::from(step) / f64::from(steps);
                CellPos::new(
                    round_half_up(f64::from(center_row) + radius * theta.sin()),
                    round_half_up(f64::from(center_col) + radius * theta.cos()),
                )
            })
            .collect()
    }

    fn diamond(&self) -> Vec<CellPos> {
        let mid_row = (self.top + self.bottom).div_euclid(2);
        let mid_col = (self.left + self.right).div_euclid(2);
        let top = CellPos::new(self.top, mid_col);
        let right = CellPos::new(mid_row, self.right);
        let bottom = CellPos::new(self.bottom, mid_col);
        let left = CellPos::new(mid_row, self.left);

        [(top, right), (right, bottom), (bottom, left), (left, top)]
            .into_iter()
            .flat_map(|(from, to)| line(from, to))
            .collect()
    }
}

/// Rounds halves towards positive infinity
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Boundary cells of the shape dragged from `start` to `end`.
///
/// Endpoints are clamped to the grid first. Square, circle and rhombus use a
/// square box anchored at the top-left corner of the drag. The result is
/// deduplicated, in bounds and deterministic.
pub fn outline(grid: &Grid, start: CellPos, end: CellPos, kind: ShapeKind) -> Vec<CellPos> {
    let bounds = Bounds::from_drag(grid, start, end, kind);
    let cells = match kind {
        ShapeKind::Rectangle | ShapeKind::Square => bounds.border(),
        ShapeKind::Circle => bounds.ellipse_samples(),
        ShapeKind::Rhombus => bounds.diamond(),
    };

    let mut seen = HashSet::with_capacity(cells.len());
    cells
        .into_iter()
        .filter(|pos| grid.contains(*pos) && seen.insert(*pos))
        .collect()
}

/// Bresenham line between two cells, both endpoints included
pub fn line(from: CellPos, to: CellPos) -> Vec<CellPos> {
    let (mut col, mut row) = (from.col, from.row);
    let dx = (to.col - from.col).abs();
    let dy = (to.row - from.row).abs();
    let sx = if from.col < to.col { 1 } else { -1 };
    let sy = if from.row < to.row { 1 } else { -1 };
    let mut err = dx - dy;

    let mut cells = Vec::with_capacity((dx.max(dy) + 1) as usize);
    loop {
        cells.push(CellPos::new(row, col));
        if col == to.col && row == to.row {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            col += sx;
        }
        if e2 < dx {
            err += dx;
            row += sy;
        }
    }
    cells
}
