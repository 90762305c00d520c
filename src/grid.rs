use std::sync::Arc;

use crate::color::Cell;
use crate::config::SizeLimits;
use crate::error::{GridError, GridResult};

/// A cell coordinate as produced by gesture math.
///
/// Coordinates are signed because pointer positions routinely land outside
/// the grid while dragging; writers drop such cells instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub row: i32,
    pub col: i32,
}

impl CellPos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Saturates at the `i32` range; such positions are off any grid anyway
    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }
}

impl From<(i32, i32)> for CellPos {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Row-major buffer of cells.
///
/// Storage is shared between clones and copied on first write, so keeping a
/// `Grid` as a history snapshot costs one reference count until either side
/// is edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Arc<Vec<Cell>>,
}

impl Grid {
    /// Create a fully transparent grid within the default size limits
    pub fn new(width: usize, height: usize) -> GridResult<Self> {
        Self::with_limits(width, height, &SizeLimits::default())
    }

    /// Create a fully transparent grid, rejecting dimensions outside `limits`
    pub fn with_limits(width: usize, height: usize, limits: &SizeLimits) -> GridResult<Self> {
        if width == 0 || height == 0 || !limits.contains(width) || !limits.contains(height) {
            return Err(GridError::InvalidDimension {
                width,
                height,
                min: limits.min,
                max: limits.max,
            });
        }
        Ok(Self::blank(width, height))
    }

    fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: Arc::new(vec![Cell::Transparent; width * height]),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        self.index_of(pos).is_some()
    }

    fn index_of(&self, pos: CellPos) -> Option<usize> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    pub fn get(&self, row: usize, col: usize) -> GridResult<Cell> {
        if row >= self.height || col >= self.width {
            return Err(GridError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cells[row * self.width + col])
    }

    /// Lenient lookup; `None` outside the grid
    pub fn cell_at(&self, pos: CellPos) -> Option<Cell> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// Write one cell in place. Returns whether the value changed; out of
    /// bounds writes are ignored.
    pub fn set(&mut self, pos: CellPos, cell: Cell) -> bool {
        let Some(index) = self.index_of(pos) else {
            return false;
        };
        if self.cells[index] == cell {
            return false;
        }
        Arc::make_mut(&mut self.cells)[index] = cell;
        true
    }

    /// A copy of this grid with the given cells replaced
    pub fn set_many(&self, cells: impl IntoIterator<Item = (CellPos, Cell)>) -> Grid {
        let mut next = self.clone();
        for (pos, cell) in cells {
            next.set(pos, cell);
        }
        next
    }

    /// A grid of the clamped size with top-left content preserved
    pub fn resize(&self, width: usize, height: usize, limits: &SizeLimits) -> Grid {
        let width = limits.clamp(width);
        let height = limits.clamp(height);
        if width == self.width && height == self.height {
            return self.clone();
        }

        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                let cell = if row < self.height && col < self.width {
                    self.cells[row * self.width + col]
                } else {
                    Cell::Transparent
                };
                cells.push(cell);
            }
        }

        Self {
            width,
            height,
            cells: Arc::new(cells),
        }
    }

    /// Same dimensions, every cell transparent
    pub fn clear(&self) -> Grid {
        Self::blank(self.width, self.height)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_transparent)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Cell-by-cell comparison; grids of different shape always differ
    pub fn differs_from(&self, other: &Grid) -> bool {
        if Arc::ptr_eq(&self.cells, &other.cells) {
            return false;
        }
        self != other
    }

    /// Positions whose values differ between two grids of the same shape
    pub fn changed_cells(&self, other: &Grid) -> Vec<CellPos> {
        if self.width != other.width || self.height != other.height {
            return Vec::new();
        }
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| CellPos::new((i / self.width) as i32, (i % self.width) as i32))
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::blank(16, 16)
    }
}
