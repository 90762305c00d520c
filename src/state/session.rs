use std::mem;

use log::{debug, info, warn};
use uuid::Uuid;

use super::gesture::{DragSession, GestureEnd, GestureState, ShapeGesture};
use crate::color::{Cell, Color};
use crate::command::{Command, CommandError, CommandResult, EditKind, History};
use crate::config::EditorConfig;
use crate::error::ExportResult;
use crate::export::{self, ExportedImage, PixelBuffer};
use crate::grid::{CellPos, Grid};
use crate::input::{InputEvent, shortcut_command};
use crate::palette::Palette;
use crate::renderer::{self, Preview};
use crate::tools::{self, ShapeKind, ToolType, brush};

/// One editing session: the grid, its history and every piece of tool state
/// the UI would otherwise keep globally.
#[derive(Debug)]
pub struct EditorSession {
    id: Uuid,
    config: EditorConfig,
    grid: Grid,
    history: History,
    palette: Palette,
    color: Color,
    tool: ToolType,
    brush_size: usize,
    shape_kind: ShapeKind,
    export_resolution: usize,
    gesture: GestureState,
    /// Pan mode held with the space bar
    temporary_pan: bool,
}

impl EditorSession {
    /// Start a session; the configuration is validated first
    pub fn new(config: EditorConfig) -> CommandResult<Self> {
        config.validate()?;
        let grid = Grid::with_limits(
            config.default_width,
            config.default_height,
            &config.size_limits,
        )?;
        let mut palette = Palette::from_colors(config.palette.iter().copied());
        palette.add(config.default_color);
        let id = Uuid::new_v4();
        info!(
            "Session {} started with a {}x{} grid",
            id,
            grid.width(),
            grid.height()
        );

        Ok(Self {
            id,
            grid,
            history: History::new(),
            palette,
            color: config.default_color,
            tool: ToolType::default(),
            brush_size: config.default_brush_size,
            shape_kind: ShapeKind::default(),
            export_resolution: config.export.default_resolution,
            gesture: GestureState::Idle,
            temporary_pan: false,
            config,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn selected_color(&self) -> Color {
        self.color
    }

    pub fn tool(&self) -> ToolType {
        self.tool
    }

    pub fn brush_size(&self) -> usize {
        self.brush_size
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.shape_kind
    }

    pub fn export_resolution(&self) -> usize {
        self.export_resolution
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Whether pointer input currently pans instead of editing
    pub fn is_panning(&self) -> bool {
        self.temporary_pan || !self.tool.edits_cells()
    }

    pub fn undo_count(&self) -> usize {
        self.history.undo_count()
    }

    pub fn redo_count(&self) -> usize {
        self.history.redo_count()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ---------------------------------------------------------------------
    // Settings

    pub fn execute(&mut self, command: Command) -> CommandResult {
        debug!("Session {}: {:?}", self.id, command);
        command.execute(self)
    }

    /// Switch tools, finishing any gesture started with the previous one
    pub fn select_tool(&mut self, tool: ToolType) {
        if tool != self.tool {
            self.end_gesture(GestureEnd::Release);
            self.tool = tool;
        }
    }

    pub fn select_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Append `color` to the palette unless present, then select it
    pub fn add_custom_color(&mut self, color: Color) {
        if self.palette.add(color) {
            debug!("Added {} to the palette", color);
        }
        self.color = color;
    }

    pub fn set_brush_size(&mut self, size: usize) -> CommandResult {
        if !self.config.brush_sizes.contains(&size) {
            warn!("Rejected brush size {size}, allowed {:?}", self.config.brush_sizes);
            return Err(CommandError::UnsupportedBrushSize(size));
        }
        self.brush_size = size;
        Ok(())
    }

    pub fn set_shape_kind(&mut self, kind: ShapeKind) {
        self.shape_kind = kind;
    }

    /// Set the export resolution, clamped and snapped to the configured steps
    pub fn set_export_resolution(&mut self, resolution: usize) -> usize {
        self.export_resolution = self.config.export.clamp_resolution(resolution);
        self.export_resolution
    }

    // ---------------------------------------------------------------------
    // Whole-grid edits

    /// Resize with top-left preservation. History is discarded since old
    /// snapshots no longer match the grid's shape.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.end_gesture(GestureEnd::Release);
        let resized = self.grid.resize(width, height, &self.config.size_limits);
        info!(
            "Session {}: resized grid {}x{} -> {}x{}",
            self.id,
            self.grid.width(),
            self.grid.height(),
            resized.width(),
            resized.height()
        );
        self.grid = resized;
        self.history.reset();
    }

    /// Reset every cell to transparent as one undoable step
    pub fn clear(&mut self) -> bool {
        self.end_gesture(GestureEnd::Release);
        let cleared = self.grid.clear();
        let changed = self.history.commit(&mut self.grid, cleared, EditKind::Clear);
        if changed {
            info!("Session {}: cleared grid", self.id);
        }
        changed
    }

    pub fn undo(&mut self) -> bool {
        self.end_gesture(GestureEnd::Release);
        self.history.undo(&mut self.grid)
    }

    pub fn redo(&mut self) -> bool {
        self.end_gesture(GestureEnd::Release);
        self.history.redo(&mut self.grid)
    }

    // ---------------------------------------------------------------------
    // Single-shot edits

    fn paint_cell(&self) -> Cell {
        Cell::Painted(self.color)
    }

    /// Stamp the brush once and commit it as its own step
    pub fn brush_tap(&mut self, center: CellPos, erase: bool) -> bool {
        let (cell, kind) = if erase {
            (Cell::Transparent, EditKind::Erase)
        } else {
            (self.paint_cell(), EditKind::Brush)
        };
        let (next, changed) = tools::apply_brush(&self.grid, center, self.brush_size, cell);
        changed && self.history.commit(&mut self.grid, next, kind)
    }

    /// Flood fill from `seed` with the selected color
    pub fn fill_at(&mut self, seed: CellPos) -> bool {
        let (next, changed) = tools::flood_fill(&self.grid, seed, self.paint_cell());
        if !changed {
            return false;
        }
        debug!("Session {}: fill from {:?}", self.id, seed);
        self.history.commit(&mut self.grid, next, EditKind::Fill)
    }

    /// Cells the shape tool would draw for a drag from `start` to `end`
    pub fn shape_outline(&self, start: CellPos, end: CellPos, kind: ShapeKind) -> Vec<CellPos> {
        tools::outline(&self.grid, start, end, kind)
    }

    /// Write a shape outline in the selected color as one step
    pub fn commit_shape(&mut self, start: CellPos, end: CellPos, kind: ShapeKind) -> bool {
        let cell = self.paint_cell();
        let cells = self.shape_outline(start, end, kind);
        let next = self.grid.set_many(cells.into_iter().map(|pos| (pos, cell)));
        self.history.commit(&mut self.grid, next, EditKind::Shape(kind))
    }

    // ---------------------------------------------------------------------
    // Gestures

    /// Route one input event. Returns whether the grid changed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { cell, button } => {
                button == egui::PointerButton::Primary && self.pointer_down(cell)
            }
            InputEvent::PointerMove { cell } => self.pointer_move(cell),
            InputEvent::PointerUp { .. } | InputEvent::GlobalPointerRelease => {
                self.end_gesture(GestureEnd::Release)
            }
            InputEvent::PointerLeave => self.end_gesture(GestureEnd::Leave),
            InputEvent::KeyDown { key, modifiers } => {
                if key == egui::Key::Space {
                    self.temporary_pan = true;
                    return false;
                }
                match shortcut_command(key, modifiers) {
                    Some(Command::Undo) => self.undo(),
                    Some(Command::Redo) => self.redo(),
                    _ => false,
                }
            }
            InputEvent::KeyUp { key, .. } => {
                if key == egui::Key::Space {
                    self.temporary_pan = false;
                }
                false
            }
        }
    }

    /// Begin a gesture on `cell` with the current tool
    pub fn pointer_down(&mut self, cell: CellPos) -> bool {
        if self.is_panning() {
            return false;
        }
        // A missed release must not leak into the next gesture
        self.end_gesture(GestureEnd::Release);

        match self.tool {
            ToolType::Pen | ToolType::Eraser => {
                let (stamp, kind) = if self.tool == ToolType::Eraser {
                    (Cell::Transparent, EditKind::Erase)
                } else {
                    (self.paint_cell(), EditKind::Brush)
                };
                let start_grid = self.grid.clone();
                let changed = brush::stamp(&mut self.grid, cell, self.brush_size, stamp);
                self.gesture = GestureState::Brushing(DragSession { start_grid, kind });
                changed
            }
            ToolType::Fill => self.fill_at(cell),
            ToolType::Shape => {
                self.gesture = GestureState::Shaping(ShapeGesture {
                    start: cell,
                    end: cell,
                    kind: self.shape_kind,
                });
                false
            }
            ToolType::Pan => false,
        }
    }

    /// Continue the current gesture onto `cell`. While panning, moves are
    /// ignored but the gesture stays open so its release still commits.
    pub fn pointer_move(&mut self, cell: CellPos) -> bool {
        if self.is_panning() {
            return false;
        }
        match &mut self.gesture {
            GestureState::Brushing(drag) => {
                let stamp = match drag.kind {
                    EditKind::Erase => Cell::Transparent,
                    _ => Cell::Painted(self.color),
                };
                brush::stamp(&mut self.grid, cell, self.brush_size, stamp)
            }
            GestureState::Shaping(shape) => {
                shape.end = cell;
                false
            }
            GestureState::Idle => false,
        }
    }

    /// Finish the active gesture.
    ///
    /// A brush drag is committed as a single step if it changed anything. A
    /// shape is committed on release and dropped when the pointer leaves the
    /// canvas. Returns whether a history step was recorded.
    pub fn end_gesture(&mut self, end: GestureEnd) -> bool {
        match mem::take(&mut self.gesture) {
            GestureState::Idle => false,
            GestureState::Brushing(DragSession { start_grid, kind }) => {
                let end_grid = self.grid.clone();
                let committed = self
                    .history
                    .commit_group(&mut self.grid, start_grid, end_grid, kind);
                debug!(
                    "Session {}: {} drag ended ({:?}), committed: {}",
                    self.id,
                    kind.description(),
                    end,
                    committed
                );
                committed
            }
            GestureState::Shaping(shape) => match end {
                GestureEnd::Release => self.commit_shape(shape.start, shape.end, shape.kind),
                GestureEnd::Leave => {
                    debug!("Session {}: {} cancelled", self.id, shape.kind.name());
                    false
                }
            },
        }
    }

    /// Cells of the shape currently being dragged, empty otherwise
    pub fn preview_cells(&self) -> Vec<CellPos> {
        match self.gesture.shape() {
            Some(shape) => self.shape_outline(shape.start, shape.end, shape.kind),
            None => Vec::new(),
        }
    }

    /// Current grid with any live shape preview, one pixel per cell
    pub fn render(&self) -> egui::ColorImage {
        let preview = self.preview_cells();
        let overlay = (!preview.is_empty()).then(|| Preview {
            cells: &preview,
            cell: self.paint_cell(),
        });
        renderer::grid_image(&self.grid, overlay)
    }

    // ---------------------------------------------------------------------
    // Export

    /// Rasterize the committed grid at an explicit output size
    pub fn rasterize(&self, out_width: usize, out_height: usize) -> ExportResult<PixelBuffer> {
        export::rasterize(&self.grid, out_width, out_height)
    }

    /// Encode the grid at the session's export resolution
    pub fn export_png(&self) -> ExportResult<ExportedImage> {
        export::export_png(&self.grid, self.export_resolution)
    }
}
