/// Frame and depth buffers with nearest-wins plotting
use crate::error::DonutError;
use crate::projection::{Canvas, Projected};

/// Row-major glyph grid, one char per canvas cell
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    canvas: Canvas,
    cells: Vec<char>,
}

/// Row-major inverse depths parallel to a [`FrameBuffer`]; 0 means nothing drawn
#[derive(Debug, Clone)]
pub struct DepthBuffer {
    cells: Vec<f32>,
}

fn allocate<T: Clone>(canvas: Canvas, fill: T) -> Result<Vec<T>, DonutError> {
    let cells = canvas.cells().ok_or(DonutError::Allocation { cells: usize::MAX })?;
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(cells)
        .map_err(|_| DonutError::Allocation { cells })?;
    buffer.resize(cells, fill);
    Ok(buffer)
}

impl FrameBuffer {
    pub fn new(canvas: Canvas, blank: char) -> Result<Self, DonutError> {
        Ok(Self {
            canvas,
            cells: allocate(canvas, blank)?,
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn clear(&mut self, blank: char) {
        self.cells.fill(blank);
    }

    pub fn get(&self, row: usize, col: usize) -> char {
        self.cells[self.canvas.index(row, col)]
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.canvas.cols)
    }

    /// The frame as text, one line per row.
    pub fn to_string_lines(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.canvas.rows);
        for row in self.rows() {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

impl DepthBuffer {
    pub fn new(canvas: Canvas) -> Result<Self, DonutError> {
        Ok(Self {
            cells: allocate(canvas, 0.0)?,
        })
    }

    pub fn clear(&mut self) {
        self.cells.fill(0.0);
    }

    pub fn cells(&self) -> &[f32] {
        &self.cells
    }
}

/// Write `glyph` at the projected cell if it is nearer than anything drawn there.
///
/// Returns whether the cell was overwritten. Cells outside the canvas are ignored.
pub fn plot(
    frame: &mut FrameBuffer,
    depth: &mut DepthBuffer,
    projected: &Projected,
    glyph: impl FnOnce() -> char,
) -> bool {
    let canvas = frame.canvas;
    if projected.row >= canvas.rows || projected.col >= canvas.cols {
        return false;
    }
    let idx = canvas.index(projected.row, projected.col);
    if projected.inverse_depth > depth.cells[idx] {
        depth.cells[idx] = projected.inverse_depth;
        frame.cells[idx] = glyph();
        true
    } else {
        false
    }
}
