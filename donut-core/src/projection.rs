/// Canvas dimensions and perspective projection onto terminal cells
use nalgebra::Point3;

use crate::config::DonutConfig;
use crate::error::DonutError;

/// Fixed grid of terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub rows: usize,
    pub cols: usize,
}

impl Canvas {
    pub fn new(rows: usize, cols: usize) -> Result<Self, DonutError> {
        if rows == 0 || cols == 0 {
            return Err(DonutError::EmptyCanvas { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of cells, or `None` if it does not fit in memory addressing.
    pub fn cells(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

/// A view-space point mapped to a canvas cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub row: usize,
    pub col: usize,
    /// 1 / (viewer distance + z); larger is nearer
    pub inverse_depth: f32,
}

/// Perspective camera looking down +z at the origin from `viewer_distance`.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub canvas: Canvas,
    /// Distance from the viewer to the object-space origin (D2)
    pub viewer_distance: f32,
    /// Distance from the viewer to the screen (D1), sized so the torus fits
    pub screen_distance: f32,
}

impl Camera {
    pub fn new(canvas: Canvas, config: &DonutConfig) -> Self {
        let min_size = canvas.rows.min(canvas.cols) as f32;
        // Largest cell offset from the center the torus may reach
        let max_extent = (min_size / 2.0) * (1.0 - config.padding);
        let screen_distance =
            config.viewer_distance * max_extent / (config.tube_radius + config.center_distance);

        Self {
            canvas,
            viewer_distance: config.viewer_distance,
            screen_distance,
        }
    }

    /// Project a view-space point, or `None` if it lands off the canvas.
    ///
    /// Columns are stretched by two because terminal cells are about twice as
    /// tall as they are wide. Rows grow downward while y grows upward.
    pub fn project(&self, point: &Point3<f32>) -> Option<Projected> {
        let inverse_depth = 1.0 / (self.viewer_distance + point.z);
        let center_col = (self.canvas.cols / 2) as f32;
        let center_row = (self.canvas.rows / 2) as f32;

        let col = (self.screen_distance * 2.0 * point.x * inverse_depth + center_col).floor();
        let row = (self.screen_distance * -point.y * inverse_depth + center_row).floor();

        // Negative, NaN and overflowing values all fail these checks
        if !(col >= 0.0 && col < self.canvas.cols as f32) {
            return None;
        }
        if !(row >= 0.0 && row < self.canvas.rows as f32) {
            return None;
        }

        Some(Projected {
            row: row as usize,
            col: col as usize,
            inverse_depth,
        })
    }
}
