/// Errors raised while setting up the render pipeline

#[derive(Debug, thiserror::Error)]
pub enum DonutError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Canvas must have at least one cell, got {rows}x{cols}")]
    EmptyCanvas { rows: usize, cols: usize },

    #[error("Failed to allocate buffers for {cells} cells")]
    Allocation { cells: usize },
}
