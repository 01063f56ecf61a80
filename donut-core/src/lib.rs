/// Donut Core Library - software pipeline for the spinning ASCII torus
///
/// Samples a parametric torus, rotates it into view space, projects it onto a
/// grid of terminal cells with a depth buffer and shades each cell with a glyph.
/// No I/O happens here; presenting frames is left to the caller.

pub mod config;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod projection;
pub mod raster;
pub mod shading;
pub mod transform;

// Re-export commonly used types
pub use config::DonutConfig;
pub use error::DonutError;
pub use geometry::{SurfaceSample, Torus};
pub use pipeline::RenderContext;
pub use projection::{Camera, Canvas, Projected};
pub use raster::{DepthBuffer, FrameBuffer};
pub use shading::Shader;
pub use transform::RotationState;
