/// Per-frame render context: rotation, buffers and the stages that fill them
use crate::config::DonutConfig;
use crate::error::DonutError;
use crate::geometry::{SurfaceSample, Torus};
use crate::projection::{Camera, Canvas};
use crate::raster::{plot, DepthBuffer, FrameBuffer};
use crate::shading::Shader;
use crate::transform::RotationState;

/// Everything the render loop owns between frames.
pub struct RenderContext {
    config: DonutConfig,
    torus: Torus,
    camera: Camera,
    shader: Shader,
    rotation: RotationState,
    frame: FrameBuffer,
    depth: DepthBuffer,
    frame_count: u64,
}

impl RenderContext {
    pub fn new(canvas: Canvas, config: DonutConfig) -> Result<Self, DonutError> {
        config.validate()?;
        let frame = FrameBuffer::new(canvas, config.blank)?;
        let depth = DepthBuffer::new(canvas)?;

        Ok(Self {
            torus: Torus::from_config(&config),
            camera: Camera::new(canvas, &config),
            shader: Shader::from_config(&config)?,
            rotation: RotationState::zero(),
            frame,
            depth,
            frame_count: 0,
            config,
        })
    }

    pub fn config(&self) -> &DonutConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: RotationState) {
        self.rotation = rotation;
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Reset buffers, step the rotation, then sweep and rasterize the torus.
    pub fn render_frame(&mut self) -> &FrameBuffer {
        self.rotation.advance(self.config.x_step, self.config.z_step);
        self.draw_current();
        self.frame_count += 1;
        &self.frame
    }

    /// Rasterize the torus at the current rotation without advancing it.
    pub fn draw_current(&mut self) -> &FrameBuffer {
        self.clear();
        let sweep = self.torus.sweep(
            &self.rotation,
            self.config.circle_steps,
            self.config.torus_steps,
        );
        for sample in sweep {
            self.rasterize(&sample);
        }
        &self.frame
    }

    pub fn clear(&mut self) {
        self.frame.clear(self.config.blank);
        self.depth.clear();
    }

    /// Project, depth-test and shade a single view-space sample.
    pub fn rasterize(&mut self, sample: &SurfaceSample) -> bool {
        let Some(projected) = self.camera.project(&sample.position) else {
            return false;
        };
        let shader = &self.shader;
        plot(&mut self.frame, &mut self.depth, &projected, || {
            shader.glyph(&sample.normal)
        })
    }
}
