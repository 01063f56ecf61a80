/// Terminal front end for the spinning ASCII torus
use crossterm::terminal;
use donut_core::{Canvas, DonutConfig, DonutError, RenderContext};
use log::{debug, info};
use std::io::{self, Write};

pub mod renderer;
pub mod session;

pub use renderer::AsciiRenderer;
pub use session::{Interrupt, TerminalSession};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to query terminal size: {0}")]
    CanvasUnavailable(#[source] io::Error),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Render(#[from] DonutError),
}

/// Owns the render context and drives it frame by frame until interrupted
pub struct TerminalApp {
    context: RenderContext,
    renderer: AsciiRenderer,
}

impl TerminalApp {
    /// Size the canvas to the current terminal and allocate the buffers.
    pub fn new(config: DonutConfig) -> Result<Self, AppError> {
        let (cols, rows) = terminal::size().map_err(AppError::CanvasUnavailable)?;
        let canvas = Canvas::new(rows as usize, cols as usize)?;
        Self::with_canvas(canvas, config)
    }

    pub fn with_canvas(canvas: Canvas, config: DonutConfig) -> Result<Self, AppError> {
        let context = RenderContext::new(canvas, config)?;
        debug!(
            "Canvas {}x{}, screen distance {:.2}",
            canvas.rows,
            canvas.cols,
            context.camera().screen_distance
        );

        Ok(Self {
            context,
            renderer: AsciiRenderer::new(),
        })
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Take over the terminal and render until Ctrl+C, SIGINT or SIGTERM.
    pub fn run(&mut self) -> Result<(), AppError> {
        let mut session = TerminalSession::enter(Interrupt::register()?)?;
        let interrupt = session.interrupt().clone();
        let result = self.main_loop(session.writer(), || interrupt.requested());

        // Cleanup
        drop(session);
        info!("Stopped after {} frames", self.context.frame_count());

        result
    }

    /// Present frames until `interrupted` reports a stop request.
    ///
    /// The request is checked before each frame, so no frame is started
    /// once it has been seen.
    pub fn main_loop<W, F>(&mut self, writer: &mut W, mut interrupted: F) -> Result<(), AppError>
    where
        W: Write,
        F: FnMut() -> io::Result<bool>,
    {
        let frame_delay = self.context.config().frame_delay;

        loop {
            if interrupted()? {
                return Ok(());
            }
            self.step(writer)?;
            std::thread::sleep(frame_delay);
        }
    }

    /// Render one frame and present it.
    pub fn step<W: Write>(&mut self, writer: &mut W) -> Result<(), AppError> {
        let frame = self.context.render_frame();
        self.renderer.draw(writer, frame)?;
        Ok(())
    }
}
