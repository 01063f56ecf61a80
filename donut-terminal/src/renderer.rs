/// Serializes finished frames to the terminal
use crossterm::{
    cursor,
    style::Print,
    terminal::{Clear, ClearType},
    QueueableCommand,
};
use donut_core::FrameBuffer;
use std::io::{self, Write};

/// Writes a [`FrameBuffer`] as one clear + home + glyph stream per frame
pub struct AsciiRenderer {
    scratch: String,
}

impl AsciiRenderer {
    pub fn new() -> Self {
        Self {
            scratch: String::new(),
        }
    }

    /// Erase the screen, home the cursor, emit every cell row-major and flush.
    ///
    /// No separators are written between rows: the canvas is exactly as wide
    /// as the terminal, so rows wrap onto the next line on their own.
    pub fn draw<W: Write>(&mut self, writer: &mut W, frame: &FrameBuffer) -> io::Result<()> {
        self.scratch.clear();
        self.scratch.extend(frame.cells().iter());

        writer.queue(Clear(ClearType::All))?;
        writer.queue(cursor::MoveTo(0, 0))?;
        writer.queue(Print(&self.scratch))?;
        writer.flush()
    }
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use donut_core::{Canvas, DonutConfig, RenderContext};

    #[test]
    fn test_draw_clears_homes_then_writes_cells() {
        let canvas = Canvas::new(2, 3).unwrap();
        let frame = FrameBuffer::new(canvas, '.').unwrap();
        let mut out = Vec::new();
        AsciiRenderer::new().draw(&mut out, &frame).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "\x1b[2J\x1b[1;1H......");
    }

    #[test]
    fn test_draw_emits_every_cell_each_frame() {
        let canvas = Canvas::new(24, 80).unwrap();
        let config = DonutConfig::default().with_steps(100, 100);
        let mut context = RenderContext::new(canvas, config).unwrap();
        let mut renderer = AsciiRenderer::new();
        let mut out = Vec::new();

        renderer.draw(&mut out, context.render_frame()).unwrap();
        let first = out.len();
        renderer.draw(&mut out, context.render_frame()).unwrap();

        let prefix = "\x1b[2J\x1b[1;1H".len();
        assert_eq!(first, prefix + 24 * 80);
        assert_eq!(out.len(), 2 * first);
    }
}
