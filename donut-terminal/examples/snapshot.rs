/// Example: Render a single frame to stdout without taking over the terminal
///
/// Usage: cargo run --example snapshot > frame.txt

use donut_core::{Canvas, DonutConfig, RenderContext, RotationState};

fn main() -> anyhow::Result<()> {
    let canvas = Canvas::new(24, 80)?;
    let mut context = RenderContext::new(canvas, DonutConfig::default())?;

    // A tilted pose shows the hole better than the edge-on start
    context.set_rotation(RotationState::new(1.0, 0.5));
    print!("{}", context.draw_current().to_string_lines());

    Ok(())
}
