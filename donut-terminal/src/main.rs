/// Spinning ASCII donut
///
/// Renders a rotating, shaded torus in the current terminal until Ctrl+C.
/// Set `RUST_LOG=debug` to see startup details on stderr.

use anyhow::Context;
use donut_core::DonutConfig;
use donut_terminal::TerminalApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut app = TerminalApp::new(DonutConfig::default()).context("Failed to start renderer")?;
    app.run()?;

    Ok(())
}
