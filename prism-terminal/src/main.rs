/// Prism Terminal Demo - Primitive Scene
///
/// Renders the built-in demo scene with the terminal-based ASCII rasterizer.
/// Usage: prism-terminal [param1] [param2]
/// Controls:
///   - WASD / Arrow Keys: Rotate the scene
///   - +/-: Change param1 (bands / face grid)
///   - [/]: Change param2 (wedges)
///   - Q/ESC: Quit
use anyhow::{Context, Result};
use prism_core::{Scene, Settings};
use prism_terminal::{demo, TerminalApp};

fn parse_param(arg: Option<String>, name: &str, default: i32) -> Result<i32> {
    match arg {
        Some(value) => value
            .parse()
            .with_context(|| format!("{name} must be an integer, got {value:?}")),
        None => Ok(default),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let defaults = Settings::default();
    let mut args = std::env::args().skip(1);
    let param1 = parse_param(args.next(), "param1", defaults.shape_parameter_1)?;
    let param2 = parse_param(args.next(), "param2", defaults.shape_parameter_2)?;

    let settings = defaults.with_shape_parameters(param1, param2);
    let scene = Scene::load(&demo::demo_scene(), settings).context("failed to load demo scene")?;

    println!("Prism Terminal Renderer - starting (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(scene).context("failed to query terminal size")?;
    app.run().context("terminal renderer failed")?;

    println!("Thank you for using Prism Terminal Renderer!");
    Ok(())
}
