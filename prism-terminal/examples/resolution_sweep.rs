/// Example: Print triangle counts for every primitive across resolutions
///
/// Usage: cargo run --example resolution_sweep -- [max_param]
use anyhow::{Context, Result};
use prism_core::{PrimitiveKind, ShapeBuffers};

fn main() -> Result<()> {
    env_logger::init();

    let max_param: i32 = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("max_param must be an integer, got {arg:?}"))?,
        None => 12,
    };

    println!("{:>4} {:>4} | {:>9} {:>9} {:>9} {:>9}", "p1", "p2", "sphere", "cube", "cone", "cylinder");

    let mut buffers = ShapeBuffers::new(1, 3);
    for param1 in 1..=max_param {
        for param2 in [3, max_param.max(3)] {
            buffers.update(param1, param2);
            let counts: Vec<usize> = PrimitiveKind::ALL
                .iter()
                .map(|kind| buffers.get(*kind).triangle_count())
                .collect();
            println!(
                "{:>4} {:>4} | {:>9} {:>9} {:>9} {:>9}",
                param1, param2, counts[0], counts[1], counts[2], counts[3]
            );
        }
    }

    Ok(())
}
