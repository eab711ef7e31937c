//! Terminal pathfinding demo.
//!
//! Run: cargo run --bin gridpath -- [seed]
//! Set `RUST_LOG=debug` to see search statistics.

use waygrid_core::Point;
use waygrid_demos::{HEIGHT, WIDTH, render, terrain};
use waygrid_paths::{GridConfig, PathError, Strategy, simplify};

fn main() {
    env_logger::init();

    let seed = match std::env::args().nth(1).map(|s| s.parse::<u64>()) {
        None => 42,
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("Error: invalid seed: {e}");
            std::process::exit(2);
        }
    };

    let from = Point::new(0, 0);
    let to = Point::new(WIDTH - 1, HEIGHT - 1);

    for strategy in [Strategy::AvoidSteps, Strategy::IgnoreSteps] {
        let config = GridConfig::new(WIDTH, HEIGHT)
            .with_diagonal(true)
            .with_strategy(strategy);
        let grid = terrain(config, seed);
        log::info!("{strategy:?}: searching {from} -> {to} on {}", grid.range());

        println!("{strategy:?} (seed {seed})");
        match grid.try_find(from, to) {
            Ok(path) => {
                let points = grid.points(&path);
                print!("{}", render(&grid, &points));
                let stats = path.stats();
                println!(
                    "{} steps, cost {}, {} way points, {} nodes expanded",
                    points.len().saturating_sub(1),
                    path.cost(),
                    simplify(&points).len(),
                    stats.expanded
                );
            }
            Err(PathError::Unreachable) => {
                print!("{}", render(&grid, &[]));
                println!("no path from {from} to {to}");
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        println!();
    }
}
