//! Shared code for the waygrid demos: a seeded terrain generator and a text
//! renderer for grids with a path drawn over them.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use waygrid_core::Point;
use waygrid_paths::{GridConfig, GridGraph};

pub const WIDTH: i32 = 60;
pub const HEIGHT: i32 = 20;

/// Build a terrain grid: scattered walls and a few rectangular plateaus of
/// raised ground. The corners stay walkable.
pub fn terrain(config: GridConfig, seed: u64) -> GridGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = GridGraph::new(config);
    let rng_area = grid.range();

    for _ in 0..6 {
        let x0 = rng.random_range(0..rng_area.width());
        let y0 = rng.random_range(0..rng_area.height());
        let w = rng.random_range(3..12);
        let h = rng.random_range(2..6);
        let height = rng.random_range(1..10);
        for y in y0..(y0 + h) {
            for x in x0..(x0 + w) {
                grid.set_value(Point::new(x, y), height);
            }
        }
    }

    let walls = rng_area.len() / 6;
    for _ in 0..walls {
        let p = Point::new(
            rng.random_range(0..rng_area.width()),
            rng.random_range(0..rng_area.height()),
        );
        grid.set_value(p, -1);
    }

    grid.set_value(rng_area.min, 0);
    grid.set_value(rng_area.max.shift(-1, -1), 0);
    grid
}

/// Render `grid` as text: `#` for walls, `.` for flat ground, `1`-`9` for
/// heights and `*` for cells on `path`.
pub fn render(grid: &GridGraph, path: &[Point]) -> String {
    let mut out = String::with_capacity(grid.len() + grid.height() as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let ch = if path.contains(&p) {
                '*'
            } else {
                match grid.value(p) {
                    v if v < 0 => '#',
                    0 => '.',
                    v => char::from_digit(v.min(9) as u32, 10).unwrap_or('9'),
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
