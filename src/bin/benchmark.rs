//! Tick throughput benchmark on randomly filled grids

use std::time::Instant;

use falling_sand::{CellType, Simulation};
use rand::Rng;

/// Fill roughly 40% sand, 25% water and 5% stone
fn random_fill(sim: &mut Simulation, rng: &mut impl Rng) {
    let (w, h) = (sim.width() as i32, sim.height() as i32);
    for y in 0..h {
        for x in 0..w {
            let roll: f32 = rng.random();
            let cell = match roll {
                r if r < 0.40 => CellType::Sand,
                r if r < 0.65 => CellType::Water,
                r if r < 0.70 => CellType::Stone,
                _ => CellType::Empty,
            };
            sim.set(x, y, cell);
        }
    }
}

fn benchmark(width: usize, height: usize, ticks: u32) -> f64 {
    let mut sim = Simulation::seeded(width, height, 0xFA11_5A4D);
    let mut fill_rng = rand::rng();
    random_fill(&mut sim, &mut fill_rng);

    let start = Instant::now();
    sim.step_n(ticks);
    start.elapsed().as_secs_f64() * 1000.0 / ticks as f64
}

fn main() {
    println!("=== Falling Sand Tick Benchmark ===\n");

    let sizes = [(100, 100), (300, 200), (500, 500), (1000, 1000), (2000, 2000)];
    let ticks = 50;

    println!("{:>12} {:>12} {:>14} {:>12}", "Size", "ms/tick", "Mcells/s", "ticks/s");
    println!("{:-<54}", "");

    for (w, h) in sizes {
        let ms = benchmark(w, h, ticks);
        let cells = (w * h) as f64;
        println!(
            "{:>12} {:>12.3} {:>14.1} {:>12.0}",
            format!("{}x{}", w, h),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0,
            1000.0 / ms
        );
    }
}
