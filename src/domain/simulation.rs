//! Falling-material update engine.
//!
//! One call to [`step`] sweeps the grid bottom-up (skipping the last row),
//! left to right within each row, and applies the per-material rule to each
//! cell in place. Every movement is a swap, so material is never created or
//! destroyed. Visiting rows bottom-up means a grain that falls lands in a row
//! that has already been processed and cannot fall again in the same tick.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{CellType, Grid};

/// Advance `grid` by exactly one tick, drawing tie-break coin flips from `rng`.
pub fn step<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let (width, height) = grid.dimensions();
    for y in (0..height.saturating_sub(1)).rev() {
        for x in 0..width {
            update_cell(grid, rng, x as i32, y as i32);
        }
    }
}

/// Fair lateral direction, drawn fresh for every cell that needs one
fn coin_flip<R: Rng>(rng: &mut R) -> i32 {
    if rng.random_bool(0.5) { -1 } else { 1 }
}

/// Swap the moving cell into the first candidate it can displace
fn try_move(grid: &mut Grid, from: usize, cell: CellType, candidates: &[(i32, i32)]) -> bool {
    for &(nx, ny) in candidates {
        if let Some(to) = grid.idx(nx, ny) {
            if cell.displaces(grid.get_index(to)) {
                grid.swap(from, to);
                return true;
            }
        }
    }
    false
}

fn update_cell<R: Rng>(grid: &mut Grid, rng: &mut R, x: i32, y: i32) {
    let Some(i) = grid.idx(x, y) else {
        return;
    };
    let cell = grid.get_index(i);
    if cell.is_inert() {
        return;
    }

    let below_y = y + 1;
    let Some(below) = grid.idx(x, below_y) else {
        return;
    };

    if cell.displaces(grid.get_index(below)) {
        grid.swap(i, below);
        return;
    }

    let dir = coin_flip(rng);
    match cell {
        CellType::Sand => {
            try_move(grid, i, cell, &[(x + dir, below_y), (x - dir, below_y)]);
        }
        // Spread sideways before sliding down a diagonal
        CellType::Water => {
            try_move(
                grid,
                i,
                cell,
                &[
                    (x + dir, y),
                    (x - dir, y),
                    (x + dir, below_y),
                    (x - dir, below_y),
                ],
            );
        }
        CellType::Empty | CellType::Stone => {}
    }
}

/// Simulation owns the grid together with the random source used for
/// tie-breaking, so a fixed seed reproduces an exact trajectory.
pub struct Simulation<R = StdRng> {
    grid: Grid,
    rng: R,
    tick: u64,
}

impl Simulation<StdRng> {
    /// Empty grid with an OS-seeded generator
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_rng(Grid::new(width, height), StdRng::from_os_rng())
    }

    /// Empty grid with a deterministic generator
    pub fn seeded(width: usize, height: usize, seed: u64) -> Self {
        Self::with_rng(Grid::new(width, height), StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulation<R> {
    pub fn with_rng(grid: Grid, rng: R) -> Self {
        Self { grid, rng, tick: 0 }
    }

    /// Advance one tick
    pub fn step(&mut self) {
        step(&mut self.grid, &mut self.rng);
        self.tick += 1;
    }

    pub fn step_n(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.step();
        }
    }

    /// Ticks completed since creation or the last clear
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn get(&self, x: i32, y: i32) -> CellType {
        self.grid.get(x, y)
    }

    pub fn set(&mut self, x: i32, y: i32, cell: CellType) {
        self.grid.set(x, y, cell);
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.tick = 0;
    }

    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    pub const fn height(&self) -> usize {
        self.grid.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_cell(grid: &Grid, x: usize, y: usize, cell: CellType) -> bool {
        grid.iter_cells().all(|(cx, cy, c)| {
            if (cx, cy) == (x, y) {
                c == cell
            } else {
                c == CellType::Empty
            }
        })
    }

    #[test]
    fn test_single_sand_grain_falls_one_row_per_tick() {
        let mut sim = Simulation::seeded(10, 10, 1);
        sim.set(5, 0, CellType::Sand);
        for tick in 1..=9 {
            sim.step();
            assert!(only_cell(sim.grid(), 5, tick, CellType::Sand), "tick {tick}");
        }
        sim.step_n(5);
        assert!(only_cell(sim.grid(), 5, 9, CellType::Sand));
        assert_eq!(sim.tick(), 14);
    }

    #[test]
    fn test_water_falls_straight_when_below_is_empty() {
        let mut sim = Simulation::seeded(5, 6, 2);
        sim.set(2, 0, CellType::Water);
        sim.step_n(5);
        assert!(only_cell(sim.grid(), 2, 5, CellType::Water));
    }

    #[test]
    fn test_sand_rests_on_stone_floor() {
        let mut sim = Simulation::seeded(10, 10, 3);
        for x in 0..10 {
            sim.set(x, 5, CellType::Stone);
        }
        sim.set(5, 0, CellType::Sand);
        sim.step_n(4);
        assert_eq!(sim.get(5, 4), CellType::Sand);
        sim.step_n(20);
        assert_eq!(sim.get(5, 4), CellType::Sand);
        assert_eq!(sim.grid().count(CellType::Stone), 10);
    }

    #[test]
    fn test_sand_sinks_through_water_on_floor() {
        // Row 6 is the bottom row, so the water cannot move away first
        let mut sim = Simulation::seeded(10, 7, 4);
        sim.set(5, 5, CellType::Sand);
        sim.set(5, 6, CellType::Water);
        sim.step();
        assert_eq!(sim.get(5, 5), CellType::Water);
        assert_eq!(sim.get(5, 6), CellType::Sand);
    }

    #[test]
    fn test_sand_sinks_through_enclosed_water() {
        let mut sim = Simulation::seeded(10, 10, 5);
        for (x, y) in [(4, 6), (6, 6), (4, 7), (5, 7), (6, 7)] {
            sim.set(x, y, CellType::Stone);
        }
        sim.set(5, 5, CellType::Sand);
        sim.set(5, 6, CellType::Water);
        sim.step();
        assert_eq!(sim.get(5, 5), CellType::Water);
        assert_eq!(sim.get(5, 6), CellType::Sand);
    }

    #[test]
    fn test_sand_over_open_water_ends_at_or_below_its_row() {
        let mut sim = Simulation::seeded(10, 10, 6);
        sim.set(5, 5, CellType::Sand);
        sim.set(5, 6, CellType::Water);
        sim.step();
        assert_eq!(sim.get(5, 6), CellType::Sand);
        assert_eq!(sim.get(5, 5), CellType::Empty);
        assert_eq!(sim.grid().count(CellType::Water), 1);
    }

    #[test]
    fn test_sand_slides_off_a_grain_diagonally() {
        let mut sim = Simulation::seeded(3, 2, 7);
        sim.set(1, 0, CellType::Sand);
        sim.set(1, 1, CellType::Sand);
        sim.step();
        let bottom: Vec<_> = (0..3).map(|x| sim.get(x, 1)).collect();
        assert_eq!(bottom.iter().filter(|&&c| c == CellType::Sand).count(), 2);
        assert!((0..3).all(|x| sim.get(x, 0) == CellType::Empty));
    }

    #[test]
    fn test_sand_diagonal_respects_grid_edge() {
        let mut sim = Simulation::seeded(1, 3, 8);
        sim.set(0, 1, CellType::Sand);
        sim.set(0, 2, CellType::Stone);
        sim.step_n(10);
        assert_eq!(sim.get(0, 1), CellType::Sand);
    }

    #[test]
    fn test_water_does_not_displace_sand() {
        let mut sim = Simulation::seeded(1, 2, 9);
        sim.set(0, 0, CellType::Water);
        sim.set(0, 1, CellType::Sand);
        sim.step_n(3);
        assert_eq!(sim.get(0, 0), CellType::Water);
        assert_eq!(sim.get(0, 1), CellType::Sand);
    }

    #[test]
    fn test_water_takes_diagonal_when_sides_are_blocked() {
        let mut sim = Simulation::seeded(3, 2, 10);
        sim.set(0, 0, CellType::Stone);
        sim.set(2, 0, CellType::Stone);
        sim.set(1, 1, CellType::Stone);
        sim.set(2, 1, CellType::Stone);
        sim.set(1, 0, CellType::Water);
        sim.step();
        assert_eq!(sim.get(0, 1), CellType::Water);
        assert_eq!(sim.get(1, 0), CellType::Empty);
    }

    #[test]
    fn test_water_stuck_when_everything_is_blocked() {
        let mut sim = Simulation::seeded(3, 2, 11);
        for (x, y) in [(0, 0), (2, 0), (0, 1), (1, 1), (2, 1)] {
            sim.set(x, y, CellType::Stone);
        }
        sim.set(1, 0, CellType::Water);
        let before = sim.grid().clone();
        sim.step_n(10);
        assert_eq!(sim.grid(), &before);
    }

    #[test]
    fn test_bottom_row_never_moves() {
        let mut sim = Simulation::seeded(10, 3, 12);
        sim.set(0, 2, CellType::Water);
        sim.set(9, 2, CellType::Sand);
        let before = sim.grid().clone();
        sim.step_n(10);
        assert_eq!(sim.grid(), &before);
    }

    #[test]
    fn test_water_column_levels_out_on_floor() {
        let mut sim = Simulation::seeded(10, 4, 42);
        for y in 0..4 {
            sim.set(5, y, CellType::Water);
        }
        sim.step_n(20);
        let columns = (0..10)
            .filter(|&x| sim.get(x, 3) == CellType::Water)
            .count();
        assert!(columns >= 2, "water stayed in {columns} column(s)");
        assert_eq!(sim.grid().count(CellType::Water), 4);
    }

    #[test]
    fn test_water_spread_direction_is_unbiased() {
        let mut rng = StdRng::seed_from_u64(99);
        let trials = 2000;
        let mut went_left = 0;
        for _ in 0..trials {
            let mut grid = Grid::new(3, 2);
            grid.set(1, 1, CellType::Stone);
            grid.set(1, 0, CellType::Water);
            step(&mut grid, &mut rng);
            if grid.get(0, 0) == CellType::Water || grid.get(0, 1) == CellType::Water {
                went_left += 1;
            }
        }
        let share = went_left as f64 / trials as f64;
        assert!((0.4..=0.6).contains(&share), "left share {share}");
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let fill = |sim: &mut Simulation| {
            for x in 0..20 {
                sim.set(x, 0, CellType::Sand);
                sim.set(x, 2, CellType::Water);
            }
            sim.set(10, 8, CellType::Stone);
        };
        let mut a = Simulation::seeded(20, 10, 77);
        let mut b = Simulation::seeded(20, 10, 77);
        fill(&mut a);
        fill(&mut b);
        a.step_n(30);
        b.step_n(30);
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_all_stone_grid_is_a_noop_tick() {
        let mut sim = Simulation::seeded(4, 4, 13);
        for y in 0..4 {
            for x in 0..4 {
                sim.set(x, y, CellType::Stone);
            }
        }
        let before = sim.grid().clone();
        sim.step();
        assert_eq!(sim.grid(), &before);
    }

    #[test]
    fn test_degenerate_grids_do_not_panic() {
        for (w, h) in [(0, 0), (0, 5), (5, 0), (1, 1)] {
            let mut sim = Simulation::seeded(w, h, 14);
            sim.set(0, 0, CellType::Sand);
            sim.step_n(3);
        }
    }

    #[test]
    fn test_clear_resets_cells_and_tick() {
        let mut sim = Simulation::seeded(6, 6, 15);
        sim.set(1, 1, CellType::Sand);
        sim.set(2, 2, CellType::Stone);
        sim.step_n(2);
        sim.clear();
        assert_eq!(sim.tick(), 0);
        assert_eq!(sim.grid().count(CellType::Empty), 36);
    }
}
