//! Maze generation by randomized frontier carving (Prim's algorithm) with an
//! optional braiding pass.
//!
//! The grid is treated as a lattice: cells with odd `x` and odd `y` are room
//! centres, cells with exactly one even coordinate are the wall seams between
//! two rooms, and cells with two even coordinates are pillars that always
//! stay walls. Carving opens a spanning tree over the room centres, which
//! gives a perfect maze; braiding then opens extra seams next to dead ends to
//! create loops.

use log::debug;
use mazechase_core::{CellCode, GridError, GridMap, Point, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::collectibles::scatter_collectibles;
use crate::config::MazeConfig;
use crate::stats::open_neighbors;

/// Smallest side length a maze is built with.
pub const MIN_SIDE: i32 = 3;

/// Two-cell lattice steps tried when braiding, in their unshuffled order.
const LATTICE_STEPS: [Point; 4] = [
    Point::new(0, -2),
    Point::new(0, 2),
    Point::new(-2, 0),
    Point::new(2, 0),
];

/// Validate and normalize a requested maze size.
///
/// Non-positive sizes are rejected; sizes below [`MIN_SIDE`] are clamped up
/// to it, and even sizes are bumped to the next odd value.
pub fn normalize_dimensions(width: i32, height: i32) -> Result<(i32, i32)> {
    if width <= 0 || height <= 0 {
        return Err(GridError::InvalidDimension { width, height });
    }
    let side = |v: i32| {
        let v = v.max(MIN_SIDE);
        if v % 2 == 0 { v + 1 } else { v }
    };
    Ok((side(width), side(height)))
}

/// Generate a braided maze with the default [`MazeConfig`].
///
/// The same `(width, height, seed)` always yields the same grid.
pub fn generate(width: i32, height: i32, seed: u64) -> Result<GridMap> {
    generate_with(width, height, seed, &MazeConfig::default())
}

/// Generate a maze with a custom configuration.
pub fn generate_with(width: i32, height: i32, seed: u64, config: &MazeConfig) -> Result<GridMap> {
    let mut mg = MazeGen::with_config(StdRng::seed_from_u64(seed), config.clone());
    let grid = mg.build(width, height)?;
    debug!("generated {}x{} maze from seed {seed}", grid.width(), grid.height());
    Ok(grid)
}

/// Maze generator driven by a caller-supplied RNG.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub config: MazeConfig,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator with the default configuration.
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, MazeConfig::default())
    }

    /// Create a generator with a custom configuration.
    pub fn with_config(rng: R, config: MazeConfig) -> Self {
        Self { rng, config }
    }

    /// Carve, braid and populate a maze in one go.
    pub fn build(&mut self, width: i32, height: i32) -> Result<GridMap> {
        let mut grid = self.carve(width, height)?;
        let braided = self.braid(&mut grid)?;
        let placed = scatter_collectibles(&mut grid, self.config.collectibles, &mut self.rng)?;
        debug!(
            "maze {}x{}: {} floor cells, {braided} braided passages, {placed} collectibles",
            grid.width(),
            grid.height(),
            grid.count_passable(),
        );
        Ok(grid)
    }

    /// Carve a perfect maze.
    ///
    /// 1. Normalize the size (see [`normalize_dimensions`]) and fill with walls.
    /// 2. Open a random room centre and put its wall seams on the frontier.
    /// 3. Repeatedly remove a random frontier seam. If exactly one of the two
    ///    rooms it separates is open, open the seam and the closed room, and
    ///    add that room's closed seams to the frontier. Otherwise drop it.
    ///
    /// Every opened seam joins the carved tree to exactly one new room, so the
    /// result is a spanning tree over all room centres.
    pub fn carve(&mut self, width: i32, height: i32) -> Result<GridMap> {
        let (w, h) = normalize_dimensions(width, height)?;
        let mut grid = GridMap::new(w, h, CellCode::Wall)?;

        let start = Point::new(
            self.rng.random_range(0..w / 2) * 2 + 1,
            self.rng.random_range(0..h / 2) * 2 + 1,
        );
        grid.set_at(start, CellCode::Floor)?;

        let mut frontier: Vec<Point> = Vec::new();
        push_closed_seams(&grid, start, &mut frontier);

        while !frontier.is_empty() {
            let i = self.rng.random_range(0..frontier.len());
            let seam = frontier.swap_remove(i);

            // Seams on an even row separate the rooms above and below it;
            // seams on an even column separate left and right.
            let (a, b) = if seam.y % 2 == 0 {
                (seam.shift(0, -1), seam.shift(0, 1))
            } else {
                (seam.shift(-1, 0), seam.shift(1, 0))
            };
            if !grid.contains(a) || !grid.contains(b) {
                continue;
            }

            let next = match (grid.passable_at(a), grid.passable_at(b)) {
                (true, false) => b,
                (false, true) => a,
                _ => continue,
            };
            grid.set_at(seam, CellCode::Floor)?;
            grid.set_at(next, CellCode::Floor)?;
            push_closed_seams(&grid, next, &mut frontier);
        }

        Ok(grid)
    }

    /// Braid dead ends into loops.
    ///
    /// Each room centre with exactly one open orthogonal neighbour is, with
    /// probability `braid_probability`, given one more passage: the lattice
    /// directions are tried (shuffled unless disabled) and the first one whose
    /// target room is open and whose seam is still a wall gets its seam
    /// opened. Passages are only ever added, so connectivity is preserved.
    ///
    /// Returns the number of seams opened.
    pub fn braid(&mut self, grid: &mut GridMap) -> Result<usize> {
        let p = self.config.braid_chance();
        if p <= 0.0 {
            return Ok(0);
        }

        let mut opened = 0;
        for y in (1..grid.height() - 1).step_by(2) {
            for x in (1..grid.width() - 1).step_by(2) {
                let cell = Point::new(x, y);
                if !grid.passable_at(cell) || open_neighbors(grid, cell) != 1 {
                    continue;
                }
                if !self.rng.random_bool(p) {
                    continue;
                }

                let mut steps = LATTICE_STEPS;
                if self.config.shuffle_braid_directions {
                    steps.shuffle(&mut self.rng);
                }
                for step in steps {
                    let target = cell + step;
                    let seam = Point::new((cell.x + target.x) / 2, (cell.y + target.y) / 2);
                    if grid.passable_at(target) && grid.at(seam) == Some(CellCode::Wall) {
                        grid.set_at(seam, CellCode::Floor)?;
                        opened += 1;
                        break;
                    }
                }
            }
        }
        Ok(opened)
    }
}

/// Push the orthogonal neighbours of `cell` that are still walls.
fn push_closed_seams(grid: &GridMap, cell: Point, frontier: &mut Vec<Point>) {
    frontier.extend(
        cell.neighbors_4()
            .into_iter()
            .filter(|&n| grid.at(n) == Some(CellCode::Wall)),
    );
}
