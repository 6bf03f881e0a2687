//! Structural measurements of a generated maze.

use std::collections::VecDeque;

use mazechase_core::{GridMap, Point};

/// Summary counts over the passable cells of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MazeStats {
    /// Passable cells (floor and collectible).
    pub floor_cells: usize,
    /// Passable cells with exactly one orthogonal passable neighbour.
    pub dead_ends: usize,
    /// Orthogonally adjacent passable pairs, each counted once.
    pub edges: usize,
    pub collectibles: usize,
}

impl MazeStats {
    pub fn of(grid: &GridMap) -> Self {
        let mut stats = Self::default();
        for p in grid.bounds() {
            if !grid.passable_at(p) {
                continue;
            }
            stats.floor_cells += 1;
            if grid.collectible_at(p) {
                stats.collectibles += 1;
            }
            if open_neighbors(grid, p) == 1 {
                stats.dead_ends += 1;
            }
            // Right and down only, so each pair is seen once.
            stats.edges += [p.shift(1, 0), p.shift(0, 1)]
                .into_iter()
                .filter(|&n| grid.passable_at(n))
                .count();
        }
        stats
    }
}

/// Number of orthogonal neighbours of `p` that are passable.
pub fn open_neighbors(grid: &GridMap, p: Point) -> usize {
    p.neighbors_4()
        .into_iter()
        .filter(|&n| grid.passable_at(n))
        .count()
}

/// Whether every passable cell can reach every other one through passable
/// cells, moving in any of the eight directions. A grid with no passable
/// cell counts as connected.
pub fn is_connected(grid: &GridMap) -> bool {
    let Some(start) = grid.bounds().iter().find(|&p| grid.passable_at(p)) else {
        return true;
    };

    let width = grid.width() as usize;
    let idx = |p: Point| p.y as usize * width + p.x as usize;
    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::from([start]);
    seen[idx(start)] = true;
    let mut reached = 1usize;

    while let Some(p) = queue.pop_front() {
        for n in p.neighbors_8() {
            if grid.passable_at(n) && !seen[idx(n)] {
                seen[idx(n)] = true;
                reached += 1;
                queue.push_back(n);
            }
        }
    }

    reached == grid.count_passable()
}
