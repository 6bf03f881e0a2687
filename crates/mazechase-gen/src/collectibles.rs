//! Placement of collectibles and spawn points on a generated maze.

use mazechase_core::{CellCode, GridMap, Point, Result};
use rand::Rng;
use rand::seq::SliceRandom;

/// Place up to `n` collectibles on distinct, uniformly chosen plain floor
/// cells. Returns how many were placed, which is less than `n` only when the
/// grid runs out of plain floor.
pub fn scatter_collectibles<R: Rng>(grid: &mut GridMap, n: usize, rng: &mut R) -> Result<usize> {
    if n == 0 {
        return Ok(0);
    }
    let mut free: Vec<Point> = grid
        .iter()
        .filter(|&(_, c)| c == CellCode::Floor)
        .map(|(p, _)| p)
        .collect();
    let n = n.min(free.len());
    let (chosen, _) = free.partial_shuffle(rng, n);
    for &p in chosen.iter() {
        grid.set_at(p, CellCode::Collectible)?;
    }
    Ok(n)
}

/// A uniformly chosen passable cell, or `None` if the grid has none.
pub fn random_floor<R: Rng>(grid: &GridMap, rng: &mut R) -> Option<Point> {
    let open: Vec<Point> = grid.bounds().iter().filter(|&p| grid.passable_at(p)).collect();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}
