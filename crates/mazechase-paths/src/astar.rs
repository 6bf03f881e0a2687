//! A* search.

use std::collections::BinaryHeap;

use log::{debug, trace};
use mazechase_core::{GridMap, Point, Range};

use crate::error::{CoordinateIssue, Endpoint, PathError, Result};
use crate::grid_pather::GridPather;
use crate::limits::{CancelToken, SearchLimits, SearchMode};
use crate::node::{NodeArena, NodeId, NodeRef, PathNode};
use crate::path::Path;
use crate::traits::AstarPather;

/// Find a minimal-cost 8-directional route across `grid`.
///
/// Convenience wrapper that runs a fresh [`PathFinder`] with default
/// settings. Agents that search every tick should keep their own finder to
/// reuse its buffers.
pub fn find_path(grid: &GridMap, start: impl Into<Point>, goal: impl Into<Point>) -> Result<Path> {
    PathFinder::new().find_path(grid, start, goal)
}

/// Per-cell bookkeeping, valid only when `generation` matches the running
/// search.
#[derive(Clone, Copy, Default)]
struct CellState {
    generation: u32,
    closed: bool,
    /// Best `g` recorded for the cell.
    g: i32,
    /// Smallest `f` among the cell's open entries.
    f: i32,
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Reusable A* engine.
///
/// Each call to [`search`](Self::search) is an independent, run-to-completion
/// computation; the finder only keeps allocations around between calls. A
/// finder is owned by one agent at a time (`&mut self`), while the grid is
/// only ever read, so any number of finders may search the same grid from
/// different threads.
pub struct PathFinder {
    mode: SearchMode,
    limits: SearchLimits,
    cancel: Option<CancelToken>,
    rng: Range,
    width: usize,
    cells: Vec<CellState>,
    generation: u32,
    arena: NodeArena,
    open: BinaryHeap<NodeRef>,
    nbuf: Vec<Point>,
    expanded: usize,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathFinder {
    /// A finder in [`SearchMode::Relaxed`] with no limits.
    pub fn new() -> Self {
        Self {
            mode: SearchMode::default(),
            limits: SearchLimits::default(),
            cancel: None,
            rng: Range::default(),
            width: 0,
            cells: Vec::new(),
            generation: 0,
            arena: NodeArena::default(),
            open: BinaryHeap::new(),
            nbuf: Vec::with_capacity(8),
            expanded: 0,
        }
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    #[inline]
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    #[inline]
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Number of cells expanded by the most recent search.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Every node created by the most recent search, in creation order.
    pub fn nodes(&self) -> &[PathNode] {
        self.arena.as_slice()
    }

    /// Search `grid` with the 10/14 movement model and Manhattan heuristic.
    pub fn find_path(
        &mut self,
        grid: &GridMap,
        start: impl Into<Point>,
        goal: impl Into<Point>,
    ) -> Result<Path> {
        self.search(&GridPather::new(grid), start.into(), goal.into())
    }

    /// Compute the cheapest route from `start` to `goal` under `pather`.
    ///
    /// Fails with [`PathError::InvalidCoordinate`] before doing any work if
    /// either endpoint is outside the pather's bounds or not passable, and
    /// with [`PathError::Unreachable`] once the open set runs dry.
    pub fn search<P: AstarPather>(&mut self, pather: &P, start: Point, goal: Point) -> Result<Path> {
        check_endpoint(pather, Endpoint::Start, start)?;
        check_endpoint(pather, Endpoint::Goal, goal)?;

        self.prepare(pather.bounds());
        trace!("A* {start} -> {goal} ({:?})", self.mode);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let outcome = self.run(pather, start, goal, &mut nbuf);
        self.nbuf = nbuf;

        match &outcome {
            Ok(path) => debug!(
                "A* {start} -> {goal}: cost {} over {} steps, {} expanded",
                path.cost(),
                path.steps(),
                self.expanded
            ),
            Err(e) => debug!("A* {start} -> {goal}: {e}"),
        }
        outcome
    }

    fn run<P: AstarPather>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
        nbuf: &mut Vec<Point>,
    ) -> Result<Path> {
        let cur_gen = self.generation;
        let strict = self.mode == SearchMode::Strict;

        let h0 = pather.estimate(start, goal);
        let root = self.arena.push(PathNode {
            pos: start,
            g: 0,
            f: h0,
            parent: None,
        });
        if let Some(si) = self.idx(start) {
            self.cells[si] = CellState {
                generation: cur_gen,
                closed: false,
                g: 0,
                f: h0,
            };
        }
        self.open.push(self.node_ref(root, h0, h0));

        while let Some(top) = self.open.pop() {
            let current = *self.arena.get(top.id);
            let Some(ci) = self.idx(current.pos) else {
                continue;
            };

            // Skip entries superseded by a cheaper route to the same cell.
            let state = self.cells[ci];
            if state.closed || (strict && current.g > state.g) {
                continue;
            }

            if current.pos == goal {
                return Ok(Path::new(self.arena.trace(top.id), current.g));
            }

            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                return Err(PathError::Cancelled {
                    expanded: self.expanded,
                });
            }
            if let Some(limit) = self.limits.max_expansions {
                if self.expanded >= limit {
                    return Err(PathError::BudgetExhausted { limit });
                }
            }

            self.cells[ci].closed = true;
            self.expanded += 1;

            nbuf.clear();
            pather.neighbors(current.pos, nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                // Saturate so oversized costs rank last instead of wrapping.
                let g = current.g.saturating_add(pather.cost(current.pos, np));
                let h = pather.estimate(np, goal);
                let f = g.saturating_add(h);

                let n = &mut self.cells[ni];
                if n.generation == cur_gen {
                    let keep_existing = if strict {
                        n.g <= g
                    } else {
                        n.closed || n.f <= f
                    };
                    if keep_existing {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }
                n.closed = false;
                n.g = g;
                n.f = f;

                let id = self.arena.push(PathNode {
                    pos: np,
                    g,
                    f,
                    parent: Some(top.id),
                });
                let entry = self.node_ref(id, f, h);
                self.open.push(entry);
            }
        }

        Err(PathError::Unreachable {
            expanded: self.expanded,
        })
    }

    /// Reset per-search state and size the cell table for `rng`.
    fn prepare(&mut self, rng: Range) {
        let len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        if self.cells.len() < len {
            self.cells.clear();
            self.cells.resize(len, CellState::default());
            self.generation = 0;
        }

        // Bump generation to lazily invalidate all cells.
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.cells.fill(CellState::default());
            self.generation = 1;
        }

        self.arena.clear();
        self.open.clear();
        self.expanded = 0;
    }

    #[inline]
    fn node_ref(&self, id: NodeId, f: i32, h: i32) -> NodeRef {
        let tie = match self.mode {
            SearchMode::Relaxed => 0,
            SearchMode::Strict => h,
        };
        NodeRef { id, f, tie }
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }
}

fn check_endpoint<P: AstarPather>(pather: &P, endpoint: Endpoint, point: Point) -> Result<()> {
    let issue = if !pather.bounds().contains(point) {
        CoordinateIssue::OutOfBounds
    } else if !pather.passable(point) {
        CoordinateIssue::Blocked
    } else {
        return Ok(());
    };
    Err(PathError::InvalidCoordinate {
        endpoint,
        point,
        issue,
    })
}
