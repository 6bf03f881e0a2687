//! Search modes, budgets and cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// How the open set treats rediscovered cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchMode {
    /// A candidate is dropped when the cell already has an open entry with
    /// `f ≤ f'`, and expanded cells are never revisited. Equal `f` values are
    /// popped in discovery order. Optimal whenever the heuristic is
    /// consistent, which the grid heuristic is.
    #[default]
    Relaxed,
    /// Keeps the best `g` seen per cell and re-opens an expanded cell when a
    /// strictly cheaper route to it turns up, so the result is optimal for
    /// any admissible heuristic. Equal `f` values prefer the lower heuristic.
    Strict,
}

/// Bounds on the work one search may do. The default is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    /// Maximum number of node expansions before giving up.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(n: usize) -> Self {
        Self {
            max_expansions: Some(n),
        }
    }
}

/// Shared flag that stops in-flight searches at their next expansion.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Re-arm the token for further searches.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_clones_share_state() {
        let a = CancelToken::new();
        let b = a.clone();
        assert!(!b.is_cancelled());
        a.cancel();
        assert!(b.is_cancelled());
        b.reset();
        assert!(!a.is_cancelled());
    }

    #[test]
    fn defaults() {
        assert_eq!(SearchMode::default(), SearchMode::Relaxed);
        assert_eq!(SearchLimits::default().max_expansions, None);
        assert_eq!(SearchLimits::with_max_expansions(3).max_expansions, Some(3));
    }
}
