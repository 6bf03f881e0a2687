//! A [`GridMap`] shared between a game-logic thread and concurrent searches.
//!
//! Searches take the read lock for their whole run; collectible pickups
//! take the write lock. A pickup therefore never lands in the middle of a
//! search over the same map.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::grid::GridMap;

/// Cheaply clonable handle to a read-mostly [`GridMap`].
#[derive(Clone, Debug)]
pub struct SharedGridMap {
    inner: Arc<RwLock<GridMap>>,
}

impl SharedGridMap {
    pub fn new(grid: GridMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(grid)),
        }
    }

    /// Shared access for searches.
    ///
    /// A writer that panicked cannot leave the grid half-updated (every
    /// mutation is a single cell write), so poisoning is ignored.
    pub fn read(&self) -> RwLockReadGuard<'_, GridMap> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Exclusive access for mutations between ticks.
    pub fn write(&self) -> RwLockWriteGuard<'_, GridMap> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with shared access.
    pub fn with_read<T>(&self, f: impl FnOnce(&GridMap) -> T) -> T {
        f(&self.read())
    }

    /// Run `f` with exclusive access.
    pub fn with_write<T>(&self, f: impl FnOnce(&mut GridMap) -> T) -> T {
        f(&mut self.write())
    }

    /// Clone the current grid out of the lock.
    pub fn snapshot(&self) -> GridMap {
        self.read().clone()
    }
}

impl From<GridMap> for SharedGridMap {
    fn from(grid: GridMap) -> Self {
        Self::new(grid)
    }
}
