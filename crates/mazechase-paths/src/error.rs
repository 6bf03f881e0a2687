//! Error types for path searches.

use std::fmt;

use mazechase_core::Point;
use thiserror::Error;

/// Which end of a search request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Goal => "goal",
        })
    }
}

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateIssue {
    OutOfBounds,
    Blocked,
}

impl fmt::Display for CoordinateIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OutOfBounds => "outside the grid",
            Self::Blocked => "not passable",
        })
    }
}

/// Path search error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The start or goal is outside the grid or on a wall. Rejected before
    /// any search work.
    #[error("invalid {endpoint} {point}: {issue}")]
    InvalidCoordinate {
        endpoint: Endpoint,
        point: Point,
        issue: CoordinateIssue,
    },

    /// Every cell reachable from the start was expanded without meeting the
    /// goal.
    #[error("goal unreachable after expanding {expanded} cells")]
    Unreachable { expanded: usize },

    /// The configured expansion budget ran out first.
    #[error("search budget of {limit} expansions exhausted")]
    BudgetExhausted { limit: usize },

    /// The search's cancel token was triggered.
    #[error("search cancelled after expanding {expanded} cells")]
    Cancelled { expanded: usize },
}

impl PathError {
    /// Whether an agent may simply retry later. Only
    /// [`InvalidCoordinate`](Self::InvalidCoordinate) is a caller bug.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvalidCoordinate { .. })
    }
}

pub type Result<T> = std::result::Result<T, PathError>;
