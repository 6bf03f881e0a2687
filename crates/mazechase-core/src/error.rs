//! Error types for grid construction and access.

use thiserror::Error;

/// Grid error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid was requested with a non-positive width or height.
    #[error("invalid grid dimension {width}x{height}: both sides must be positive")]
    InvalidDimension { width: i32, height: i32 },

    /// Cell access outside `[0, cols) x [0, rows)`.
    #[error("cell ({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfBounds { x: i32, y: i32, cols: i32, rows: i32 },

    /// A character in an ASCII grid description is not a known glyph.
    #[error("unknown glyph {ch:?} at ({x}, {y})")]
    InvalidGlyph { ch: char, x: i32, y: i32 },

    /// Rows of an ASCII grid description have different widths.
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRows { row: i32, expected: i32, found: i32 },

    /// A stored grid whose cell layers do not match its dimensions.
    #[error("grid layers hold {walls} wall and {collectibles} collectible cells, expected {expected} cells")]
    LayerLength {
        expected: usize,
        walls: usize,
        collectibles: usize,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;
