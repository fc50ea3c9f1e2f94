use crate::geom::Point;

/// Errors raised while building or parsing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Width or height is zero or negative.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    /// A flat weight buffer does not hold `width * height` entries.
    #[error("expected {expected} cells, got {got}")]
    SizeMismatch { expected: usize, got: usize },
    /// A row (or text line) does not have the same width as the first one.
    #[error("row {row} has width {got}, expected {expected}")]
    RaggedRows { row: usize, expected: usize, got: usize },
    /// A weight is zero, negative, NaN, or infinite.
    #[error("invalid weight {weight} at {pos}")]
    InvalidWeight { pos: Point, weight: f64 },
    /// An ASCII map contains a character with no terrain meaning.
    #[error("invalid map character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
}
