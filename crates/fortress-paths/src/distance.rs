use fortress_core::Point;

/// Cost multiplier for a diagonal step, relative to a cardinal step.
///
/// Kept at the 1.42 approximation rather than `SQRT_2` so route costs match
/// the tower-defense maps they were tuned on.
pub const DIAGONAL_COST: f64 = 1.42;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Octile distance: diagonal steps cost [`DIAGONAL_COST`], straight steps 1.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let dx = f64::from((a.x - b.x).abs());
    let dy = f64::from((a.y - b.y).abs());
    dx.max(dy) + (DIAGONAL_COST - 1.0) * dx.min(dy)
}
