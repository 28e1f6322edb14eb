use super::Point2;

/// Returns the squared Euclidean distance between `a` and `b`.
#[must_use]
pub fn distance_squared_2d(a: &Point2, b: &Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

/// Returns `true` if `(px, py)` lies inside the axis-aligned square of
/// half-width `half` centred on `(cx, cy)`. The boundary counts as inside.
#[must_use]
pub fn in_square_2d(px: f64, py: f64, cx: f64, cy: f64, half: f64) -> bool {
    (px - cx).abs() <= half && (py - cy).abs() <= half
}
