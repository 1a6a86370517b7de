use super::types::Point;

/// Fixed π approximation used by `area`.
#[allow(clippy::approx_constant)]
pub const PI_APPROX: f64 = 3.14159265359;

/// Euclidean distance `|p2 - p1|`.
///
/// Always `>= 0` for finite inputs and `0` iff the points coincide.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p2.to_vec2() - p1.to_vec2()).norm()
}

/// Circle area `PI_APPROX · r²`. Negative radii are not rejected.
#[inline]
pub fn area(radius: f64) -> f64 {
    PI_APPROX * radius * radius
}
