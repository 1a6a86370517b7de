//! Point type for the 2D helpers.

use nalgebra::Vector2;

/// Point in the plane. `Default` is the origin.
///
/// Invariants:
/// - None beyond the coordinates themselves; equality is component-wise
///   `f64` equality (so a NaN coordinate never compares equal).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn origin() -> Self {
        Self::default()
    }
    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vec2()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
