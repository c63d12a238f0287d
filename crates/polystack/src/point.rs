//! 2D points with named vector operations.
//!
//! `Point` is a plain `f64` pair. Arithmetic goes through `add_points` and
//! `scale_point`; the `+` / `*` operator impls are thin wrappers so call sites
//! can use either form.

use nalgebra::Vector2;

/// A point (or displacement) in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector at angle `theta` (radians, counterclockwise from +x).
    #[inline]
    pub fn from_angle(theta: f64) -> Self {
        Self {
            x: theta.cos(),
            y: theta.sin(),
        }
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.to_vec2() - other.to_vec2()).norm()
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

/// Component-wise sum.
#[inline]
pub fn add_points(a: Point, b: Point) -> Point {
    Point {
        x: a.x + b.x,
        y: a.y + b.y,
    }
}

/// Component-wise product with a scalar.
#[inline]
pub fn scale_point(p: Point, k: f64) -> Point {
    Point {
        x: p.x * k,
        y: p.y * k,
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Self::Output {
        add_points(self, rhs)
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, k: f64) -> Self::Output {
        scale_point(self, k)
    }
}

impl std::ops::Mul<Point> for f64 {
    type Output = Point;
    #[inline]
    fn mul(self, p: Point) -> Self::Output {
        scale_point(p, self)
    }
}
