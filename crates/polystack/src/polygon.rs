//! Regular polygons with a flat base.
//!
//! `RegularPolygon` is the immutable shape: side count, side length and the
//! circumradius derived from them. Placement lives separately in
//! `PlacedPolygon`, which pairs a shape with the center assigned by the
//! stacking pass.
//!
//! Conventions
//! - Vertices run counterclockwise starting from the left end of the bottom
//!   edge, so the lowest edge is horizontal.
//! - `n >= 3` and a finite positive side length are preconditions of `new`.
//!   They are only checked in debug builds; `try_new` is the checked variant.

use std::f64::consts::PI;

use crate::point::{add_points, scale_point, Point};

/// Circumradius of a regular `n`-gon with the given side length.
///
/// `side_length / (2 sin(π/n))`, evaluated as `0.5 · s · (1 / sin(π/n))`.
#[inline]
pub fn circum_radius_for(n: u32, side_length: f64) -> f64 {
    0.5 * side_length * (1.0 / (PI / n as f64).sin())
}

/// Shape of a regular polygon. Placement-free.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegularPolygon {
    n: u32,
    side_length: f64,
    circum_radius: f64,
}

impl RegularPolygon {
    /// Pre: `n >= 3`, `side_length > 0`. Violations yield NaN/garbage geometry in release builds.
    pub fn new(n: u32, side_length: f64) -> Self {
        debug_assert!(n >= 3, "regular polygon needs at least 3 sides, got {n}");
        Self {
            n,
            side_length,
            circum_radius: circum_radius_for(n, side_length),
        }
    }

    /// Checked constructor. `None` if `n < 3` or the side length is not a finite positive number.
    pub fn try_new(n: u32, side_length: f64) -> Option<Self> {
        if n < 3 || !side_length.is_finite() || side_length <= 0.0 {
            return None;
        }
        Some(Self::new(n, side_length))
    }

    #[inline]
    pub fn n(&self) -> u32 {
        self.n
    }

    #[inline]
    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    /// Distance from the center to any vertex.
    #[inline]
    pub fn circum_radius(&self) -> f64 {
        self.circum_radius
    }

    /// Apothem: distance from the center to the midpoint of any edge.
    #[inline]
    pub fn in_radius(&self) -> f64 {
        self.circum_radius * (PI / self.n as f64).cos()
    }

    #[inline]
    pub fn exterior_angle(&self) -> f64 {
        2.0 * PI / self.n as f64
    }

    #[inline]
    pub fn interior_angle(&self) -> f64 {
        (self.n as f64 - 2.0) * PI / self.n as f64
    }

    /// Angle of vertex 0, chosen so the bottom edge is horizontal.
    #[inline]
    fn starting_angle(&self) -> f64 {
        PI * 1.5 - PI / self.n as f64
    }

    /// Vertices around `center`, counterclockwise, bottom-left first.
    pub fn to_points_at(&self, center: Point) -> Vec<Point> {
        let start = self.starting_angle();
        let step = 2.0 * PI / self.n as f64;
        (0..self.n)
            .map(|i| {
                let dir = Point::from_angle(step * i as f64 + start);
                add_points(center, scale_point(dir, self.circum_radius))
            })
            .collect()
    }

    /// Vertices around the origin.
    pub fn to_points(&self) -> Vec<Point> {
        self.to_points_at(Point::origin())
    }

    /// Bounding box `(width, height)` of the vertices.
    pub fn size(&self) -> Point {
        let (lo, hi) = bounds_of(&self.to_points());
        Point::new(hi.x - lo.x, hi.y - lo.y)
    }

    /// Place this shape with its center at `center`.
    #[inline]
    pub fn place(self, center: Point) -> PlacedPolygon {
        PlacedPolygon {
            shape: self,
            center,
        }
    }
}

/// Axis-aligned `(min, max)` corners of a point set. Empty input gives `(+inf, -inf)` corners.
fn bounds_of(points: &[Point]) -> (Point, Point) {
    let init = (
        Point::new(f64::INFINITY, f64::INFINITY),
        Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
    );
    points.iter().fold(init, |(lo, hi), p| {
        (
            Point::new(lo.x.min(p.x), lo.y.min(p.y)),
            Point::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    })
}

/// A shape together with its assigned center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedPolygon {
    shape: RegularPolygon,
    center: Point,
}

impl PlacedPolygon {
    #[inline]
    pub fn shape(&self) -> &RegularPolygon {
        &self.shape
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn to_points(&self) -> Vec<Point> {
        self.shape.to_points_at(self.center)
    }

    /// Bounding box `(width, height)`; same as the shape's.
    pub fn size(&self) -> Point {
        self.shape.size()
    }

    /// `(min, max)` corners of the placed bounding box.
    pub fn bounds(&self) -> (Point, Point) {
        bounds_of(&self.to_points())
    }
}
