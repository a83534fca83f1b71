// rangefinder_core/src/geometry.rs

//! Low-level planar primitives shared by the generators and the ranging engine.

pub mod curve;
pub mod footprint;

use crate::types::{heading_vector, Point2D, GEOMETRY_EPSILON};
use nalgebra::{distance, Vector2};

/// A finite line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    pub start: Point2D,
    pub end: Point2D,
}

/// The set of points two shapes have in common, restricted to what a bounded
/// segment can produce: nothing, a single point, or a sub-segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    Empty,
    Point(Point2D),
    /// A continuous overlap, e.g. collinear segments or a chord through a disk.
    Segment(Point2D, Point2D),
}

impl Intersection {
    pub fn is_empty(&self) -> bool {
        matches!(self, Intersection::Empty)
    }

    /// Euclidean distance from `origin` to the closest point of the intersection.
    pub fn nearest_distance(&self, origin: &Point2D) -> Option<f64> {
        match self {
            Intersection::Empty => None,
            Intersection::Point(p) => Some(distance(origin, p)),
            Intersection::Segment(a, b) => Some(distance(origin, a).min(distance(origin, b))),
        }
    }
}

impl Segment2 {
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// A segment of `length` starting at `origin` along `heading` (radians).
    pub fn from_heading(origin: Point2D, heading: f64, length: f64) -> Self {
        Self::new(origin, origin + heading_vector(heading) * length)
    }

    pub fn direction(&self) -> Vector2<f64> {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Shorter than the geometry tolerance; such a segment intersects nothing.
    pub fn is_degenerate(&self) -> bool {
        self.length() <= GEOMETRY_EPSILON
    }

    /// Point at parameter `t`, where 0 is `start` and 1 is `end`.
    pub fn point_at(&self, t: f64) -> Point2D {
        self.start + self.direction() * t
    }

    /// Segment/segment intersection, including the collinear overlap case.
    pub fn intersect_segment(&self, other: &Segment2) -> Intersection {
        if self.is_degenerate() || other.is_degenerate() {
            return Intersection::Empty;
        }

        let d = self.direction();
        let e = other.direction();
        let r = other.start - self.start;
        let d_len = d.norm();
        let e_len = e.norm();
        let denom = d.perp(&e);

        if denom.abs() <= GEOMETRY_EPSILON * d_len * e_len {
            // Parallel. Only collinear segments can share points.
            if r.perp(&d).abs() / d_len > GEOMETRY_EPSILON {
                return Intersection::Empty;
            }
            let dd = d.norm_squared();
            let t0 = r.dot(&d) / dd;
            let t1 = (r + e).dot(&d) / dd;
            let lo = t0.min(t1).max(0.0);
            let hi = t0.max(t1).min(1.0);
            return self.clip(lo, hi);
        }

        let t = r.perp(&e) / denom;
        let u = r.perp(&d) / denom;
        let tol_t = GEOMETRY_EPSILON / d_len;
        let tol_u = GEOMETRY_EPSILON / e_len;
        if (-tol_t..=1.0 + tol_t).contains(&t) && (-tol_u..=1.0 + tol_u).contains(&u) {
            Intersection::Point(self.point_at(t.clamp(0.0, 1.0)))
        } else {
            Intersection::Empty
        }
    }

    /// Intersection with a filled disk. The result is the part of the segment
    /// inside the disk: a tangent point, or the chord clipped to the segment.
    pub fn intersect_disk(&self, center: &Point2D, radius: f64) -> Intersection {
        if self.is_degenerate() {
            return if distance(&self.start, center) <= radius {
                Intersection::Point(self.start)
            } else {
                Intersection::Empty
            };
        }

        let d = self.direction();
        let f = self.start - *center;
        let a = d.norm_squared();
        let b = f.dot(&d);
        let c = f.norm_squared() - radius * radius;

        // a t^2 + 2 b t + c = 0
        let disc = b * b - a * c;
        if disc < -GEOMETRY_EPSILON * a {
            return Intersection::Empty;
        }
        let sq = disc.max(0.0).sqrt();
        let t_enter = (-b - sq) / a;
        let t_exit = (-b + sq) / a;
        self.clip(t_enter.max(0.0), t_exit.min(1.0))
    }

    /// Turns a parameter interval on this segment into an intersection.
    fn clip(&self, lo: f64, hi: f64) -> Intersection {
        let len = self.length();
        if (lo - hi) * len > GEOMETRY_EPSILON {
            return Intersection::Empty;
        }
        if (hi - lo) * len <= GEOMETRY_EPSILON {
            Intersection::Point(self.point_at(lo.clamp(0.0, 1.0)))
        } else {
            Intersection::Segment(self.point_at(lo), self.point_at(hi))
        }
    }
}
