// rangefinder_core/src/obstacles.rs

use crate::error::GeometryError;
use crate::geometry::curve::{sample_circle, sample_line, CurveSample};
use crate::geometry::{Intersection, Segment2};
use crate::types::{ensure_finite_point, Point2D};

/// A thin wall: a finite segment from `origin` along `heading` (radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    origin: Point2D,
    heading: f64,
    length: f64,
}

impl Wall {
    pub fn new(origin: Point2D, heading: f64, length: f64) -> Result<Self, GeometryError> {
        ensure_finite_point(&origin, "wall origin")?;
        if !heading.is_finite() {
            return Err(GeometryError::NonFinite("wall heading"));
        }
        if !(length.is_finite() && length >= 0.0) {
            return Err(GeometryError::InvalidLength(length));
        }
        Ok(Self {
            origin,
            heading,
            length,
        })
    }

    pub fn origin(&self) -> Point2D {
        self.origin
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn segment(&self) -> Segment2 {
        Segment2::from_heading(self.origin, self.heading, self.length)
    }
}

/// A filled circular obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    center: Point2D,
    radius: f64,
}

impl Disk {
    pub fn new(center: Point2D, radius: f64) -> Result<Self, GeometryError> {
        ensure_finite_point(&center, "disk center")?;
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point2D {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Anything a beam can hit. The set of shapes is closed; each variant knows
/// how to intersect itself with a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Obstacle {
    Wall(Wall),
    Disk(Disk),
}

/// Builds a wall from its start point, a heading in degrees, and its length.
pub fn make_wall(origin: Point2D, heading_deg: f64, length: f64) -> Result<Obstacle, GeometryError> {
    Wall::new(origin, heading_deg.to_radians(), length).map(Obstacle::Wall)
}

pub fn make_disk(center: Point2D, radius: f64) -> Result<Obstacle, GeometryError> {
    Disk::new(center, radius).map(Obstacle::Disk)
}

impl Obstacle {
    /// Wall between two explicit endpoints.
    pub fn wall_between(start: Point2D, end: Point2D) -> Result<Self, GeometryError> {
        ensure_finite_point(&start, "wall start")?;
        ensure_finite_point(&end, "wall end")?;
        let delta = end - start;
        Wall::new(start, delta.y.atan2(delta.x), delta.norm()).map(Obstacle::Wall)
    }

    /// The part of `segment` shared with this obstacle.
    pub fn intersect(&self, segment: &Segment2) -> Intersection {
        match self {
            Obstacle::Wall(wall) => segment.intersect_segment(&wall.segment()),
            Obstacle::Disk(disk) => segment.intersect_disk(&disk.center, disk.radius),
        }
    }

    /// Outline points at spacing `ds`: the wall itself, or the disk boundary
    /// (whose first and last points coincide).
    pub fn outline(&self, ds: f64) -> Result<CurveSample, GeometryError> {
        match self {
            Obstacle::Wall(wall) => {
                let segment = wall.segment();
                sample_line(segment.start, segment.end, ds, false)
            }
            Obstacle::Disk(disk) => sample_circle(disk.center, disk.radius, ds),
        }
    }
}

impl From<Wall> for Obstacle {
    fn from(wall: Wall) -> Self {
        Obstacle::Wall(wall)
    }
}

impl From<Disk> for Obstacle {
    fn from(disk: Disk) -> Self {
        Obstacle::Disk(disk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn wall_heading_is_given_in_degrees() {
        let wall = make_wall(Point2D::new(15.0, -10.0), 90.0, 20.0).unwrap();
        let Obstacle::Wall(wall) = wall else {
            panic!("expected a wall");
        };
        let end = wall.segment().end;
        assert_abs_diff_eq!(end.x, 15.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end.y, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn wall_between_recovers_the_endpoints() {
        let a = Point2D::new(1.0, 2.0);
        let b = Point2D::new(-3.0, 5.0);
        let Obstacle::Wall(wall) = Obstacle::wall_between(a, b).unwrap() else {
            panic!("expected a wall");
        };
        assert_abs_diff_eq!(wall.length(), 5.0, epsilon = 1e-12);
        let end = wall.segment().end;
        assert_abs_diff_eq!(end.x, b.x, epsilon = 1e-12);
        assert_abs_diff_eq!(end.y, b.y, epsilon = 1e-12);
    }

    #[test]
    fn malformed_obstacles_are_rejected() {
        let origin = Point2D::new(0.0, 0.0);
        assert_eq!(make_disk(origin, -1.0), Err(GeometryError::InvalidRadius(-1.0)));
        assert_eq!(make_wall(origin, 0.0, -2.0), Err(GeometryError::InvalidLength(-2.0)));
        assert_eq!(
            make_wall(origin, f64::INFINITY, 2.0),
            Err(GeometryError::NonFinite("wall heading"))
        );
        assert_eq!(
            make_disk(Point2D::new(f64::NAN, 0.0), 1.0),
            Err(GeometryError::NonFinite("disk center"))
        );
    }

    #[test]
    fn zero_length_wall_is_valid_but_never_hit() {
        let wall = make_wall(Point2D::new(5.0, 0.0), 0.0, 0.0).unwrap();
        let beam = Segment2::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0));
        assert!(wall.intersect(&beam).is_empty());
        assert_eq!(wall.outline(0.5).unwrap().len(), 1);
    }

    #[test]
    fn outlines_follow_the_shape() {
        let wall = make_wall(Point2D::new(0.0, 0.0), 0.0, 2.0).unwrap();
        assert_eq!(wall.outline(0.5).unwrap().len(), 5);

        let disk = make_disk(Point2D::new(15.0, 0.0), 2.0).unwrap();
        let outline = disk.outline(0.5).unwrap();
        for p in outline.iter() {
            assert_abs_diff_eq!(nalgebra::distance(p, &Point2D::new(15.0, 0.0)), 2.0, epsilon = 1e-9);
        }
    }
}
