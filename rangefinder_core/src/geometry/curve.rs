// rangefinder_core/src/geometry/curve.rs

use crate::error::GeometryError;
use crate::types::{ensure_finite_point, Point2D, GEOMETRY_EPSILON};
use nalgebra::distance;
use std::f64::consts::TAU;

/// An ordered run of points sampled along a curve.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurveSample(Vec<Point2D>);

impl CurveSample {
    pub fn new(points: Vec<Point2D>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point2D] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Point2D> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Point2D> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2D> {
        self.0.iter()
    }

    /// Appends another run, preserving order.
    pub fn extend_from(&mut self, other: CurveSample) {
        self.0.extend(other.0);
    }

    /// x coordinates, for consumers that want split coordinate arrays.
    pub fn xs(&self) -> Vec<f64> {
        self.0.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.0.iter().map(|p| p.y).collect()
    }

    pub fn into_points(self) -> Vec<Point2D> {
        self.0
    }
}

impl From<Vec<Point2D>> for CurveSample {
    fn from(points: Vec<Point2D>) -> Self {
        Self(points)
    }
}

impl FromIterator<Point2D> for CurveSample {
    fn from_iter<I: IntoIterator<Item = Point2D>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for CurveSample {
    type Item = Point2D;
    type IntoIter = std::vec::IntoIter<Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CurveSample {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

pub(crate) fn validate_spacing(ds: f64) -> Result<(), GeometryError> {
    if ds.is_finite() && ds > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidSpacing(ds))
    }
}

/// Upper bound on the points a single sampler call may produce. Spacings that
/// would need more are rejected as invalid rather than allocated.
pub const MAX_SAMPLES: usize = 1 << 24;

/// Number of samples (endpoints included) needed so that evenly spread points
/// over `length` are at most `ds` apart: `ceil(length / ds) + 1`, rather than
/// `floor(length / ds) + 1`, which would leave gaps wider than `ds`. Exact
/// multiples of `ds` give `length / ds + 1` either way.
fn sample_count(length: f64, ds: f64) -> Result<usize, GeometryError> {
    if length <= GEOMETRY_EPSILON {
        return Ok(1);
    }
    let spans = (length / ds - GEOMETRY_EPSILON).ceil().max(1.0);
    if !spans.is_finite() || spans >= MAX_SAMPLES as f64 {
        return Err(GeometryError::InvalidSpacing(ds));
    }
    (spans as usize)
        .checked_add(1)
        .ok_or(GeometryError::InvalidSpacing(ds))
}

/// Evenly spaced values over the closed interval `[a, b]`.
fn linspace(a: f64, b: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 { (b - a) / (n - 1) as f64 } else { 0.0 };
    (0..n).map(move |i| if i + 1 == n && n > 1 { b } else { a + step * i as f64 })
}

/// Samples the segment `start -> end` with points at most `ds` apart.
///
/// Both endpoints are included. With `drop_last` the final point is removed,
/// which lets consecutive edges of a closed polygon be concatenated without
/// duplicated corners. A zero-length segment yields the single point `start`
/// (or nothing, with `drop_last`).
pub fn sample_line(
    start: Point2D,
    end: Point2D,
    ds: f64,
    drop_last: bool,
) -> Result<CurveSample, GeometryError> {
    validate_spacing(ds)?;
    ensure_finite_point(&start, "line start")?;
    ensure_finite_point(&end, "line end")?;

    let n = sample_count(distance(&start, &end), ds)?;
    let mut points: Vec<Point2D> = if n == 1 {
        vec![start]
    } else {
        let xs = linspace(start.x, end.x, n);
        let ys = linspace(start.y, end.y, n);
        xs.zip(ys).map(|(x, y)| Point2D::new(x, y)).collect()
    };

    if drop_last {
        points.pop();
    }
    Ok(CurveSample(points))
}

/// Samples a full circle with points at most `ds` apart along the arc.
///
/// The count follows [`sample_line`]: `ceil(2πr / ds) + 1` points spread
/// evenly over the circumference, not `floor(2πr / ds) + 1`.
///
/// Angles run over the closed range `[0, 2π]`, so for any non-zero radius the
/// first and last points coincide. Unlike [`sample_line`] there is no flag to
/// drop the duplicate; callers that need an open loop drop it themselves.
/// A zero radius yields the single point `center`.
pub fn sample_circle(center: Point2D, radius: f64, ds: f64) -> Result<CurveSample, GeometryError> {
    validate_spacing(ds)?;
    ensure_finite_point(&center, "circle center")?;
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(GeometryError::InvalidRadius(radius));
    }

    let n = sample_count(TAU * radius, ds)?;
    Ok(linspace(0.0, TAU, n)
        .map(|angle| Point2D::new(center.x + radius * angle.cos(), center.y + radius * angle.sin()))
        .collect())
}
