use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::error::GeometryError;
use crate::math::{Point3, Vector2, Vector3};

/// A planar position with an auxiliary elevation.
///
/// Only `x` and `y` take part in the triangulation predicates; `z` is carried
/// along for elevation queries on the finished mesh.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinate {
    /// Creates a coordinate from its three components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a coordinate at elevation zero.
    #[must_use]
    pub const fn planar(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Multiplies every component by `factor`.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Planar length `sqrt(x² + y²)`.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.xy().norm()
    }

    /// Planar dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.xy().dot(&other.xy())
    }

    /// Pseudo cross product `y1 * x2 - x1 * y2`.
    ///
    /// This is the dot product of the perpendicular of `self` with `other`;
    /// it is positive when `other` points clockwise from `self`.
    #[must_use]
    pub fn cross_2d(self, other: Self) -> f64 {
        self.y * other.x - self.x * other.y
    }

    /// 3D cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        self.to_vector().cross(&other.to_vector()).into()
    }

    /// Returns the point on the segment towards `other` whose interpolated
    /// elevation equals `target_z`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UndefinedElevationInterpolation`] if
    /// `target_z` lies outside the elevation range of the two endpoints, or
    /// if both endpoints share an elevation different from `target_z`.
    pub fn divide(self, other: Self, target_z: f64) -> Result<Self, GeometryError> {
        let low = self.z.min(other.z);
        let high = self.z.max(other.z);
        let undefined = GeometryError::UndefinedElevationInterpolation {
            target: target_z,
            low,
            high,
        };

        if !(low..=high).contains(&target_z) {
            return Err(undefined);
        }

        let rise = other.z - self.z;
        if rise == 0.0 {
            // Flat segment: the whole segment sits at the target.
            return Ok(Self::new(self.x, self.y, target_z));
        }

        let lambda = (target_z - self.z) / rise;
        Ok(Self::new(
            self.x + (other.x - self.x) * lambda,
            self.y + (other.y - self.y) * lambda,
            target_z,
        ))
    }

    /// Returns the planar part as a 2D vector.
    #[must_use]
    pub fn xy(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Returns the coordinate as a 3D vector.
    #[must_use]
    pub fn to_vector(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Coordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Coordinate {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl From<Vector3> for Coordinate {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for Coordinate {
    fn from(p: Point3) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Coordinate> for Point3 {
    fn from(c: Coordinate) -> Self {
        Point3::new(c.x, c.y, c.z)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Coordinate::new(1.0, 2.0, 3.0);
        let b = Coordinate::new(0.5, -1.0, 2.0);
        assert_eq!(a + b, Coordinate::new(1.5, 1.0, 5.0));
        assert_eq!(a - b, Coordinate::new(0.5, 3.0, 1.0));
        assert_eq!(a * 2.0, Coordinate::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn magnitude_and_dot_ignore_elevation() {
        let a = Coordinate::new(3.0, 4.0, 100.0);
        assert_relative_eq!(a.magnitude(), 5.0);
        assert_relative_eq!(a.dot(Coordinate::new(1.0, 1.0, 50.0)), 7.0);
    }

    #[test]
    fn pseudo_cross_sign() {
        let x = Coordinate::planar(1.0, 0.0);
        let y = Coordinate::planar(0.0, 1.0);
        // y1*x2 - x1*y2
        assert_relative_eq!(x.cross_2d(y), -1.0);
        assert_relative_eq!(y.cross_2d(x), 1.0);
        assert_relative_eq!(x.cross_2d(x), 0.0);
    }

    #[test]
    fn cross_product_follows_right_hand_rule() {
        let x = Coordinate::new(1.0, 0.0, 0.0);
        let y = Coordinate::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Coordinate::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn divide_interpolates_position() {
        let a = Coordinate::new(0.0, 0.0, 10.0);
        let b = Coordinate::new(4.0, 2.0, 20.0);
        let mid = a.divide(b, 15.0).unwrap();
        assert_relative_eq!(mid.x, 2.0);
        assert_relative_eq!(mid.y, 1.0);
        assert_relative_eq!(mid.z, 15.0);
    }

    #[test]
    fn divide_is_direction_independent() {
        let a = Coordinate::new(0.0, 0.0, 20.0);
        let b = Coordinate::new(4.0, 0.0, 10.0);
        let p = a.divide(b, 17.5).unwrap();
        let q = b.divide(a, 17.5).unwrap();
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(q.x, 1.0);
    }

    #[test]
    fn divide_out_of_range_fails() {
        let a = Coordinate::new(0.0, 0.0, 10.0);
        let b = Coordinate::new(1.0, 0.0, 20.0);
        let err = a.divide(b, 25.0).unwrap_err();
        assert_eq!(
            err,
            GeometryError::UndefinedElevationInterpolation {
                target: 25.0,
                low: 10.0,
                high: 20.0
            }
        );
        assert!(a.divide(b, f64::NAN).is_err());
    }

    #[test]
    fn divide_flat_segment() {
        let a = Coordinate::new(2.0, 3.0, 5.0);
        let b = Coordinate::new(4.0, 3.0, 5.0);
        assert_eq!(a.divide(b, 5.0).unwrap(), a);
        assert!(a.divide(b, 6.0).is_err());
    }

    #[test]
    fn converts_to_and_from_nalgebra() {
        let c = Coordinate::new(1.0, 2.0, 3.0);
        let p: Point3 = c.into();
        assert_eq!(Coordinate::from(p), c);
    }
}
