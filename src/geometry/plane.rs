use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, EPSILON, TOLERANCE};

/// Which side of a plane a point lies on, with an [`EPSILON`] band around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Signed value below `-EPSILON`.
    Inside,
    /// Signed value within `[-EPSILON, EPSILON]`.
    Boundary,
    /// Signed value above `EPSILON`.
    Outside,
}

impl Side {
    /// Classifies a signed plane value.
    #[must_use]
    pub fn of_value(value: f64) -> Self {
        if value < -EPSILON {
            Side::Inside
        } else if value > EPSILON {
            Side::Outside
        } else {
            Side::Boundary
        }
    }
}

/// An oriented plane bounding the half-space `normal · p <= offset`.
///
/// The normal is always unit length. Points with a positive signed value
/// are outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vector3,
    offset: f64,
}

impl Plane {
    /// Creates a plane from a (not necessarily unit) normal and a raw offset.
    ///
    /// Both are divided by the normal's length, so `new(2n, 2d)` and
    /// `new(n, d)` describe the same plane.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is zero-length.
    pub fn new(normal: Vector3, offset: f64) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            normal: normal / len,
            offset: offset / len,
        })
    }

    /// Creates a plane with the given normal passing through `point`.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is zero-length.
    pub fn through_point(normal: Vector3, point: &Point3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;
        Ok(Self {
            normal,
            offset: normal.dot(&point.coords),
        })
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the offset along the normal.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Signed distance of `point` from the plane; positive means outside.
    #[must_use]
    pub fn value(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) - self.offset
    }

    /// Classifies `point` against the plane.
    #[must_use]
    pub fn side(&self, point: &Point3) -> Side {
        Side::of_value(self.value(point))
    }

    /// Returns the same plane facing the other way.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            offset: -self.offset,
        }
    }

    /// Returns this plane moved by `dist` along its normal.
    #[must_use]
    pub fn shifted(&self, dist: f64) -> Self {
        Self {
            normal: self.normal,
            offset: self.offset + dist,
        }
    }
}
