//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a semi-infinite
//! line in 3D space used for intersection testing.

use crate::vec3::{Point3, Vector3};

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera origin for primary rays, a surface point for bounced rays.
    pub origin: Point3,

    /// Direction vector of the ray. Not normalized.
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f64) -> Point3 {
        self.origin.translate(self.direction * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at() {
        let r = Ray::new(Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 2.0, -1.0));
        assert_eq!(r.at(0.0), r.origin);
        assert_eq!(r.at(1.5), Point3::new(1.0, 3.0, -1.5));
    }
}
