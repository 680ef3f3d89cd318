//! Vector and point algebra.
//!
//! Directions and displacements are plain `glam::DVec3` values. Positions get
//! their own [`Point3`] type: a point can be translated by a vector, and the
//! difference of two points is a vector, but points do not add together.

use std::fmt;
use std::ops::{Add, Sub};

use glam::DVec3;

/// Direction or displacement in 3D space.
pub type Vector3 = DVec3;

/// Position in 3D space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point3(DVec3);

impl Point3 {
    /// The world origin.
    pub const ORIGIN: Point3 = Point3(DVec3::ZERO);

    /// Create a point from its coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// X coordinate.
    pub fn x(self) -> f64 {
        self.0.x
    }

    /// Y coordinate.
    pub fn y(self) -> f64 {
        self.0.y
    }

    /// Z coordinate.
    pub fn z(self) -> f64 {
        self.0.z
    }

    /// Move the point by `v`.
    pub fn translate(self, v: Vector3) -> Point3 {
        Point3(self.0 + v)
    }

    /// Coordinates as an array, mostly for serialization.
    pub fn to_array(self) -> [f64; 3] {
        self.0.to_array()
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(xyz: [f64; 3]) -> Self {
        Point3(DVec3::from_array(xyz))
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    fn add(self, v: Vector3) -> Point3 {
        self.translate(v)
    }
}

impl Sub for Point3 {
    type Output = Vector3;

    fn sub(self, other: Point3) -> Vector3 {
        self.0 - other.0
    }
}

/// Vector pointing from `a` to `b`.
pub fn from_points(a: Point3, b: Point3) -> Vector3 {
    b - a
}

/// `v / |v|`. The caller must never pass a zero-length vector.
pub fn unit_vector(v: Vector3) -> Vector3 {
    v * (1.0 / v.length())
}

/// `a1*v1 + a2*v2 + a3*v3`
pub fn linear_combination(
    a1: f64,
    v1: Vector3,
    a2: f64,
    v2: Vector3,
    a3: f64,
    v3: Vector3,
) -> Vector3 {
    v1 * a1 + v2 * a2 + v3 * a3
}
