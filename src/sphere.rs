//! Sphere primitive for ray tracing.
//!
//! Ray-sphere intersection using the half-b form of the quadratic formula.

use crate::hittable::{Hit, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;
use crate::vec3::{from_points, unit_vector, Point3};

/// Sphere primitive defined by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Point3,

    /// Radius of the sphere. Expected to be positive; not validated.
    pub radius: f64,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<Hit> {
        // Vector from sphere center to ray origin
        let ca = from_points(self.center, r.origin);

        let a = r.direction.dot(r.direction);
        let half_b = r.direction.dot(ca);
        let c = ca.dot(ca) - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.contains(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.contains(root) {
                return None;
            }
        }

        let p = r.at(root);
        let normal = unit_vector(from_points(self.center, p));
        Some(Hit::new(root, p, normal, r))
    }
}
