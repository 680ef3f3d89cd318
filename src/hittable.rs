//! Ray-object intersection system.
//!
//! Defines the [`Hittable`] trait for geometric primitives, the [`Hit`] record
//! it produces, and the [`World`] that aggregates primitives into a scene.

use crate::interval::Interval;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::vec3::{Point3, Vector3};

/// Ray-object intersection information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Ray parameter of the intersection
    pub t: f64,
    /// Point where the ray intersects the object
    pub point: Point3,
    /// Unit normal pointing from the primitive's center to `point`.
    /// It is not flipped to face the incoming ray.
    pub normal: Vector3,
    /// `normal · ray.direction > 0`, i.e. set when the ray travels along the
    /// normal (leaving the surface). Nothing in the render path reads it.
    pub front_face: bool,
}

impl Hit {
    /// Build a hit record, deriving the face flag from the ray.
    pub fn new(t: f64, point: Point3, normal: Vector3, r: &Ray) -> Self {
        Self {
            t,
            point,
            normal,
            front_face: normal.dot(r.direction) > 0.0,
        }
    }
}

/// Trait for objects that can be intersected by rays.
///
/// Implementors are immutable during a render and shared across the render
/// threads, hence `Sync + Send`.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection with `t` inside `ray_t` (bounds inclusive).
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<Hit>;
}

/// Collection of objects forming a scene.
///
/// Uses linear search for intersection testing.
#[derive(Default)]
pub struct World {
    objects: Vec<Box<dyn Hittable>>,
}

impl World {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Build a scene holding the given spheres, in order.
    pub fn from_spheres(spheres: impl IntoIterator<Item = Sphere>) -> Self {
        let mut world = Self::new();
        for sphere in spheres {
            world.add(Box::new(sphere));
        }
        world
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the scene
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Number of objects in the scene
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if the scene has no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for World {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<Hit> {
        let mut closest: Option<Hit> = None;

        // Each accepted hit shrinks the interval, so later objects only win when nearer
        for object in &self.objects {
            let closest_so_far = closest.map_or(ray_t.max, |hit| hit.t);
            if let Some(hit) = object.hit(r, ray_t.with_max(closest_so_far)) {
                closest = Some(hit);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toward_negative_z() -> Ray {
        Ray::new(Point3::ORIGIN, Vector3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_empty_world_misses() {
        let world = World::new();
        assert!(world.is_empty());
        assert!(world
            .hit(&toward_negative_z(), Interval::new(0.001, f64::INFINITY))
            .is_none());
    }

    #[test]
    fn test_world_returns_nearest_hit() {
        let far = Sphere::new(Point3::new(0.0, 0.0, -2.0), 1.0);
        let near = Sphere::new(Point3::new(0.0, 0.0, -1.0), 1.0);

        // Insertion order must not matter
        for world in [
            World::from_spheres([far, near]),
            World::from_spheres([near, far]),
        ] {
            let hit = world
                .hit(&toward_negative_z(), Interval::new(0.001, f64::INFINITY))
                .expect("ray should hit");
            // The ray starts on the near sphere's surface and leaves it at
            // z = -2, while it enters the far sphere at z = -1.
            assert!((hit.t - 1.0).abs() < 1e-9, "t = {}", hit.t);
            assert!((hit.point.z() + 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_world_prefers_nearer_disjoint_sphere() {
        let world = World::from_spheres([
            Sphere::new(Point3::new(0.0, 0.0, -2.0), 0.5),
            Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5),
        ]);
        let hit = world
            .hit(&toward_negative_z(), Interval::new(0.001, f64::INFINITY))
            .expect("ray should hit");
        assert!((hit.t - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_clear_removes_objects() {
        let mut world = World::from_spheres([Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5)]);
        assert_eq!(world.len(), 1);
        world.clear();
        assert!(world.is_empty());
    }

    #[test]
    fn test_front_face_follows_normal_direction() {
        let r = toward_negative_z();
        let along = Hit::new(1.0, r.at(1.0), Vector3::new(0.0, 0.0, -1.0), &r);
        let against = Hit::new(1.0, r.at(1.0), Vector3::new(0.0, 0.0, 1.0), &r);
        assert!(along.front_face);
        assert!(!against.front_face);
    }
}
