//! Diffuse path integrator.
//!
//! Every surface scatters the same way: the bounce target is the hit point
//! plus the normal plus a random offset inside the unit sphere, and each bounce
//! keeps half of the incoming light. The sky is the only light source.

use rand::Rng;

use crate::color::Color;
use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::random;
use crate::ray::Ray;
use crate::vec3::{from_points, unit_vector};

/// Lower bound of the hit query; keeps bounced rays from re-hitting their origin.
pub const SHADOW_ACNE_EPSILON: f64 = 0.001;

/// Fraction of light kept at every bounce.
pub const REFLECTANCE: f64 = 0.5;

const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

/// Background gradient from white (looking down) to sky blue (looking up).
pub fn sky_color(r: &Ray) -> Color {
    let unit_direction = unit_vector(r.direction);
    let t = 0.5 * (unit_direction.y + 1.0);
    Color::WHITE.lerp(SKY_BLUE, t)
}

/// Trace a ray and compute its color contribution.
///
/// Follows at most `depth` segments. Running out of depth yields black; escaping
/// to the sky yields the sky color scaled by [`REFLECTANCE`] once per bounce.
pub fn ray_color<R: Rng + ?Sized>(r: &Ray, world: &dyn Hittable, depth: i32, rng: &mut R) -> Color {
    let mut ray = *r;
    let mut throughput = 1.0;
    let mut depth = depth;

    loop {
        // If we've exceeded the ray bounce limit, no more light is gathered
        if depth <= 0 {
            return Color::BLACK;
        }

        match world.hit(&ray, Interval::new(SHADOW_ACNE_EPSILON, f64::INFINITY)) {
            Some(hit) => {
                let offset = random::random_in_unit_sphere(rng);
                let target = hit.point.translate(hit.normal + offset);
                ray = Ray::new(hit.point, from_points(hit.point, target));
                throughput *= REFLECTANCE;
                depth -= 1;
            }
            None => return sky_color(&ray) * throughput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::World;
    use crate::random::row_rng;
    use crate::sphere::Sphere;
    use crate::vec3::{Point3, Vector3};

    fn single_sphere() -> World {
        World::from_spheres([Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5)])
    }

    #[test]
    fn test_zero_depth_is_black() {
        let world = single_sphere();
        let mut rng = row_rng(1, 0);
        for direction in [
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(3.0, -2.0, 1.0),
        ] {
            let r = Ray::new(Point3::ORIGIN, direction);
            assert_eq!(ray_color(&r, &world, 0, &mut rng), Color::BLACK);
            assert_eq!(ray_color(&r, &world, -3, &mut rng), Color::BLACK);
        }
    }

    #[test]
    fn test_miss_returns_sky_gradient() {
        let world = World::new();
        let mut rng = row_rng(1, 0);

        let up = Ray::new(Point3::ORIGIN, Vector3::new(0.0, 2.0, 0.0));
        assert_eq!(ray_color(&up, &world, 1, &mut rng), SKY_BLUE);

        let down = Ray::new(Point3::ORIGIN, Vector3::new(0.0, -1.0, 0.0));
        assert_eq!(ray_color(&down, &world, 1, &mut rng), Color::WHITE);

        let level = Ray::new(Point3::ORIGIN, Vector3::new(1.0, 0.0, 0.0));
        let c = ray_color(&level, &world, 1, &mut rng);
        assert!((c.r() - 0.75).abs() < 1e-12);
        assert!((c.g() - 0.85).abs() < 1e-12);
        assert!((c.b() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_hit_with_last_bounce_is_black() {
        let world = single_sphere();
        let mut rng = row_rng(9, 0);
        let r = Ray::new(Point3::ORIGIN, Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(ray_color(&r, &world, 1, &mut rng), Color::BLACK);
    }

    #[test]
    fn test_bounce_attenuates_by_half() {
        // A lone sphere far below the camera: any bounce off its top escapes upward
        let world = World::from_spheres([Sphere::new(Point3::new(0.0, -100.0, 0.0), 1.0)]);
        let mut rng = row_rng(3, 0);
        let r = Ray::new(Point3::new(0.0, -90.0, 0.0), Vector3::new(0.0, -1.0, 0.0));

        for _ in 0..100 {
            let c = ray_color(&r, &world, 2, &mut rng);
            assert!((c.b() - REFLECTANCE).abs() < 1e-12, "{c:?}");
        }
    }
}
