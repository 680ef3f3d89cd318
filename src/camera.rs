//! Camera for ray generation and scene rendering

use std::sync::atomic::{AtomicU32, Ordering};

use log::{debug, info, warn};
use rand::Rng;
use rayon::prelude::*;

use crate::color::Color;
use crate::hittable::Hittable;
use crate::image_buffer::Image;
use crate::integrator::ray_color;
use crate::progress::RenderProgress;
use crate::random;
use crate::ray::Ray;
use crate::vec3::{linear_combination, Point3, Vector3};

/// Height of the viewport in world units.
pub const VIEWPORT_HEIGHT: f64 = 2.0;

/// Distance from the camera origin to the viewport plane.
pub const FOCAL_LENGTH: f64 = 1.0;

/// Exponent denominator of the output gamma curve (color^(1/2)).
pub const GAMMA: f64 = 2.0;

/// Pinhole camera at the world origin looking down -Z.
///
/// The viewport is a fixed 2-unit-high rectangle one unit in front of the
/// origin, stretched horizontally by the aspect ratio. Its corner and span
/// vectors are derived once in [`Camera::new`].
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    image_width: u32,
    /// Rendered image height in pixel count, `floor(width / aspect_ratio)`
    image_height: u32,
    /// Width over height
    aspect_ratio: f64,
    /// Number of random samples for each pixel (for anti-aliasing)
    samples_per_pixel: u32,
    /// Maximum number of ray segments traced per sample
    max_depth: i32,
    /// Seed of the per-row random streams
    seed: u64,

    /// Viewport width in world units (height × aspect ratio)
    viewport_width: f64,
    /// Camera position in world space
    origin: Point3,
    /// Offset from the origin to the lower-left corner of the viewport
    lower_left_corner: Vector3,
    /// Vector across the viewport horizontal edge
    horizontal: Vector3,
    /// Vector up the viewport vertical edge
    vertical: Vector3,
}

impl Camera {
    /// Creates a camera for an image `image_width` pixels wide.
    ///
    /// A `samples_per_pixel` of zero or less is treated as 1. The RNG seed is
    /// drawn at random; use [`Camera::with_seed`] for reproducible output.
    pub fn new(image_width: u32, aspect_ratio: f64, samples_per_pixel: i32, max_depth: i32) -> Self {
        let samples_per_pixel = if samples_per_pixel <= 0 {
            warn!("samples per pixel must be positive (got {samples_per_pixel}), using 1");
            1
        } else {
            samples_per_pixel as u32
        };

        let image_height = (f64::from(image_width) / aspect_ratio) as u32;

        // Determine viewport dimensions
        let viewport_width = VIEWPORT_HEIGHT * aspect_ratio;

        let horizontal = Vector3::new(viewport_width, 0.0, 0.0);
        let vertical = Vector3::new(0.0, VIEWPORT_HEIGHT, 0.0);
        let depth = Vector3::new(0.0, 0.0, FOCAL_LENGTH);
        let lower_left_corner = linear_combination(-0.5, horizontal, -0.5, vertical, -1.0, depth);

        Self {
            image_width,
            image_height,
            aspect_ratio,
            samples_per_pixel,
            max_depth,
            seed: random::fresh_seed(),
            viewport_width,
            origin: Point3::ORIGIN,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    /// Fix the seed of the random streams used while rendering.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Rendered image width in pixels
    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    /// Rendered image height in pixels
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Samples traced per pixel (always at least 1)
    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    /// Maximum number of ray segments per sample
    pub fn max_depth(&self) -> i32 {
        self.max_depth
    }

    /// Seed of the per-row random streams
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Viewport width and height in world units.
    pub fn viewport(&self) -> (f64, f64) {
        (self.viewport_width, VIEWPORT_HEIGHT)
    }

    /// Offset from the origin to the viewport's lower-left corner.
    pub fn lower_left_corner(&self) -> Vector3 {
        self.lower_left_corner
    }

    /// Renders the scene.
    ///
    /// Rows are traced in parallel with Rayon. Each row draws from its own
    /// random stream, so a given seed always produces the same image.
    pub fn render(&self, world: &dyn Hittable, progress: &dyn RenderProgress) -> Image {
        let mut image = Image::new(self.image_width, self.aspect_ratio);
        let total_rows = self.image_height;
        let row_len = self.image_width.max(1) as usize;

        info!(
            "Rendering {}x{} with {} samples per pixel, max depth {} on {} threads",
            self.image_width,
            self.image_height,
            self.samples_per_pixel,
            self.max_depth,
            rayon::current_num_threads()
        );
        debug!("Render seed {}", self.seed);
        let generation_start = std::time::Instant::now();
        let rows_done = AtomicU32::new(0);

        image
            .pixels_mut()
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| {
                self.render_row(world, y as u32, row);
                let completed = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
                progress.row_completed(completed, total_rows);
            });

        info!("Image generated in {:.2?}", generation_start.elapsed());
        image
    }

    /// Render row `y` (0 is the bottom scanline) into `row`.
    ///
    /// Each stored color is the sample average with gamma correction applied.
    pub fn render_row(&self, world: &dyn Hittable, y: u32, row: &mut [Color]) {
        let mut rng = random::row_rng(self.seed, y);
        for (x, pixel) in row.iter_mut().enumerate() {
            let mut pixel_color = Color::BLACK;

            // Sample multiple rays per pixel for anti-aliasing
            for _sample in 0..self.samples_per_pixel {
                let r = self.get_ray(x as u32, y, &mut rng);
                pixel_color += ray_color(&r, world, self.max_depth, &mut rng);
            }

            *pixel = (pixel_color / f64::from(self.samples_per_pixel)).gamma(GAMMA);
        }
    }

    /// Generate a jittered ray through pixel (`x`, `y`).
    ///
    /// The jitter is drawn from [-1, 1) in both axes (u first, then v), so a
    /// sample may land up to a full pixel outside its cell.
    pub fn get_ray<R: Rng + ?Sized>(&self, x: u32, y: u32, rng: &mut R) -> Ray {
        let u = (f64::from(x) + random::random_f64_range(rng, -1.0, 1.0))
            / f64::from(self.image_width - 1);
        let v = (f64::from(y) + random::random_f64_range(rng, -1.0, 1.0))
            / f64::from(self.image_height - 1);

        let direction = linear_combination(
            1.0,
            self.lower_left_corner,
            u,
            self.horizontal,
            v,
            self.vertical,
        );
        Ray::new(self.origin, direction)
    }
}
