//! Sphere tracer
//!
//! Renders a static scene of diffuse spheres lit only by a sky gradient, using
//! stochastic antialiasing and a fixed 50% reflectance per bounce. The image is
//! gamma corrected and written as plain-text PPM or PNG.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod color;
pub mod config;
pub mod error;
pub mod hittable;
pub mod image_buffer;
pub mod integrator;
pub mod interval;
pub mod output;
pub mod progress;
pub mod random;
pub mod ray;
pub mod sphere;
pub mod vec3;

pub use camera::Camera;
pub use color::Color;
pub use config::RenderConfig;
pub use error::{Error, Result};
pub use hittable::{Hit, Hittable, World};
pub use image_buffer::Image;
pub use ray::Ray;
pub use sphere::Sphere;
pub use vec3::{Point3, Vector3};
