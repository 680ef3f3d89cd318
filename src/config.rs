//! Render settings and scene description.
//!
//! Everything can be loaded from a TOML file; any key left out falls back to
//! the built-in scene:
//!
//! ```toml
//! width = 400
//! aspect_ratio = 1.7777777777777777
//! samples_per_pixel = 100
//! max_depth = 50
//! seed = 7
//!
//! [[spheres]]
//! center = [0.0, 0.0, -1.0]
//! radius = 0.5
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::hittable::World;
use crate::sphere::Sphere;
use crate::vec3::Point3;

/// One sphere of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SphereConfig {
    /// Center coordinates
    pub center: [f64; 3],
    /// Radius, expected positive
    pub radius: f64,
}

impl From<SphereConfig> for Sphere {
    fn from(config: SphereConfig) -> Self {
        Sphere::new(Point3::from(config.center), config.radius)
    }
}

/// Image, sampling and scene settings for one render.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Width over height
    pub aspect_ratio: f64,
    /// Samples per pixel; values below 1 are treated as 1
    pub samples_per_pixel: i32,
    /// Maximum ray segments per sample
    pub max_depth: i32,
    /// Fixed RNG seed, random when absent
    pub seed: Option<u64>,
    /// Scene contents, in hit-test order
    pub spheres: Vec<SphereConfig>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 400,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: None,
            spheres: default_spheres(),
        }
    }
}

/// Three small spheres in front, two larger ones behind and a ground sphere.
pub fn default_spheres() -> Vec<SphereConfig> {
    vec![
        SphereConfig {
            center: [0.0, 0.0, -1.0],
            radius: 0.5,
        },
        SphereConfig {
            center: [-1.0, 0.0, -2.0],
            radius: 0.5,
        },
        SphereConfig {
            center: [1.0, 0.0, -2.0],
            radius: 0.5,
        },
        SphereConfig {
            center: [-3.0, 0.0, -4.0],
            radius: 1.0,
        },
        SphereConfig {
            center: [3.0, 0.0, -4.0],
            radius: 1.0,
        },
        SphereConfig {
            center: [0.0, -100.5, -1.0],
            radius: 100.0,
        },
    ]
}

impl RenderConfig {
    /// Read settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = Self::parse(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "Loaded {} with {} spheres",
            path.display(),
            config.spheres.len()
        );
        Ok(config)
    }

    /// Parse settings from TOML text.
    pub fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Settings as TOML text that [`RenderConfig::parse`] reads back unchanged.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Build the scene.
    pub fn world(&self) -> World {
        World::from_spheres(self.spheres.iter().copied().map(Sphere::from))
    }

    /// Build the camera, seeded when a seed is configured.
    pub fn camera(&self) -> Camera {
        let camera = Camera::new(
            self.width,
            self.aspect_ratio,
            self.samples_per_pixel,
            self.max_depth,
        );
        match self.seed {
            Some(seed) => camera.with_seed(seed),
            None => camera,
        }
    }
}
