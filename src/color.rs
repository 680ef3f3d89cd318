//! Linear RGB color.

use std::ops::{Add, AddAssign, Div, Mul};

use glam::DVec3;

/// RGB color with channels nominally in [0, 1]. Values are never clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Color(DVec3);

impl Color {
    /// (0, 0, 0)
    pub const BLACK: Color = Color(DVec3::ZERO);
    /// (1, 1, 1)
    pub const WHITE: Color = Color(DVec3::ONE);

    /// Create a color from its channels.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self(DVec3::new(r, g, b))
    }

    /// Red channel.
    pub fn r(self) -> f64 {
        self.0.x
    }

    /// Green channel.
    pub fn g(self) -> f64 {
        self.0.y
    }

    /// Blue channel.
    pub fn b(self) -> f64 {
        self.0.z
    }

    /// Raise every channel to `1 / factor`.
    pub fn gamma(self, factor: f64) -> Color {
        let g = 1.0 / factor;
        Color::new(self.r().powf(g), self.g().powf(g), self.b().powf(g))
    }

    /// `(1 - t) * self + t * other`
    pub fn lerp(self, other: Color, t: f64) -> Color {
        self * (1.0 - t) + other * t
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, other: Color) -> Color {
        Color(self.0 + other.0)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, other: Color) {
        self.0 += other.0;
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, a: f64) -> Color {
        Color(self.0 * a)
    }
}

impl Div<f64> for Color {
    type Output = Color;

    fn div(self, a: f64) -> Color {
        Color(self.0 / a)
    }
}
