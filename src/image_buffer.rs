//! Render target holding one color per pixel.

use crate::color::Color;

/// Fixed-size grid of colors.
///
/// Storage is row-major; row 0 is the bottom scanline of the picture.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    aspect_ratio: f64,
    data: Vec<Color>,
}

impl Image {
    /// Allocate a black image. The height is `floor(width / aspect_ratio)`.
    pub fn new(width: u32, aspect_ratio: f64) -> Self {
        let height = (f64::from(width) / aspect_ratio) as u32;
        Self {
            width,
            height,
            aspect_ratio,
            data: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width over height as requested at construction
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Color at column `x` of row `y`.
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.data[self.index(x, y)]
    }

    /// Overwrite the color at column `x` of row `y`.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.data[index] = color;
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.data.fill(color);
    }

    /// Rows from the bottom scanline up.
    pub fn rows(&self) -> std::slice::Chunks<'_, Color> {
        self.data.chunks(self.row_len())
    }

    /// Mutable view of the whole buffer, row-major.
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.data
    }

    // chunks() panics on a zero chunk size; a zero-width image has no rows anyway
    fn row_len(&self) -> usize {
        (self.width as usize).max(1)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        y as usize * self.width as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_is_floored() {
        let image = Image::new(400, 16.0 / 9.0);
        assert_eq!(image.width(), 400);
        assert_eq!(image.height(), 225);

        let image = Image::new(10, 3.0);
        assert_eq!(image.height(), 3);
    }

    #[test]
    fn test_row_major_addressing() {
        let mut image = Image::new(3, 1.5);
        assert_eq!(image.height(), 2);

        let red = Color::new(1.0, 0.0, 0.0);
        image.set(2, 1, red);
        assert_eq!(image.get(2, 1), red);
        assert_eq!(image.get(0, 0), Color::BLACK);

        let rows: Vec<&[Color]> = image.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2], red);
        assert_eq!(rows[0], &[Color::BLACK; 3]);
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_panics() {
        let image = Image::new(4, 1.0);
        image.get(4, 0);
    }
}
