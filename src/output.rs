//! # Output Module
//!
//! Serializes a rendered [`Image`] for display:
//! - Plain-text PPM (P3), the native output format
//! - 8-bit PNG through the `image` crate
//!
//! Both formats quantize channels the same way, see [`channel_to_byte`]. The
//! image is already gamma corrected by the camera, so no further tone mapping
//! happens here.
//!
//! Rows are written from the top of the picture down, which is the reverse of
//! the buffer's storage order (row 0 is the bottom scanline).

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::{ImageBuffer, Rgb};
use log::info;

use crate::color::Color;
use crate::error::Result;
use crate::image_buffer::Image;

/// Convert a channel in [0, 1] to a byte via `channel * 255`.
///
/// The cast truncates toward zero and keeps only the low eight bits, so a
/// value that overshoots 256/255 wraps around instead of saturating.
pub fn channel_to_byte(channel: f64) -> u8 {
    (channel * 255.0) as i64 as u8
}

fn color_to_rgb(color: Color) -> [u8; 3] {
    [
        channel_to_byte(color.r()),
        channel_to_byte(color.g()),
        channel_to_byte(color.b()),
    ]
}

/// PPM P3 rendering of an image, usable with `format!` and `write!`.
///
/// Header `P3\n<width> <height>\n255\n`, then one `R G B` line per pixel.
pub struct Ppm<'a>(pub &'a Image);

impl fmt::Display for Ppm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let image = self.0;
        write!(f, "P3\n{} {}\n255\n", image.width(), image.height())?;
        for row in image.rows().rev() {
            for &color in row {
                let [r, g, b] = color_to_rgb(color);
                writeln!(f, "{r} {g} {b}")?;
            }
        }
        Ok(())
    }
}

/// Write `image` as PPM P3 text to `writer`.
pub fn write_ppm<W: Write>(image: &Image, mut writer: W) -> io::Result<()> {
    write!(writer, "{}", Ppm(image))?;
    writer.flush()
}

/// PPM P3 text of `image` as a string.
pub fn to_ppm(image: &Image) -> String {
    Ppm(image).to_string()
}

/// Save `image` as PPM text at `output_path`.
pub fn save_image_as_ppm(image: &Image, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    write_ppm(image, BufWriter::new(file))?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save `image` as an 8-bit PNG at `output_path`.
pub fn save_image_as_png(image: &Image, output_path: &Path) -> Result<()> {
    let height = image.height();
    let png: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(image.width(), height, |x, y| {
        // PNG rows run top to bottom
        Rgb(color_to_rgb(image.get(x, height - 1 - y)))
    });
    png.save(output_path)?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save `image`, choosing the format from the file extension.
///
/// `.png` produces a PNG; anything else is written as PPM text.
pub fn save_image(image: &Image, output_path: &Path) -> Result<()> {
    let is_png = output_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if is_png {
        save_image_as_png(image, output_path)
    } else {
        save_image_as_ppm(image, output_path)
    }
}
