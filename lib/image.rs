use std::io::{self, Write};

use crate::Color;

/// Accumulated linear samples, stored top row first.
pub struct Image {
    width: usize,
    height: usize,
    samples_per_pixel: u32,
    pixels: Vec<Color>,
}

impl Image {
    pub fn new(width: usize, height: usize, samples_per_pixel: u32) -> Image {
        return Image { width, height, samples_per_pixel, pixels: vec![Color::ZERO; width * height] };
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Sum of the samples taken for pixel `(x, y)`, `y = 0` being the top row.
    pub fn get(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, sum: Color) {
        self.pixels[y * self.width + x] = sum;
    }

    /// Averaged and gamma corrected pixel, each channel in `[0, 1)`.
    pub fn resolve(&self, x: usize, y: usize) -> Color {
        let c = (self.get(x, y) / self.samples_per_pixel.max(1) as f32).max(Color::ZERO);

        // multisample averaging and gamma correction
        return Color::new(c.x.sqrt(), c.y.sqrt(), c.z.sqrt()).clamp(Color::ZERO, Color::splat(0.999));
    }

    /// Writes an ASCII PPM (P3) with 8-bit channels.
    pub fn write_ppm<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "P3")?;
        writeln!(w, "{} {}", self.width, self.height)?;
        writeln!(w, "255")?;

        for y in 0..self.height {
            for x in 0..self.width {
                writeln!(w, "{}", format_color(self.resolve(x, y)))?;
            }
        }

        return Ok(());
    }
}

fn format_color(color: Color) -> String {
    let r = (color.x * 256.0) as i32;
    let g = (color.y * 256.0) as i32;
    let b = (color.z * 256.0) as i32;
    return format!("{} {} {}", r, g, b);
}
