use log::{debug, info};
use rand::{Rng, RngCore};

use crate::camera::Camera;
use crate::image::Image;
use crate::surface::Surface;
use crate::tracer::ray_color;
use crate::Color;

/// Largest width or height [`render`] accepts.
pub const MAX_DIMENSION: usize = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
}

impl RenderSettings {
    /// Height follows from `width / aspect_ratio`, never less than one row.
    pub fn new(width: usize, aspect_ratio: f32, samples_per_pixel: u32, max_depth: u32) -> RenderSettings {
        let height = ((width as f32 / aspect_ratio) as usize).max(1);
        return RenderSettings { width, height, samples_per_pixel, max_depth };
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Both dimensions within `1..=MAX_DIMENSION`.
    pub fn fits(&self) -> bool {
        (1..=MAX_DIMENSION).contains(&self.width) && (1..=MAX_DIMENSION).contains(&self.height)
    }
}

pub fn render(camera: &Camera, world: &dyn Surface, settings: &RenderSettings, rng: &mut dyn RngCore) -> Image {
    let RenderSettings { width, height, samples_per_pixel, max_depth } = *settings;
    let mut image = Image::new(width, height, samples_per_pixel);

    info!("rendering {}x{}, {} samples per pixel, depth {}", width, height, samples_per_pixel, max_depth);

    // image rows run top to bottom, viewport v runs bottom to top
    for y in (0..height).rev() {
        debug!("scanlines remaining: {}", y);

        for x in 0..width {
            let mut c = Color::ZERO;

            // random multisampling
            for _ in 0..samples_per_pixel {
                let rand_u: f32 = rng.gen();
                let rand_v: f32 = rng.gen();

                let u = (x as f32 + rand_u) / (width.max(2) - 1) as f32;
                let v = (y as f32 + rand_v) / (height.max(2) - 1) as f32;
                let ray = camera.create_ray(u, v, rng);

                c += ray_color(&ray, world, max_depth, rng);
            }

            image.set(x, height - 1 - y, c);
        }
    }

    info!("render finished");

    return image;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::World;
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn settings_derive_height() {
        let s = RenderSettings::new(400, 1.5, 20, 5);
        assert_eq!(s.height, 266);

        assert_eq!(RenderSettings::new(3, 10.0, 1, 1).height, 1);
    }

    #[test]
    fn extreme_aspect_ratio_does_not_fit() {
        assert!(RenderSettings::new(400, 1.5, 20, 5).fits());
        assert!(RenderSettings::new(MAX_DIMENSION, 1.0, 1, 1).fits());

        let tall = RenderSettings::new(400, 1e-30, 1, 1);
        assert_eq!(tall.height, usize::MAX);
        assert!(!tall.fits());

        assert!(!RenderSettings::new(MAX_DIMENSION + 1, 1.0, 1, 1).fits());
    }

    #[test]
    fn empty_world_renders_sky_top_row_first() {
        let mut rng = StdRng::seed_from_u64(18);
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 90.0, 1.0, 0.0, 1.0);
        let settings = RenderSettings::new(4, 1.0, 3, 5);

        let image = render(&camera, &World::new(), &settings, &mut rng);

        assert_eq!((image.width(), image.height()), (4, 4));

        // the sky gets bluer toward the zenith, so the top row has less red
        assert!(image.get(0, 0).x < image.get(0, 3).x);

        for y in 0..4 {
            for x in 0..4 {
                let avg = image.get(x, y) / 3.0;
                assert!(avg.cmpge(Vec3::new(0.5, 0.7, 1.0) - 1e-5).all(), "{:?}", avg);
                assert!(avg.cmple(Vec3::ONE + 1e-5).all(), "{:?}", avg);
            }
        }
    }
}
