use glam::*;
use rand::RngCore;

use crate::ray::Ray;
use crate::surface::Surface;
use crate::Color;

/// Tunable constants of the radiance estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceParams {
    /// Lower bound on hit distance, keeps bounced rays from re-hitting their own surface.
    pub t_min: f32,
    pub horizon: Color,
    pub zenith: Color,
}

impl Default for TraceParams {
    fn default() -> TraceParams {
        TraceParams { t_min: 0.001, horizon: Color::new(1.0, 1.0, 1.0), zenith: Color::new(0.5, 0.7, 1.0) }
    }
}

impl TraceParams {
    pub fn background(&self, ray: &Ray) -> Color {
        let ray_dir_normalized = ray.direction.normalize();

        let t = 0.5 * (ray_dir_normalized.y + 1.0);

        return Vec3::lerp(self.horizon, self.zenith, t);
    }

    pub fn ray_color(&self, ray: &Ray, world: &dyn Surface, depth: u32, rng: &mut dyn RngCore) -> Color {
        if depth == 0 {
            return Color::ZERO;
        }

        return if let Some(intersection) = world.raycast(ray, self.t_min, f32::INFINITY) {
            if let Some((attenuation, scattered)) = intersection.material.scatter(ray, &intersection, rng) {
                attenuation * self.ray_color(&scattered, world, depth - 1, rng)
            } else {
                Color::ZERO
            }
        } else {
            self.background(ray)
        };
    }
}

/// Estimates the radiance arriving along `ray`, bouncing at most `depth` times.
pub fn ray_color(ray: &Ray, world: &dyn Surface, depth: u32, rng: &mut dyn RngCore) -> Color {
    return TraceParams::default().ray_color(ray, world, depth, rng);
}

pub fn background(ray: &Ray) -> Color {
    return TraceParams::default().background(ray);
}
