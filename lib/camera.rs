use glam::*;
use rand::Rng;

use crate::ray::Ray;
use crate::util::rand_in_unit_disc;

#[derive(Debug, Clone)]
pub struct Camera {
    pub origin: Vec3,
    llc: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    cu: Vec3,
    cv: Vec3,
    aperture: f32,
}

impl Camera {
    /// Thin-lens camera looking from `origin` at `target`, in focus at `focal_length`.
    pub fn new(
        origin: Vec3,
        target: Vec3,
        up: Vec3,
        vertical_fov: f32,
        aspect_ratio: f32,
        aperture: f32,
        focal_length: f32,
    ) -> Camera {
        let theta = vertical_fov.to_radians();

        let viewport_h = 2.0 * (theta * 0.5).tan();
        let viewport_w = viewport_h * aspect_ratio;

        let cw = (origin - target).normalize();
        let cu = up.cross(cw).normalize();
        let cv = cw.cross(cu);

        let h = focal_length * viewport_w * cu;
        let v = focal_length * viewport_h * cv;

        let llc = origin - (h * 0.5) - (v * 0.5) - focal_length * cw;

        return Camera { origin, llc, horizontal: h, vertical: v, cu, cv, aperture };
    }

    /// `s` and `t` run from 0 to 1 across the viewport, starting at its lower left corner.
    pub fn create_ray<R: Rng + ?Sized>(&self, s: f32, t: f32, rng: &mut R) -> Ray {
        let rand_in_lens_disc = rand_in_unit_disc(rng) * self.aperture * 0.5;
        let offset = self.cu * rand_in_lens_disc.x + self.cv * rand_in_lens_disc.y;

        return Ray::new(
            self.origin + offset,
            self.llc + s * self.horizontal + t * self.vertical - self.origin - offset,
        );
    }
}
