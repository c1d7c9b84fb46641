use crate::ray::Ray;
use crate::surface::SurfaceIntersection;
use crate::Color;
use rand::RngCore;

pub trait Scatter: Send + Sync {
    /// Returns the attenuation and the outgoing ray, or `None` if the light is absorbed.
    fn scatter(&self, r: &Ray, intersection: &SurfaceIntersection, rng: &mut dyn RngCore) -> Option<(Color, Ray)>;
}
