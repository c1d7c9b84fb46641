use std::sync::Arc;

use crate::ray::Ray;
use crate::scatter::Scatter;
use glam::*;

pub trait Surface: Send + Sync {
    /// Nearest intersection with `t` strictly inside `(t_min, t_max)`.
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection>;
}

#[derive(Clone)]
pub struct SurfaceIntersection {
    pub p: Vec3,
    /// Unit length, always facing against the incoming ray.
    pub normal: Vec3,
    pub front_face: bool,
    pub material: Arc<dyn Scatter>,
    pub t: f32,
}

impl SurfaceIntersection {
    pub fn new(r: &Ray, t: f32, outward_normal: Vec3, material: Arc<dyn Scatter>) -> SurfaceIntersection {
        let front_face = r.direction.dot(outward_normal) < 0.0;
        let normal = if front_face { outward_normal } else { -outward_normal };

        return SurfaceIntersection { p: r.at(t), normal, front_face, material, t };
    }
}
