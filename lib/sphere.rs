use glam::Vec3;
use std::sync::Arc;

use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::{Surface, SurfaceIntersection};

pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Scatter>,
}

impl Sphere {
    /// # Panics
    ///
    /// If `radius` is not a positive finite number.
    pub fn new(center: Vec3, radius: f32, material: Arc<dyn Scatter>) -> Sphere {
        assert!(radius > 0.0 && radius.is_finite(), "sphere radius must be positive, got {}", radius);

        return Sphere { center, radius, material };
    }
}

impl Surface for Sphere {
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection> {
        let oc = r.origin - self.center;
        let a = r.direction.length_squared();
        debug_assert!(a > 0.0, "ray direction must be non-zero");

        let half_b = oc.dot(r.direction);
        let c = oc.length_squared() - (self.radius * self.radius);

        let discriminant = (half_b * half_b) - (a * c);

        if discriminant < 0.0 {
            return None;
        }

        let discriminant_sqrt = discriminant.sqrt();

        let root_lower = (-half_b - discriminant_sqrt) / a;
        let root_upper = (-half_b + discriminant_sqrt) / a;

        let in_range = |t: f32| t_min < t && t < t_max;

        let root = if in_range(root_lower) {
            root_lower
        } else if in_range(root_upper) {
            root_upper
        } else {
            return None;
        };

        let outward_normal = (r.at(root) - self.center) / self.radius;

        return Some(SurfaceIntersection::new(r, root, outward_normal, self.material.clone()));
    }
}
