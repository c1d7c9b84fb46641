use std::sync::Arc;

use crate::ray::Ray;
use crate::surface::{Surface, SurfaceIntersection};

#[derive(Default)]
pub struct World {
    pub surfaces: Vec<Arc<dyn Surface>>,
}

impl World {
    pub fn new() -> World {
        World { surfaces: Vec::new() }
    }

    pub fn add(&mut self, surface: Arc<dyn Surface>) {
        self.surfaces.push(surface);
    }

    pub fn clear(&mut self) {
        self.surfaces.clear();
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl Surface for World {
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection> {
        let mut result = None;
        let mut t_nearest = t_max;

        for obj in &self.surfaces {
            if let Some(intersection) = obj.raycast(r, t_min, t_nearest) {
                t_nearest = intersection.t;
                result = Some(intersection);
            }
        }

        return result;
    }
}
