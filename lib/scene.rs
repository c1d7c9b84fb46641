use std::sync::Arc;

use glam::*;
use rand::Rng;

use crate::camera::Camera;
use crate::materials::{DielectricMaterial, LambertianMaterial, MetalMaterial};
use crate::scatter::Scatter;
use crate::sphere::Sphere;
use crate::util::rand_color;
use crate::world::World;

const GRID_EXTENT: i32 = 11;
const SMALL_RADIUS: f32 = 0.2;
const GLASS_INDEX: f32 = 1.5;

/// Ground plane, a grid of small random spheres and three large feature spheres.
pub fn random_scene<R: Rng + ?Sized>(rng: &mut R) -> World {
    let mut world = World::new();

    world.add({
        let mat = Arc::new(LambertianMaterial::new(Vec3::new(0.5, 0.5, 0.5)));
        let obj = Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0, mat);
        Arc::new(obj)
    });

    let clearing = Vec3::new(4.0, SMALL_RADIUS, 0.0);

    for a in -GRID_EXTENT..GRID_EXTENT {
        for b in -GRID_EXTENT..GRID_EXTENT {
            let choose: f32 = rng.gen();
            let center = Vec3::new(
                (a as f32) + 0.9 * rng.gen::<f32>(),
                SMALL_RADIUS,
                (b as f32) + 0.9 * rng.gen::<f32>(),
            );

            if (center - clearing).length() <= 0.9 {
                continue;
            }

            let mat = if choose < 0.8 {
                let albedo = rand_color(rng, 0.0, 1.0) * rand_color(rng, 0.0, 1.0);
                Arc::new(LambertianMaterial::new(albedo)) as Arc<dyn Scatter>
            } else if choose < 0.95 {
                let albedo = rand_color(rng, 0.5, 1.0);
                let fuzz = rng.gen_range(0.0..0.5);
                Arc::new(MetalMaterial::new(albedo, fuzz)) as Arc<dyn Scatter>
            } else {
                Arc::new(DielectricMaterial::new(GLASS_INDEX)) as Arc<dyn Scatter>
            };

            world.add(Arc::new(Sphere::new(center, SMALL_RADIUS, mat)));
        }
    }

    world.add({
        let mat = Arc::new(DielectricMaterial::new(GLASS_INDEX));
        let obj = Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, mat);
        Arc::new(obj)
    });

    world.add({
        let mat = Arc::new(LambertianMaterial::new(Vec3::new(0.4, 0.2, 0.1)));
        let obj = Sphere::new(Vec3::new(-4.0, 1.0, 0.0), 1.0, mat);
        Arc::new(obj)
    });

    world.add({
        let mat = Arc::new(MetalMaterial::new(Vec3::new(0.7, 0.6, 0.5), 0.0));
        let obj = Sphere::new(Vec3::new(4.0, 1.0, 0.0), 1.0, mat);
        Arc::new(obj)
    });

    return world;
}

/// Camera framing [`random_scene`].
pub fn default_camera(aspect_ratio: f32) -> Camera {
    let camera_origin = Vec3::new(13.0, 2.0, 3.0);
    let camera_target = Vec3::new(0.0, 0.0, 0.0);
    let camera_vertical_fov = 20.0;
    let camera_focal_length = 10.0;
    let camera_aperture = 0.1;

    return Camera::new(
        camera_origin,
        camera_target,
        Vec3::Y,
        camera_vertical_fov,
        aspect_ratio,
        camera_aperture,
        camera_focal_length,
    );
}
