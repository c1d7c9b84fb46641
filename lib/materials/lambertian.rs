use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::SurfaceIntersection;
use crate::util::{is_near_zero, rand_on_unit_sphere};
use crate::Color;
use glam::Vec3;
use rand::RngCore;

pub struct LambertianMaterial {
    albedo: Color,
}

impl LambertianMaterial {
    pub fn new(albedo: Color) -> LambertianMaterial {
        LambertianMaterial { albedo }
    }
}

impl Scatter for LambertianMaterial {
    fn scatter(&self, _r: &Ray, intersection: &SurfaceIntersection, rng: &mut dyn RngCore) -> Option<(Color, Ray)> {
        let scattered_direction = scatter_direction(intersection.normal, rand_on_unit_sphere(rng));
        let scattered = Ray::new(intersection.p, scattered_direction);

        return Some((self.albedo, scattered));
    }
}

/// `normal + sample`, falling back to `normal` when the two nearly cancel.
fn scatter_direction(normal: Vec3, sample: Vec3) -> Vec3 {
    let scattered_direction = normal + sample;

    if is_near_zero(scattered_direction) {
        return normal;
    }

    return scattered_direction;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::test_util::plane_hit;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn always_scatters_into_normal_hemisphere() {
        let mut rng = StdRng::seed_from_u64(1);
        let mat = LambertianMaterial::new(Vec3::new(0.2, 0.4, 0.6));
        let r = Ray::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let hit = plane_hit(&r, Vec3::Y);

        for _ in 0..1000 {
            let (attenuation, scattered) = mat.scatter(&r, &hit, &mut rng).unwrap();

            assert_eq!(attenuation, Vec3::new(0.2, 0.4, 0.6));
            assert_eq!(scattered.origin, hit.p);
            assert!(scattered.direction.dot(hit.normal) >= 0.0);
            assert!(scattered.direction.length_squared() > 0.0);
        }
    }

    #[test]
    fn cancelling_sample_falls_back_to_normal() {
        let normal = Vec3::new(0.0, 0.6, 0.8);

        let direction = scatter_direction(normal, -normal);
        assert_eq!(direction, normal);
        assert!(direction.length_squared() > 0.0);

        let sample = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(scatter_direction(normal, sample), normal + sample);
    }
}
