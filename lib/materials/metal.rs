use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::SurfaceIntersection;
use crate::util::{rand_in_unit_sphere, reflect};
use crate::Color;
use rand::RngCore;

pub struct MetalMaterial {
    albedo: Color,
    fuzz: f32,
}

impl MetalMaterial {
    /// `fuzz` is clamped into `[0, 1]`.
    pub fn new(albedo: Color, fuzz: f32) -> MetalMaterial {
        MetalMaterial { albedo, fuzz: fuzz.clamp(0.0, 1.0) }
    }

    pub fn fuzz(&self) -> f32 {
        self.fuzz
    }
}

impl Scatter for MetalMaterial {
    fn scatter(&self, r: &Ray, intersection: &SurfaceIntersection, rng: &mut dyn RngCore) -> Option<(Color, Ray)> {
        let reflected_direction = reflect(r.direction, intersection.normal).normalize();
        let scattered_direction = reflected_direction + rand_in_unit_sphere(rng) * self.fuzz;
        let scattered = Ray::new(intersection.p, scattered_direction);

        return if scattered.direction.dot(intersection.normal) > 0.0 { Some((self.albedo, scattered)) } else { None };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::test_util::plane_hit;
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn polished_metal_is_a_mirror() {
        let mut rng = StdRng::seed_from_u64(2);
        let mat = MetalMaterial::new(Vec3::new(0.7, 0.6, 0.5), 0.0);
        let r = Ray::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let hit = plane_hit(&r, Vec3::Y);

        let (attenuation, scattered) = mat.scatter(&r, &hit, &mut rng).unwrap();

        assert_eq!(attenuation, Vec3::new(0.7, 0.6, 0.5));
        assert!(scattered.direction.abs_diff_eq(Vec3::new(1.0, 1.0, 0.0).normalize(), 1e-6));
        assert!(scattered.origin.abs_diff_eq(Vec3::ZERO, 1e-6));
    }

    #[test]
    fn grazing_reflection_is_absorbed() {
        let mut rng = StdRng::seed_from_u64(3);
        let mat = MetalMaterial::new(Vec3::ONE, 0.0);
        let r = Ray::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let hit = plane_hit(&Ray::new(Vec3::Y, -Vec3::Y), Vec3::Y);

        // (1,0,0) mirrors onto itself, perpendicular to the normal
        assert_eq!(reflect(r.direction, hit.normal), Vec3::new(1.0, 0.0, 0.0));
        assert!(mat.scatter(&r, &hit, &mut rng).is_none());
    }

    #[test]
    fn fuzz_is_clamped() {
        assert_eq!(MetalMaterial::new(Vec3::ONE, 3.0).fuzz(), 1.0);
        assert_eq!(MetalMaterial::new(Vec3::ONE, -0.5).fuzz(), 0.0);
    }

    #[test]
    fn fuzzy_reflection_never_points_into_surface() {
        let mut rng = StdRng::seed_from_u64(4);
        let mat = MetalMaterial::new(Vec3::ONE, 1.0);
        let r = Ray::new(Vec3::new(-1.0, 0.2, 0.0), Vec3::new(1.0, -0.2, 0.0));
        let hit = plane_hit(&r, Vec3::Y);

        let mut absorbed = 0;
        for _ in 0..1000 {
            match mat.scatter(&r, &hit, &mut rng) {
                Some((_, scattered)) => assert!(scattered.direction.dot(hit.normal) > 0.0),
                None => absorbed += 1,
            }
        }
        assert!(absorbed > 0);
    }
}
