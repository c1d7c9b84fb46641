mod dielectric;
mod lambertian;
mod metal;

pub use dielectric::DielectricMaterial;
pub use lambertian::LambertianMaterial;
pub use metal::MetalMaterial;

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::Arc;

    use crate::materials::LambertianMaterial;
    use crate::ray::Ray;
    use crate::scatter::Scatter;
    use crate::surface::SurfaceIntersection;
    use glam::Vec3;

    /// Hit on a plane through the origin, with `outward_normal` as its geometric normal.
    pub fn plane_hit(r: &Ray, outward_normal: Vec3) -> SurfaceIntersection {
        let material: Arc<dyn Scatter> = Arc::new(LambertianMaterial::new(Vec3::ONE));
        let t = -r.origin.dot(outward_normal) / r.direction.dot(outward_normal);
        return SurfaceIntersection::new(r, t, outward_normal, material);
    }
}
