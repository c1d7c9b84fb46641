use glam::*;
use rand::Rng;
use rand_distr::*;

pub fn is_near_zero(v: Vec3) -> bool {
    return v.abs_diff_eq(Vec3::ZERO, f32::EPSILON);
}

pub fn rand_in_unit_disc<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let [x, y]: [f32; 2] = UnitDisc.sample(rng);
    return Vec2::new(x, y);
}

pub fn rand_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let [x, y, z]: [f32; 3] = UnitBall.sample(rng);
    return Vec3::new(x, y, z);
}

pub fn rand_on_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let [x, y, z]: [f32; 3] = UnitSphere.sample(rng);
    return Vec3::new(x, y, z);
}

/// Uniform color with every channel in `[min, max)`.
pub fn rand_color<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> Vec3 {
    return Vec3::new(rng.gen_range(min..max), rng.gen_range(min..max), rng.gen_range(min..max));
}

pub fn reflect(v: Vec3, normal: Vec3) -> Vec3 {
    return v - (2.0 * v.dot(normal) * normal);
}

/// `v` must be unit length.
pub fn refract(v: Vec3, normal: Vec3, ratio: f32) -> Vec3 {
    let inv_normal = -normal;
    let r_perp = (v + v.dot(inv_normal).min(1.0) * normal) * ratio;
    let r_para = (1.0 - r_perp.length_squared()).abs().sqrt() * inv_normal;
    return r_perp + r_para;
}
