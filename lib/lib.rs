pub mod camera;
pub mod image;
pub mod materials;
pub mod ray;
pub mod render;
pub mod scatter;
pub mod scene;
pub mod sphere;
pub mod surface;
pub mod tracer;
pub mod util;
pub mod world;

/// Linear RGB, no gamma applied.
pub type Color = glam::Vec3;
