//! Allocation-free linear algebra over plain `f32` arrays.

mod aabb;
mod color;
pub mod degenerate;
mod matrix;
mod sampling;
mod vector;

pub use aabb::AABB;
pub use color::hsv_to_rgb;
pub use matrix::{
    from_glam, identity, invert, look_at, orthographic, perspective, premultiply,
    premultiply_in_place, rotation_x, rotation_y, to_glam, transform_direction, transform_point,
    translation, Mat4, Vec4, IDENTITY,
};
pub use sampling::random_point_in_sphere;
pub use vector::{add, clamp, dot, magnitude, normalize, scale, subtract, Vec3};
