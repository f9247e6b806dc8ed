//! Mesh and per-particle attribute generators.

mod cube;
mod icosphere;
mod particles;

pub use cube::{cube_geometry, CubeGeometry};
pub use icosphere::{generate_sphere_geometry, icosphere_vertex_count, SphereGeometry};
pub use particles::{particle_texture_coordinates, random_vertex_colors};
