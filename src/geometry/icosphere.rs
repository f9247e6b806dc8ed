use std::collections::HashMap;

use crate::math::{normalize, Vec3};

/// Indexed unit-sphere mesh. Normals equal positions.
#[derive(Debug, Clone, Default)]
pub struct SphereGeometry {
    /// Packed `x, y, z` triples.
    pub vertices: Vec<f32>,
    /// Packed `x, y, z` triples, one per vertex.
    pub normals: Vec<f32>,
    /// Three indices per triangle.
    pub indices: Vec<u32>,
}

impl SphereGeometry {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn vertex(&self, index: usize) -> Vec3 {
        [
            self.vertices[index * 3],
            self.vertices[index * 3 + 1],
            self.vertices[index * 3 + 2],
        ]
    }
}

/// Vertex count after `iterations` subdivisions of the icosahedron.
pub const fn icosphere_vertex_count(iterations: u32) -> usize {
    10 * 4usize.pow(iterations) + 2
}

struct Builder {
    vertices: Vec<Vec3>,
    midpoints: HashMap<(u32, u32), u32>,
}

impl Builder {
    fn add_vertex(&mut self, v: Vec3) -> u32 {
        let mut unit = v;
        normalize(&mut unit, &v);
        self.vertices.push(unit);
        (self.vertices.len() - 1) as u32
    }

    /// Index of the unit-length midpoint of edge `a`-`b`, shared by the two
    /// faces on either side of the edge.
    fn midpoint(&mut self, a: u32, b: u32) -> u32 {
        let key = if a < b { (a, b) } else { (b, a) };
        if let Some(&index) = self.midpoints.get(&key) {
            return index;
        }
        let va = self.vertices[a as usize];
        let vb = self.vertices[b as usize];
        let index = self.add_vertex([
            (va[0] + vb[0]) / 2.0,
            (va[1] + vb[1]) / 2.0,
            (va[2] + vb[2]) / 2.0,
        ]);
        self.midpoints.insert(key, index);
        index
    }
}

const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Unit icosphere: an icosahedron whose faces are split into four
/// `iterations` times, with every new vertex pushed out onto the sphere.
pub fn generate_sphere_geometry(iterations: u32) -> SphereGeometry {
    let t = (1.0 + 5.0f32.sqrt()) / 2.0;
    let mut builder = Builder {
        vertices: Vec::with_capacity(icosphere_vertex_count(iterations)),
        midpoints: HashMap::new(),
    };

    for v in [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ] {
        builder.add_vertex(v);
    }

    let mut faces = ICOSAHEDRON_FACES.to_vec();
    for _ in 0..iterations {
        let mut split = Vec::with_capacity(faces.len() * 4);
        for &[v0, v1, v2] in &faces {
            let a = builder.midpoint(v0, v1);
            let b = builder.midpoint(v1, v2);
            let c = builder.midpoint(v2, v0);
            split.push([v0, a, c]);
            split.push([v1, b, a]);
            split.push([v2, c, b]);
            split.push([a, b, c]);
        }
        faces = split;
    }

    let vertices: Vec<f32> = builder.vertices.iter().flatten().copied().collect();
    SphereGeometry {
        normals: vertices.clone(),
        vertices,
        indices: faces.into_iter().flatten().collect(),
    }
}
