/// Indexed cube centered on the origin, used for the bounding-box outline.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeGeometry {
    /// Eight packed `x, y, z` corners.
    pub vertices: Vec<f32>,
    /// Two triangles per face, 36 indices.
    pub indices: Vec<u32>,
}

//    v6----- v5
//   /|      /|
//  v1------v0|
//  | |     | |
//  | |v7---|-|v4
//  |/      |/
//  v2------v3
const FACES: [[u32; 6]; 6] = [
    [0, 1, 2, 0, 2, 3], // front
    [0, 3, 4, 0, 4, 5], // right
    [0, 5, 6, 0, 6, 1], // top
    [1, 6, 7, 1, 7, 2], // left
    [7, 4, 3, 7, 3, 2], // bottom
    [4, 7, 6, 4, 6, 5], // back
];

/// Cube with edge length `size`.
pub fn cube_geometry(size: f32) -> CubeGeometry {
    let k = size / 2.0;
    let corners: [[f32; 3]; 8] = [
        [k, k, k],
        [-k, k, k],
        [-k, -k, k],
        [k, -k, k],
        [k, -k, -k],
        [k, k, -k],
        [-k, k, -k],
        [-k, -k, -k],
    ];

    CubeGeometry {
        vertices: corners.iter().flatten().copied().collect(),
        indices: FACES.iter().flatten().copied().collect(),
    }
}
