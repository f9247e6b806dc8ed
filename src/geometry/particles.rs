use rand::Rng;

/// Texture-space lookup coordinate of every particle in a `width` x `height`
/// state texture, sampled at texel centers. Packed `u, v` pairs, row-major.
pub fn particle_texture_coordinates(width: usize, height: usize) -> Vec<f32> {
    let mut coords = Vec::with_capacity(width * height * 2);
    for y in 0..height {
        for x in 0..width {
            coords.push((x as f32 + 0.5) / width as f32);
            coords.push((y as f32 + 0.5) / height as f32);
        }
    }
    coords
}

/// Random light RGBA colours, one shared by every `verts_per_color`
/// consecutive vertices. RGB channels fall in `128..=255`, alpha is opaque.
///
/// A trailing partial group still gets a full colour set, so the output may
/// cover slightly more than `num_elements` vertices.
pub fn random_vertex_colors<R: Rng + ?Sized>(
    num_elements: usize,
    verts_per_color: usize,
    rng: &mut R,
) -> Vec<u8> {
    let verts_per_color = verts_per_color.max(1);
    let sets = num_elements.div_ceil(verts_per_color);

    let mut colors = Vec::with_capacity(sets * verts_per_color * 4);
    for _ in 0..sets {
        let color = [
            rng.random_range(128..=255u8),
            rng.random_range(128..=255u8),
            rng.random_range(128..=255u8),
            255,
        ];
        for _ in 0..verts_per_color {
            colors.extend_from_slice(&color);
        }
    }
    colors
}
