use super::degenerate::is_degenerate_magnitude;

/// 3-component vector, `[x, y, z]`.
pub type Vec3 = [f32; 3];

pub fn add<'a>(out: &'a mut Vec3, a: &Vec3, b: &Vec3) -> &'a mut Vec3 {
    out[0] = a[0] + b[0];
    out[1] = a[1] + b[1];
    out[2] = a[2] + b[2];
    out
}

pub fn subtract<'a>(out: &'a mut Vec3, a: &Vec3, b: &Vec3) -> &'a mut Vec3 {
    out[0] = a[0] - b[0];
    out[1] = a[1] - b[1];
    out[2] = a[2] - b[2];
    out
}

pub fn scale<'a>(out: &'a mut Vec3, v: &Vec3, k: f32) -> &'a mut Vec3 {
    out[0] = v[0] * k;
    out[1] = v[1] * k;
    out[2] = v[2] * k;
    out
}

pub fn dot(a: &Vec3, b: &Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn magnitude(v: &Vec3) -> f32 {
    dot(v, v).sqrt()
}

/// Writes `v / |v|` into `out`.
///
/// When `|v|` is degenerate (see [`super::degenerate`]) `out` is left exactly
/// as it was, so a zero vector never produces NaN.
pub fn normalize<'a>(out: &'a mut Vec3, v: &Vec3) -> &'a mut Vec3 {
    let length = magnitude(v);
    if is_degenerate_magnitude(length) {
        return out;
    }
    out[0] = v[0] / length;
    out[1] = v[1] / length;
    out[2] = v[2] / length;
    out
}

/// Clamp that never panics: when `min > max`, `min` wins.
pub fn clamp(x: f32, min: f32, max: f32) -> f32 {
    min.max(max.min(x))
}
