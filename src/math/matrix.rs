//! Column-major 4x4 matrix builders and operations.
//!
//! Every function writes into a caller-owned `out` and hands it back, so the
//! per-frame camera path never allocates. Element `i` of a [`Mat4`] sits at
//! column `i / 4`, row `i % 4`.

use super::degenerate::unguarded_reciprocal;
use super::vector::{dot, Vec3};

/// 4x4 matrix stored column-major.
pub type Mat4 = [f32; 16];

/// Homogeneous 4-component vector produced by [`transform_direction`].
pub type Vec4 = [f32; 4];

pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

pub fn identity(out: &mut Mat4) -> &mut Mat4 {
    *out = IDENTITY;
    out
}

/// Pure translation by `t`. Only elements 12, 13 and 14 differ from identity.
pub fn translation<'a>(out: &'a mut Mat4, t: &Vec3) -> &'a mut Mat4 {
    *out = IDENTITY;
    out[12] = t[0];
    out[13] = t[1];
    out[14] = t[2];
    out
}

/// Right-handed rotation about +X.
pub fn rotation_x(out: &mut Mat4, angle: f32) -> &mut Mat4 {
    let (s, c) = angle.sin_cos();
    *out = IDENTITY;
    out[5] = c;
    out[6] = s;
    out[9] = -s;
    out[10] = c;
    out
}

/// Right-handed rotation about +Y.
pub fn rotation_y(out: &mut Mat4, angle: f32) -> &mut Mat4 {
    let (s, c) = angle.sin_cos();
    *out = IDENTITY;
    out[0] = c;
    out[2] = -s;
    out[8] = s;
    out[10] = c;
    out
}

fn product(lhs: &Mat4, rhs: &Mat4) -> Mat4 {
    let mut result = [0.0; 16];
    for col in 0..4 {
        for row in 0..4 {
            result[col * 4 + row] = lhs[row] * rhs[col * 4]
                + lhs[4 + row] * rhs[col * 4 + 1]
                + lhs[8 + row] * rhs[col * 4 + 2]
                + lhs[12 + row] * rhs[col * 4 + 3];
        }
    }
    result
}

/// `out = b * a`: a column vector is transformed by `a` first, then `b`.
pub fn premultiply<'a>(out: &'a mut Mat4, a: &Mat4, b: &Mat4) -> &'a mut Mat4 {
    *out = product(b, a);
    out
}

/// `out = b * out`, the aliased form of [`premultiply`].
pub fn premultiply_in_place<'a>(out: &'a mut Mat4, b: &Mat4) -> &'a mut Mat4 {
    let a = *out;
    *out = product(b, &a);
    out
}

/// Right-handed perspective projection mapping depth to GL clip space `[-1, 1]`.
///
/// `near == far` or `aspect == 0` is not rejected; the result contains
/// `inf`/`NaN`.
pub fn perspective(out: &mut Mat4, fovy: f32, aspect: f32, near: f32, far: f32) -> &mut Mat4 {
    let f = unguarded_reciprocal((fovy / 2.0).tan());
    let nf = unguarded_reciprocal(near - far);

    *out = [0.0; 16];
    out[0] = f * unguarded_reciprocal(aspect);
    out[5] = f;
    out[10] = (far + near) * nf;
    out[11] = -1.0;
    out[14] = 2.0 * far * near * nf;
    out
}

pub fn orthographic(
    out: &mut Mat4,
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> &mut Mat4 {
    let rl = unguarded_reciprocal(right - left);
    let tb = unguarded_reciprocal(top - bottom);
    let fn_ = unguarded_reciprocal(far - near);

    *out = [0.0; 16];
    out[0] = 2.0 * rl;
    out[5] = 2.0 * tb;
    out[10] = -2.0 * fn_;
    out[12] = -(right + left) * rl;
    out[13] = -(top + bottom) * tb;
    out[14] = -(far + near) * fn_;
    out[15] = 1.0;
    out
}

/// View matrix looking from `eye` towards `target`. `up` must be normalized.
///
/// The basis is `x = forward × up`, `y = forward × x` with
/// `forward = eye - target`, so screen X and Y point the opposite way to
/// `glam::Mat4::look_at_rh`.
///
/// `eye == target`, or `up` parallel to the line of sight, divides by a zero
/// length and fills the matrix with NaN.
pub fn look_at<'a>(out: &'a mut Mat4, eye: &Vec3, target: &Vec3, up: &Vec3) -> &'a mut Mat4 {
    let mut z = [eye[0] - target[0], eye[1] - target[1], eye[2] - target[2]];
    let inv = unguarded_reciprocal(dot(&z, &z).sqrt());
    z = [z[0] * inv, z[1] * inv, z[2] * inv];

    let mut x = cross(&z, up);
    let inv = unguarded_reciprocal(dot(&x, &x).sqrt());
    x = [x[0] * inv, x[1] * inv, x[2] * inv];

    let mut y = cross(&z, &x);
    let inv = unguarded_reciprocal(dot(&y, &y).sqrt());
    y = [y[0] * inv, y[1] * inv, y[2] * inv];

    out[0] = x[0];
    out[1] = y[0];
    out[2] = z[0];
    out[3] = 0.0;
    out[4] = x[1];
    out[5] = y[1];
    out[6] = z[1];
    out[7] = 0.0;
    out[8] = x[2];
    out[9] = y[2];
    out[10] = z[2];
    out[11] = 0.0;
    out[12] = -dot(&x, eye);
    out[13] = -dot(&y, eye);
    out[14] = -dot(&z, eye);
    out[15] = 1.0;
    out
}

fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// General inverse by cofactor expansion over 2x2 sub-determinants.
///
/// A singular `m` has a zero determinant; its reciprocal is not guarded, so
/// the result is `inf`/`NaN` rather than an error.
pub fn invert<'a>(out: &'a mut Mat4, m: &Mat4) -> &'a mut Mat4 {
    let (a00, a01, a02, a03) = (m[0], m[1], m[2], m[3]);
    let (a10, a11, a12, a13) = (m[4], m[5], m[6], m[7]);
    let (a20, a21, a22, a23) = (m[8], m[9], m[10], m[11]);
    let (a30, a31, a32, a33) = (m[12], m[13], m[14], m[15]);

    let b00 = a00 * a11 - a01 * a10;
    let b01 = a00 * a12 - a02 * a10;
    let b02 = a00 * a13 - a03 * a10;
    let b03 = a01 * a12 - a02 * a11;
    let b04 = a01 * a13 - a03 * a11;
    let b05 = a02 * a13 - a03 * a12;
    let b06 = a20 * a31 - a21 * a30;
    let b07 = a20 * a32 - a22 * a30;
    let b08 = a20 * a33 - a23 * a30;
    let b09 = a21 * a32 - a22 * a31;
    let b10 = a21 * a33 - a23 * a31;
    let b11 = a22 * a33 - a23 * a32;

    let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
    let d = unguarded_reciprocal(det);

    out[0] = (a11 * b11 - a12 * b10 + a13 * b09) * d;
    out[1] = (a02 * b10 - a01 * b11 - a03 * b09) * d;
    out[2] = (a31 * b05 - a32 * b04 + a33 * b03) * d;
    out[3] = (a22 * b04 - a21 * b05 - a23 * b03) * d;
    out[4] = (a12 * b08 - a10 * b11 - a13 * b07) * d;
    out[5] = (a00 * b11 - a02 * b08 + a03 * b07) * d;
    out[6] = (a32 * b02 - a30 * b05 - a33 * b01) * d;
    out[7] = (a20 * b05 - a22 * b02 + a23 * b01) * d;
    out[8] = (a10 * b10 - a11 * b08 + a13 * b06) * d;
    out[9] = (a01 * b08 - a00 * b10 - a03 * b06) * d;
    out[10] = (a30 * b04 - a31 * b02 + a33 * b00) * d;
    out[11] = (a21 * b02 - a20 * b04 - a23 * b00) * d;
    out[12] = (a11 * b07 - a10 * b09 - a12 * b06) * d;
    out[13] = (a00 * b09 - a01 * b07 + a02 * b06) * d;
    out[14] = (a31 * b01 - a30 * b03 - a32 * b00) * d;
    out[15] = (a20 * b03 - a21 * b01 + a22 * b00) * d;
    out
}

/// Applies the linear part of `m` to direction `v`; translation is ignored.
/// The fourth component is `m[3]*x + m[7]*y + m[11]*z`.
pub fn transform_direction<'a>(out: &'a mut Vec4, v: &Vec3, m: &Mat4) -> &'a mut Vec4 {
    let (x, y, z) = (v[0], v[1], v[2]);
    out[0] = m[0] * x + m[4] * y + m[8] * z;
    out[1] = m[1] * x + m[5] * y + m[9] * z;
    out[2] = m[2] * x + m[6] * y + m[10] * z;
    out[3] = m[3] * x + m[7] * y + m[11] * z;
    out
}

/// Transforms point `p` (implicit `w = 1`) by an affine `m`.
pub fn transform_point<'a>(out: &'a mut Vec3, p: &Vec3, m: &Mat4) -> &'a mut Vec3 {
    let (x, y, z) = (p[0], p[1], p[2]);
    out[0] = m[0] * x + m[4] * y + m[8] * z + m[12];
    out[1] = m[1] * x + m[5] * y + m[9] * z + m[13];
    out[2] = m[2] * x + m[6] * y + m[10] * z + m[14];
    out
}

pub fn to_glam(m: &Mat4) -> glam::Mat4 {
    glam::Mat4::from_cols_array(m)
}

pub fn from_glam(m: glam::Mat4) -> Mat4 {
    m.to_cols_array()
}
