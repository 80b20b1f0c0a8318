//! 4x4 Matrix utilities for model transforms
//!
//! Matrices are column-major: `m[col][row]`, with the translation stored in
//! column 3. This matches the layout the renderer uploads.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Translation matrix
pub fn from_translation(t: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = t.x;
    m[3][1] = t.y;
    m[3][2] = t.z;
    m
}

/// Non-uniform scale matrix
pub fn from_scale(s: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = s.x;
    m[1][1] = s.y;
    m[2][2] = s.z;
    m
}

/// Model matrix for a uniformly scaled object placed at `t`
///
/// Equivalent to `mul(from_translation(t), from_scale(splat(scale)))`:
/// the scale is applied first, around the object's own origin.
pub fn from_translation_scale(t: Vec3, scale: f32) -> Mat4 {
    mul(from_translation(t), from_scale(Vec3::splat(scale)))
}

/// Transform a point (w = 1) by a 4x4 matrix
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    #[test]
    fn test_identity_mul() {
        let t = from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(mul(IDENTITY, t), t);
        assert_eq!(mul(t, IDENTITY), t);
    }

    #[test]
    fn test_translation_column() {
        let t = from_translation(Vec3::new(5.0, -1.0, 2.0));
        assert_eq!(t[3], [5.0, -1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_translation_scale_order() {
        // Scale first, then translate: a unit offset becomes `scale` units away from `t`
        let m = from_translation_scale(Vec3::new(5.0, 0.0, 0.0), 2.0);
        let p = transform_point(m, Vec3::new(0.5, 0.0, 0.0));
        assert!(vec_approx_eq(p, Vec3::new(6.0, 0.0, 0.0)));
    }

    #[test]
    fn test_unit_scale_is_translation() {
        let t = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(from_translation_scale(t, 1.0), from_translation(t));
    }

    #[test]
    fn test_scale_diagonal() {
        let m = from_scale(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(m[0][0], 2.0);
        assert_eq!(m[1][1], 3.0);
        assert_eq!(m[2][2], 4.0);
        assert_eq!(m[3][3], 1.0);
    }
}
