//! Rotation of local-space points by the die's Euler rotation.
//!
//! The rotation is applied as three chained 2D rotations — around X, then
//! Y, then Z — not as a combined rotation matrix or quaternion. The two are
//! not numerically identical, and the settling behavior observably depends
//! on this exact composition; `test_sequential_composition_is_not_additive`
//! pins it against refactors.

use crate::types::Vec3;

/// Rotate a local-space point by Euler angles given in degrees,
/// applying the X, Y, and Z axis rotations in that order.
///
/// The input is not normalized; scale is preserved.
pub fn rotate_point(point: Vec3, rotation_deg: Vec3) -> Vec3 {
    let rx = rotation_deg.x.to_radians();
    let ry = rotation_deg.y.to_radians();
    let rz = rotation_deg.z.to_radians();

    let Vec3 {
        mut x,
        mut y,
        mut z,
    } = point;

    // X axis
    let (sin_x, cos_x) = rx.sin_cos();
    let y1 = y * cos_x - z * sin_x;
    let z1 = y * sin_x + z * cos_x;
    y = y1;
    z = z1;

    // Y axis
    let (sin_y, cos_y) = ry.sin_cos();
    let x1 = x * cos_y + z * sin_y;
    let z1 = -x * sin_y + z * cos_y;
    x = x1;
    z = z1;

    // Z axis
    let (sin_z, cos_z) = rz.sin_cos();
    let x1 = x * cos_z - y * sin_z;
    let y1 = x * sin_z + y * cos_z;
    x = x1;
    y = y1;

    Vec3::new(x, y, z)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).magnitude() < 1e-10
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let p = Vec3::new(1.25, -3.5, 0.75);
        assert_eq!(rotate_point(p, Vec3::ZERO), p);
    }

    #[test]
    fn test_quarter_turns() {
        // 90° about X maps +Y to +Z
        let p = rotate_point(Vec3::new(0.0, 1.0, 0.0), Vec3::new(90.0, 0.0, 0.0));
        assert!(approx_eq(p, Vec3::new(0.0, 0.0, 1.0)), "got {:?}", p);

        // 90° about Y maps +X to -Z
        let p = rotate_point(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 90.0, 0.0));
        assert!(approx_eq(p, Vec3::new(0.0, 0.0, -1.0)), "got {:?}", p);

        // 90° about Z maps +X to +Y
        let p = rotate_point(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 90.0));
        assert!(approx_eq(p, Vec3::new(0.0, 1.0, 0.0)), "got {:?}", p);
    }

    #[test]
    fn test_scale_is_preserved() {
        let p = Vec3::new(2.0, -1.0, 4.0);
        let rotated = rotate_point(p, Vec3::new(31.0, -77.0, 143.0));
        assert!((rotated.magnitude() - p.magnitude()).abs() < 1e-10);
    }

    #[test]
    fn test_sequential_composition_is_not_additive() {
        // Applying r1 then r2 is not the same as applying r1 + r2: each
        // call re-runs the X→Y→Z chain, so the axis order interleaves
        // differently. Guards against "simplifying" to a combined matrix.
        let p = Vec3::new(1.0, 0.0, 0.0);
        let r1 = Vec3::new(0.0, 90.0, 0.0);
        let r2 = Vec3::new(90.0, 0.0, 0.0);

        let sequential = rotate_point(rotate_point(p, r1), r2);
        let combined = rotate_point(p, r1 + r2);

        assert!(approx_eq(sequential, Vec3::new(0.0, 1.0, 0.0)));
        assert!(approx_eq(combined, Vec3::new(0.0, 0.0, -1.0)));
        assert!(!approx_eq(sequential, combined));
    }
}
