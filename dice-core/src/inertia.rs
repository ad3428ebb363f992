//! Inertia model: diagonal inertia tensors per die shape.
//!
//! The cube uses the solid-cube moment `m·s²/6`. The tetrahedron uses the
//! simplified isotropic value `m·s²/4` — a policy choice, not a
//! first-principles tetrahedron inertia derivation; the settling behavior
//! was tuned against it.

use crate::types::{DieShape, Mat3};

/// Diagonal inertia tensor for a shape of the given mass and size.
pub fn inertia_tensor(shape: DieShape, mass: f64, size: f64) -> Mat3 {
    match shape {
        DieShape::Cube => Mat3::diagonal(mass * size * size / 6.0),
        DieShape::Tetrahedron => Mat3::diagonal(mass * size * size / 4.0),
    }
}

/// Inverse of a diagonal inertia tensor.
///
/// Zero diagonal entries invert to zero rather than dividing: a locked axis
/// stays locked (infinite resistance) instead of producing a NaN.
pub fn inverse_inertia_tensor(tensor: &Mat3) -> Mat3 {
    let mut inv = Mat3::zeros();
    for i in 0..3 {
        let d = tensor.m[i][i];
        if d != 0.0 {
            inv.m[i][i] = 1.0 / d;
        }
    }
    inv
}

// =============================================================================
// Tests
// =============================================================================
