//! Impulse and friction resolution at the contact vertex.
//!
//! Computes post-contact velocities based on:
//! - Coefficient of restitution (bounciness), clamped impulse magnitude
//! - Coulomb-bounded friction converted to a torque about the contact arm
//! - Penetration correction along the plane normal
//!
//! ## Model Assumptions
//!
//! - **Ground as infinite mass**: the plane never moves, so the impulse
//!   denominator is the die's inverse mass alone — no angular term.
//! - **Single contact point**: the lowest vertex stands in for the whole
//!   contact manifold (see the module docs in `collision`).
//! - **Hard angular damping**: when the tangential speed at the contact is
//!   below `TANGENT_EPSILON` the angular velocity is zeroed outright rather
//!   than integrated to rest. A shortcut, not physically derived; it is
//!   what makes a nearly-flat die stop jittering within a few substeps.

use crate::collision::detection::GroundContact;
use crate::types::{constants, Mat3, SurfaceProperties, Vec3};

/// Ground plane normal (the plane is horizontal).
const PLANE_NORMAL: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Result of resolving one contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactResponse {
    /// Post-contact linear velocity
    pub velocity: Vec3,
    /// Post-contact angular velocity (degrees/s)
    pub angular_velocity: Vec3,
    /// Applied normal impulse magnitude; 0.0 when the contact was separating
    pub impulse: f64,
    /// Position correction along +Y (the penetration depth; negative when
    /// the vertex hovered inside the epsilon band above the plane, which
    /// snaps the die down onto it)
    pub lift: f64,
}

/// Resolve a ground contact for a body approaching the plane.
///
/// When the relative velocity at the contact point is separating, the state
/// passes through unchanged with a zero impulse; the caller still counts
/// the grounded time in that case.
pub fn resolve_ground_contact(
    velocity: Vec3,
    angular_velocity: Vec3,
    mass: f64,
    inv_inertia: &Mat3,
    contact: &GroundContact,
    surface: &SurfaceProperties,
) -> ContactResponse {
    // relative velocity at the contact point: v + ω × r
    let relative_velocity = velocity + angular_velocity.cross(&contact.local);
    let approach = relative_velocity.dot(&PLANE_NORMAL);

    if approach >= 0.0 {
        return ContactResponse {
            velocity,
            angular_velocity,
            impulse: 0.0,
            lift: 0.0,
        };
    }

    let impulse =
        (-(1.0 + surface.restitution) * approach / (1.0 / mass)).min(constants::MAX_IMPULSE);

    let new_velocity = velocity + PLANE_NORMAL * (impulse / mass);

    let tangent_velocity = relative_velocity - PLANE_NORMAL * approach;
    let tangent_magnitude = tangent_velocity.magnitude();

    let new_angular_velocity = if tangent_magnitude > constants::TANGENT_EPSILON {
        let friction_impulse = (impulse * surface.friction).min(tangent_magnitude);
        let arm = contact.local.cross(&PLANE_NORMAL);
        let angular_impulse = arm * impulse;
        let friction_torque = arm * friction_impulse;
        angular_velocity + inv_inertia.mul_vec(angular_impulse - friction_torque)
    } else {
        Vec3::ZERO
    };

    ContactResponse {
        velocity: new_velocity,
        angular_velocity: new_angular_velocity,
        impulse,
        lift: -contact.distance,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inertia;
    use crate::types::DieShape;

    fn corner_contact(distance: f64) -> GroundContact {
        let local = Vec3::new(0.75, -0.75, 0.75);
        GroundContact {
            local,
            world: Vec3::new(local.x, -2.0 + distance, local.z),
            distance,
        }
    }

    fn cube_inv_inertia() -> Mat3 {
        let tensor = inertia_tensor_for_cube();
        inertia::inverse_inertia_tensor(&tensor)
    }

    fn inertia_tensor_for_cube() -> Mat3 {
        inertia::inertia_tensor(DieShape::Cube, 1.0, 1.5)
    }

    #[test]
    fn test_separating_contact_is_untouched() {
        let response = resolve_ground_contact(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::ZERO,
            1.0,
            &cube_inv_inertia(),
            &corner_contact(-0.001),
            &SurfaceProperties::default(),
        );
        assert_eq!(response.impulse, 0.0);
        assert_eq!(response.lift, 0.0);
        assert_eq!(response.velocity, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_impulse_clamp_bounds_velocity_change() {
        // raw impulse would be (1 + 0.6) * 20 * mass = 32; the clamp caps
        // the normal velocity change at MAX_IMPULSE / mass = 10
        let response = resolve_ground_contact(
            Vec3::new(0.0, -20.0, 0.0),
            Vec3::ZERO,
            1.0,
            &cube_inv_inertia(),
            &corner_contact(-0.0001),
            &SurfaceProperties::default(),
        );
        assert_eq!(response.impulse, constants::MAX_IMPULSE);
        assert!((response.velocity.y - (-10.0)).abs() < 1e-12);
    }

    #[test]
    fn test_unclamped_bounce_restitution() {
        let response = resolve_ground_contact(
            Vec3::new(0.0, -3.0, 0.0),
            Vec3::ZERO,
            1.0,
            &cube_inv_inertia(),
            &corner_contact(-0.0001),
            &SurfaceProperties::default(),
        );
        // impulse = (1 + 0.6) * 3 * mass = 4.8; v_y: -3 + 4.8 = 1.8
        assert!((response.impulse - 4.8).abs() < 1e-12);
        assert!((response.velocity.y - 1.8).abs() < 1e-12);
    }

    #[test]
    fn test_near_zero_tangential_velocity_zeroes_spin() {
        // tangential speed at the contact stays below TANGENT_EPSILON, so
        // the residual spin must be hard-damped to exactly zero
        let response = resolve_ground_contact(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(1e-9, -1e-9, 1e-9),
            1.0,
            &cube_inv_inertia(),
            &corner_contact(-0.0001),
            &SurfaceProperties::default(),
        );
        assert_eq!(response.angular_velocity, Vec3::ZERO);
    }

    #[test]
    fn test_sliding_contact_generates_spin() {
        // horizontal motion at the contact produces a friction torque that
        // spins the die about the contact arm
        let response = resolve_ground_contact(
            Vec3::new(2.0, -3.0, 0.0),
            Vec3::ZERO,
            1.0,
            &cube_inv_inertia(),
            &corner_contact(-0.0001),
            &SurfaceProperties::default(),
        );
        // arm = r × n = (-0.75, 0, 0.75); net torque scale is
        // impulse - min(impulse * friction, |tangent|) = 4.8 - 2.0 > 0
        assert!(response.angular_velocity.x < 0.0);
        assert!(response.angular_velocity.z > 0.0);
        assert!((response.angular_velocity.x + response.angular_velocity.z).abs() < 1e-12);
    }

    #[test]
    fn test_lift_matches_penetration() {
        let response = resolve_ground_contact(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::ZERO,
            1.0,
            &cube_inv_inertia(),
            &corner_contact(-0.02),
            &SurfaceProperties::default(),
        );
        assert!((response.lift - 0.02).abs() < 1e-12);

        // hovering inside the epsilon band snaps the die down
        let response = resolve_ground_contact(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::ZERO,
            1.0,
            &cube_inv_inertia(),
            &corner_contact(0.005),
            &SurfaceProperties::default(),
        );
        assert!((response.lift + 0.005).abs() < 1e-12);
    }
}
