//! Lowest-vertex contact search against the ground plane.
//!
//! Every local vertex is rotated by the die's current Euler rotation,
//! offset by its position, and measured against the plane. The vertex with
//! the minimum signed distance is the contact candidate — the single lowest
//! point of the body, whether or not it penetrates.

use crate::orientation::rotate_point;
use crate::types::Vec3;

/// The contact candidate for one die against the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    /// The rotated vertex, relative to the die's center (the contact arm)
    pub local: Vec3,
    /// The vertex in world space
    pub world: Vec3,
    /// Signed distance of the vertex above the plane (negative = penetrating)
    pub distance: f64,
}

/// Find the vertex of minimum signed distance to the plane.
///
/// Ties keep the first vertex found (strict `<` comparison). Returns `None`
/// only for an empty vertex list, which valid geometry never produces.
pub fn lowest_vertex(
    vertices: &[Vec3],
    rotation: Vec3,
    position: Vec3,
    plane_y: f64,
) -> Option<GroundContact> {
    let mut contact: Option<GroundContact> = None;

    for &vertex in vertices {
        let local = rotate_point(vertex, rotation);
        let world = position + local;
        let distance = world.y - plane_y;
        if contact.map_or(true, |c| distance < c.distance) {
            contact = Some(GroundContact {
                local,
                world,
                distance,
            });
        }
    }

    contact
}

// =============================================================================
// Tests
// =============================================================================
