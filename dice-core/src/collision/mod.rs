//! Ground-contact detection and resolution for die physics.
//!
//! This module handles:
//! - **Detection**: Finding the single lowest vertex of the rotated die
//!   relative to the ground plane (the contact candidate)
//! - **Resolution**: Computing the post-contact velocities from an impulse
//!   with restitution, Coulomb-bounded friction, and penetration correction
//!
//! ## Single-Vertex Contact Model
//!
//! The die only ever collides with an infinite horizontal plane, so the
//! contact manifold is approximated by one point: the lowest vertex.
//!
//! ```text
//!        ╱╲
//!       ╱  ╲       rotated die
//!      ╱    ╲
//!      ╲    ╱
//!       ╲  ╱
//! ═══════╳═══════ ground plane
//!        └─ contact vertex (minimum signed distance)
//! ```
//!
//! The caller runs several fixed substeps per rendered frame, which keeps
//! this cheap approximation numerically stable for a convex die settling
//! onto a flat plane; a multi-contact solver is deliberately avoided.

pub mod detection;
pub mod resolution;

pub use detection::*;
pub use resolution::*;
