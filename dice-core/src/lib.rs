//! # Dice Core
//!
//! A rigid-body physics engine for polyhedral dice rolling.
//!
//! ## Architecture
//!
//! - `types`: Core data structures (Vec3, Mat3, shapes, material properties)
//! - `geometry`: Vertex/face/normal/color tables per die shape
//! - `inertia`: Diagonal inertia tensor model
//! - `orientation`: Sequential Euler rotation of local-space points
//! - `collision`: Ground-contact detection and impulse resolution
//! - `events`: Bounce observability hook
//! - `die`: The simulated die, its per-substep update, and result
//!   classification
//! - `materials`: YAML-based surface/die preset loader
//! - `simulation`: Caller-owned simulation context and substep driver

pub mod collision;
pub mod die;
pub mod events;
pub mod geometry;
pub mod inertia;
pub mod materials;
pub mod orientation;
pub mod simulation;
pub mod types;
