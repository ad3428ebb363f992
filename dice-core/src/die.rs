//! The simulated die: state, per-substep update, and result classification.
//!
//! A die is in exactly one of three phases:
//!
//! ```text
//! Idle ──start_roll──▶ Active ──settled──▶ Sleeping
//!                        ▲                     │
//!                        └─────start_roll──────┘
//! ```
//!
//! While active, each fixed substep integrates gravity, position, and
//! rotation, searches for ground contact at the lowest vertex, resolves the
//! impulse, and checks the settlement criteria. Once sleeping, the die is
//! inert until the next roll; the settled face is frozen in `result`.

use crate::collision::{lowest_vertex, resolve_ground_contact, GroundContact};
use crate::events::{BounceEvent, ContactListener, NullListener};
use crate::geometry::{self, DieGeometry, GeometryError};
use crate::inertia;
use crate::orientation::rotate_point;
use crate::types::{constants, DieProperties, DieShape, Mat3, SurfaceProperties, Vec3};
use std::fmt;

/// Error type for roll triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollError {
    /// A roll was triggered while the die was still in motion.
    AlreadyRolling,
}

impl fmt::Display for RollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollError::AlreadyRolling => write!(f, "die is still rolling"),
        }
    }
}

impl std::error::Error for RollError {}

/// A rigid polyhedral die falling onto an infinite horizontal plane.
///
/// `position` and `rotation` are public so a renderer can compose its
/// transform and a caller can place the die before rolling; the phase
/// flags, grounded timer, and result are private because the settlement
/// invariants depend on them changing together.
#[derive(Debug, Clone)]
pub struct Die {
    shape: DieShape,
    size: f64,
    geometry: DieGeometry,
    mass: f64,
    inertia_tensor: Mat3,
    inv_inertia_tensor: Mat3,

    /// Center position in world space
    pub position: Vec3,
    /// Euler rotation in degrees, applied X then Y then Z, each axis
    /// wrapped into [0, 360)
    pub rotation: Vec3,
    /// Linear velocity
    pub velocity: Vec3,
    /// Angular velocity in degrees/s
    pub angular_velocity: Vec3,

    is_rolling: bool,
    is_sleeping: bool,
    grounded_timer: f64,
    result: u32,
}

impl Die {
    /// Construct an idle die of the given shape and size.
    ///
    /// Mass and the inertia tensors are derived from the shape and never
    /// change afterwards; a different shape means a fresh die, not a
    /// mutation. Position starts at the origin and is caller-assigned.
    pub fn new(shape: DieShape, size: f64) -> Result<Self, GeometryError> {
        let geometry = geometry::build(shape, size)?;
        let mass = shape.mass();
        let inertia_tensor = inertia::inertia_tensor(shape, mass, size);
        let inv_inertia_tensor = inertia::inverse_inertia_tensor(&inertia_tensor);

        Ok(Self {
            shape,
            size,
            geometry,
            mass,
            inertia_tensor,
            inv_inertia_tensor,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            is_rolling: false,
            is_sleeping: false,
            grounded_timer: 0.0,
            result: 0,
        })
    }

    /// Construct from a loaded preset.
    pub fn from_properties(props: &DieProperties) -> Result<Self, GeometryError> {
        Self::new(props.shape, props.size)
    }

    pub fn shape(&self) -> DieShape {
        self.shape
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn geometry(&self) -> &DieGeometry {
        &self.geometry
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inertia_tensor(&self) -> &Mat3 {
        &self.inertia_tensor
    }

    pub fn inv_inertia_tensor(&self) -> &Mat3 {
        &self.inv_inertia_tensor
    }

    pub fn is_rolling(&self) -> bool {
        self.is_rolling
    }

    pub fn is_sleeping(&self) -> bool {
        self.is_sleeping
    }

    /// Accumulated seconds of continuous near-ground contact
    pub fn grounded_timer(&self) -> f64 {
        self.grounded_timer
    }

    /// The settled face, 1-based; `None` until the die is sleeping
    pub fn result(&self) -> Option<u32> {
        if self.is_sleeping {
            Some(self.result)
        } else {
            None
        }
    }

    /// The die's vertices rotated and translated into world space.
    pub fn world_vertices(&self) -> Vec<Vec3> {
        self.geometry
            .vertices
            .iter()
            .map(|&v| self.position + rotate_point(v, self.rotation))
            .collect()
    }

    /// Begin a roll with fresh linear and angular velocity.
    ///
    /// Valid while idle or sleeping; a trigger during active motion is
    /// rejected so a roll can never restart from partial state.
    pub fn start_roll(
        &mut self,
        velocity: Vec3,
        angular_velocity: Vec3,
    ) -> Result<(), RollError> {
        if self.is_rolling {
            return Err(RollError::AlreadyRolling);
        }

        self.velocity = velocity;
        self.angular_velocity = angular_velocity;
        self.is_rolling = true;
        self.is_sleeping = false;
        self.result = 0;
        self.grounded_timer = 0.0;
        Ok(())
    }

    /// Advance the die by one fixed substep. No-op while idle or sleeping.
    pub fn step(&mut self, dt: f64, plane_y: f64, surface: &SurfaceProperties) {
        self.step_with(dt, plane_y, surface, &mut NullListener);
    }

    /// Advance the die by one fixed substep, notifying `listener` of every
    /// applied bounce impulse.
    pub fn step_with<L: ContactListener>(
        &mut self,
        dt: f64,
        plane_y: f64,
        surface: &SurfaceProperties,
        listener: &mut L,
    ) {
        if self.is_sleeping || !self.is_rolling {
            return;
        }

        // gravity
        self.velocity.y += -constants::GRAVITY * dt;

        // position
        self.position += self.velocity * dt;

        // rotation, each axis wrapped into [0, 360)
        self.rotation += self.angular_velocity * dt;
        self.rotation = Vec3::new(
            self.rotation.x.rem_euclid(360.0),
            self.rotation.y.rem_euclid(360.0),
            self.rotation.z.rem_euclid(360.0),
        );

        // ground contact at the lowest vertex
        if let Some(contact) =
            lowest_vertex(&self.geometry.vertices, self.rotation, self.position, plane_y)
        {
            if contact.distance < constants::CONTACT_EPSILON {
                let response = resolve_ground_contact(
                    self.velocity,
                    self.angular_velocity,
                    self.mass,
                    &self.inv_inertia_tensor,
                    &contact,
                    surface,
                );
                if response.impulse > 0.0 {
                    self.velocity = response.velocity;
                    self.angular_velocity = response.angular_velocity;
                    self.position.y += response.lift;
                    let event = self.bounce_event(&contact, response.impulse);
                    listener.on_bounce(&event);
                }
                self.grounded_timer += dt;
            } else {
                self.grounded_timer = 0.0;
            }
        }

        // settlement
        if self.grounded_timer > constants::GROUNDED_TIME_THRESHOLD
            && self.is_stable()
            && within(self.velocity, constants::SLEEP_LINEAR_THRESHOLD)
            && within(self.angular_velocity, constants::SLEEP_ANGULAR_THRESHOLD)
        {
            self.is_rolling = false;
            self.is_sleeping = true;
            self.result = self.determine_result();
        }
    }

    /// Whether some face normal, rotated into world space, points nearly
    /// straight up — the rest-detection signal.
    pub fn is_stable(&self) -> bool {
        let up = Vec3::new(0.0, 1.0, 0.0);
        self.geometry
            .normals
            .iter()
            .any(|&normal| rotate_point(normal, self.rotation).dot(&up) >= constants::STABLE_THRESHOLD)
    }

    /// Classify the settled face, 1-based.
    ///
    /// Tetrahedron: the face whose rotated normal is closest to pointing
    /// straight down (the face read off the ground). Cube: the face whose
    /// rotated normal points most nearly up. The asymmetry matches each
    /// shape's conventional read-off face; ties keep the first face in
    /// table order.
    fn determine_result(&self) -> u32 {
        match self.shape {
            DieShape::Tetrahedron => {
                let down = Vec3::new(0.0, -1.0, 0.0);
                let mut result = 1;
                let mut min_dot = 2.0;
                for (i, &normal) in self.geometry.normals.iter().enumerate() {
                    let dot = rotate_point(normal, self.rotation).dot(&down);
                    if 1.0 - dot < min_dot {
                        min_dot = 1.0 - dot;
                        result = (i + 1) as u32;
                    }
                }
                result
            }
            DieShape::Cube => {
                let up = Vec3::new(0.0, 1.0, 0.0);
                let mut result = 1;
                let mut max_dot = -2.0;
                for (i, &normal) in self.geometry.normals.iter().enumerate() {
                    let dot = rotate_point(normal, self.rotation).dot(&up);
                    if dot > max_dot {
                        max_dot = dot;
                        result = (i + 1) as u32;
                    }
                }
                result
            }
        }
    }

    fn bounce_event(&self, contact: &GroundContact, impulse: f64) -> BounceEvent {
        let w = self.angular_velocity;
        let linear_energy = 0.5 * self.mass * self.velocity.magnitude_squared();
        let angular_energy = 0.5
            * (self.inertia_tensor.diag(0) * w.x * w.x
                + self.inertia_tensor.diag(1) * w.y * w.y
                + self.inertia_tensor.diag(2) * w.z * w.z);

        BounceEvent {
            contact_point: contact.world,
            impulse,
            velocity: self.velocity,
            angular_velocity: w,
            linear_energy,
            angular_energy,
        }
    }
}

fn within(v: Vec3, limit: f64) -> bool {
    v.x.abs() < limit && v.y.abs() < limit && v.z.abs() < limit
}

// =============================================================================
// Tests
// =============================================================================
