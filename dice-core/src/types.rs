//! Core types for the dice physics simulation.
//!
//! Units:
//! - Position: length units (the die's `size` sets the scale)
//! - Velocity: length units per second
//! - Rotation: Euler angles in degrees, applied X then Y then Z
//! - Angular velocity: degrees per second
//! - Mass: arbitrary mass units (shape-derived constants)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

// =============================================================================
// Vec3 - 3D Vector
// =============================================================================

/// A 3D vector used for positions, velocities, rotations, and normals.
///
/// Coordinate system:
/// - X, Z: horizontal, spanning the ground plane
/// - Y: vertical (positive upward; the ground plane sits at a fixed Y)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared magnitude (avoids sqrt for comparisons)
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Magnitude (length) of the vector
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a unit vector in the same direction, or zero if magnitude is zero
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag < constants::EPSILON {
            Self::ZERO
        } else {
            *self / mag
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

// Operator overloads for Vec3
impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::ZERO
    }
}

// =============================================================================
// Mat3 - 3x3 Matrix
// =============================================================================

/// A 3×3 matrix, used for the diagonal inertia tensor and its inverse.
///
/// The tensors this engine produces are diagonal, but the matrix-vector
/// product is kept general so the angular-impulse update reads as the full
/// tensor contraction it stands for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// All-zero matrix
    pub fn zeros() -> Self {
        Self { m: [[0.0; 3]; 3] }
    }

    /// Diagonal matrix with the same entry on every diagonal element
    pub fn diagonal(d: f64) -> Self {
        let mut out = Self::zeros();
        for i in 0..3 {
            out.m[i][i] = d;
        }
        out
    }

    /// Diagonal entry i
    pub fn diag(&self, i: usize) -> f64 {
        self.m[i][i]
    }

    /// Matrix-vector product
    pub fn mul_vec(&self, v: Vec3) -> Vec3 {
        Vec3 {
            x: self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            y: self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            z: self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        }
    }
}

// =============================================================================
// Die Shape
// =============================================================================

/// The supported die shapes.
///
/// A closed enum rather than a stored side count: geometry, inertia, and
/// result classification branch exhaustively on the variant, and the result
/// conventions have only been validated for these two shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieShape {
    Tetrahedron,
    Cube,
}

impl DieShape {
    /// Number of faces (and therefore the maximum roll result)
    pub fn face_count(&self) -> usize {
        match self {
            DieShape::Tetrahedron => 4,
            DieShape::Cube => 6,
        }
    }

    /// Shape-derived mass constant
    pub fn mass(&self) -> f64 {
        match self {
            DieShape::Tetrahedron => 0.8,
            DieShape::Cube => 1.0,
        }
    }

    /// Shape for a given side count, if supported
    pub fn from_sides(sides: u32) -> Option<Self> {
        match sides {
            4 => Some(DieShape::Tetrahedron),
            6 => Some(DieShape::Cube),
            _ => None,
        }
    }
}

impl fmt::Display for DieShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DieShape::Tetrahedron => write!(f, "d4"),
            DieShape::Cube => write!(f, "d6"),
        }
    }
}

// =============================================================================
// Material Properties
// =============================================================================

/// Physical properties of the surface the dice land on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceProperties {
    pub name: String,
    pub restitution: f64,
    pub friction: f64,
}

impl SurfaceProperties {
    /// Casino felt, the reference surface the settling behavior was tuned on
    pub fn casino_felt() -> Self {
        Self {
            name: "Casino Felt".to_string(),
            restitution: constants::RESTITUTION,
            friction: constants::FRICTION,
        }
    }
}

impl Default for SurfaceProperties {
    fn default() -> Self {
        Self::casino_felt()
    }
}

/// Construction parameters for a die.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DieProperties {
    pub name: String,
    pub shape: DieShape,
    pub size: f64,
}

impl DieProperties {
    /// Standard six-sided die
    pub fn standard_d6() -> Self {
        Self {
            name: "Standard D6".to_string(),
            shape: DieShape::Cube,
            size: 1.5,
        }
    }
}

impl Default for DieProperties {
    fn default() -> Self {
        Self::standard_d6()
    }
}

// =============================================================================
// Physical Constants
// =============================================================================

/// Physical constants used in the simulation.
pub mod constants {
    /// Gravitational acceleration (length/s²)
    pub const GRAVITY: f64 = 9.81;

    /// Default coefficient of restitution for die-ground contact
    pub const RESTITUTION: f64 = 0.6;

    /// Default friction coefficient for die-ground contact
    pub const FRICTION: f64 = 0.8;

    /// Minimum dot product between a rotated face normal and world-up for
    /// the die to count as resting on a face
    pub const STABLE_THRESHOLD: f64 = 0.98;

    /// Signed distance below which the lowest vertex counts as touching
    /// the ground
    pub const CONTACT_EPSILON: f64 = 0.01;

    /// Upper bound on the contact impulse, limiting energy injection from
    /// numerical spikes at high approach speeds
    pub const MAX_IMPULSE: f64 = 10.0;

    /// Tangential speed below which the contact is treated as non-sliding
    /// and the angular velocity is hard-damped to zero
    pub const TANGENT_EPSILON: f64 = 1e-6;

    /// Per-axis linear speed bound for settlement
    pub const SLEEP_LINEAR_THRESHOLD: f64 = 0.1;

    /// Per-axis angular speed bound for settlement (degrees/s)
    pub const SLEEP_ANGULAR_THRESHOLD: f64 = 0.5;

    /// Continuous ground-contact time required before settlement (seconds)
    pub const GROUNDED_TIME_THRESHOLD: f64 = 0.1;

    /// Default ground plane height
    pub const DEFAULT_PLANE_Y: f64 = -2.0;

    /// Default physics substep: 5 substeps of a 60 Hz frame
    pub const DEFAULT_TIMESTEP: f64 = 1.0 / 300.0;

    /// Default number of physics substeps per rendered frame
    pub const DEFAULT_SUBSTEPS: usize = 5;

    /// Small value for floating-point comparisons
    pub const EPSILON: f64 = 1e-10;
}

// =============================================================================
// Tests
// =============================================================================
