//! Bounce observability hook.
//!
//! The physics step emits a [`BounceEvent`] whenever a contact impulse is
//! applied, instead of writing diagnostics to a text sink or playing a
//! sound itself. Callers subscribe by implementing [`ContactListener`]
//! (sound trigger, metrics counter, log line). Listeners must be
//! fire-and-forget: the step never waits on them, and a listener that
//! blocks stalls the whole simulation.

use crate::types::Vec3;

/// One resolved bounce, captured after the impulse has been applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceEvent {
    /// World-space contact point
    pub contact_point: Vec3,
    /// Applied normal impulse magnitude
    pub impulse: f64,
    /// Post-impulse linear velocity
    pub velocity: Vec3,
    /// Post-impulse angular velocity (degrees/s)
    pub angular_velocity: Vec3,
    /// Linear kinetic energy after the impulse: ½·m·|v|²
    pub linear_energy: f64,
    /// Angular kinetic energy after the impulse: ½·Σ Iᵢᵢ·ωᵢ²
    pub angular_energy: f64,
}

impl BounceEvent {
    /// Total kinetic energy after the impulse
    pub fn total_energy(&self) -> f64 {
        self.linear_energy + self.angular_energy
    }
}

/// Receiver for bounce side effects.
pub trait ContactListener {
    fn on_bounce(&mut self, event: &BounceEvent);
}

/// Listener that ignores every event.
pub struct NullListener;

impl ContactListener for NullListener {
    fn on_bounce(&mut self, _event: &BounceEvent) {}
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_energy() {
        let event = BounceEvent {
            contact_point: Vec3::ZERO,
            impulse: 1.0,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            linear_energy: 0.25,
            angular_energy: 0.5,
        };
        assert_eq!(event.total_energy(), 0.75);
    }
}
