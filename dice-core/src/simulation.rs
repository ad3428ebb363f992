//! Simulation context: the die, its surface, and the substep driver.
//!
//! A [`Simulation`] owns everything one roll needs — no module-level state.
//! The caller either drives fixed substeps directly (`step`), splits a
//! rendered frame into substeps the way the interactive driver does
//! (`advance_frame`, 5 substeps of a 60 Hz frame by default), or runs the
//! die to rest in one call (`run_to_rest`).

use crate::die::{Die, RollError};
use crate::events::{ContactListener, NullListener};
use crate::types::{constants, SurfaceProperties, Vec3};

/// One die, its ground plane, and the stepping policy.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub die: Die,
    pub surface: SurfaceProperties,
    pub plane_y: f64,
    /// Physics substeps per rendered frame
    pub substeps: usize,
    /// Accumulated simulated time in seconds
    pub time: f64,
}

impl Simulation {
    /// Create a simulation around a die with the default surface, plane
    /// height, and substep policy.
    pub fn new(die: Die) -> Self {
        Self {
            die,
            surface: SurfaceProperties::default(),
            plane_y: constants::DEFAULT_PLANE_Y,
            substeps: constants::DEFAULT_SUBSTEPS,
            time: 0.0,
        }
    }

    /// Trigger a roll on the owned die.
    pub fn roll(&mut self, velocity: Vec3, angular_velocity: Vec3) -> Result<(), RollError> {
        self.die.start_roll(velocity, angular_velocity)
    }

    /// Advance by one fixed substep.
    pub fn step(&mut self, dt: f64) {
        self.step_with(dt, &mut NullListener);
    }

    /// Advance by one fixed substep, forwarding bounce events.
    pub fn step_with<L: ContactListener>(&mut self, dt: f64, listener: &mut L) {
        self.die.step_with(dt, self.plane_y, &self.surface, listener);
        self.time += dt;
    }

    /// Advance by one rendered frame, split into `substeps` physics steps.
    pub fn advance_frame(&mut self, frame_dt: f64) {
        self.advance_frame_with(frame_dt, &mut NullListener);
    }

    /// Advance by one rendered frame, forwarding bounce events.
    pub fn advance_frame_with<L: ContactListener>(&mut self, frame_dt: f64, listener: &mut L) {
        let substeps = self.substeps.max(1);
        let dt = frame_dt / substeps as f64;
        for _ in 0..substeps {
            self.step_with(dt, listener);
        }
    }

    /// Step at the default timestep until the die sleeps or `max_time`
    /// simulated seconds have elapsed. Returns the settled face, or `None`
    /// if the die was still moving at the deadline.
    pub fn run_to_rest(&mut self, max_time: f64) -> Option<u32> {
        self.run_to_rest_with(max_time, &mut NullListener)
    }

    /// `run_to_rest`, forwarding bounce events.
    pub fn run_to_rest_with<L: ContactListener>(
        &mut self,
        max_time: f64,
        listener: &mut L,
    ) -> Option<u32> {
        let deadline = self.time + max_time;
        while self.time < deadline && !self.die.is_sleeping() {
            self.step_with(constants::DEFAULT_TIMESTEP, listener);
        }
        self.die.result()
    }
}

// =============================================================================
// Tests
// =============================================================================
