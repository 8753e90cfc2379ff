//! Cricket Flight - projectile flight simulation for a launched ball
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, ground bounce, preview, flight state)
//! - `settings`: JSON configuration for the driver
//! - `export`: Delimited stats export
//! - `swing`: Cosmetic bat swing timeline (presentation side)
//! - `platform`: Frame clock and browser bindings

pub mod export;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod swing;

pub use settings::{Settings, SettingsError};
pub use sim::{FlightPhase, Simulation, SimulationConfig, Stats};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Launch origin x, shared by the live arc and the predictor
    pub const LAUNCH_X: f32 = 0.0;
    /// Launch height above the ground (m); also the max-height baseline
    pub const LAUNCH_HEIGHT: f32 = 1.2;
    /// Ball radius (m). Contact with the ground registers at y <= this.
    pub const BALL_RADIUS: f32 = 0.125;

    /// Largest dt a single tick will integrate (s)
    pub const MAX_TICK_DT: f32 = 0.05;
    /// Rebound speeds at or below this end the flight (m/s)
    pub const MIN_BOUNCE_VELOCITY: f32 = 0.5;

    /// Maximum number of trail points kept
    pub const TRAIL_CAPACITY: usize = 600;
    /// Predictor subdivisions (samples are taken at 0..=N)
    pub const PREDICTION_STEPS: usize = 120;

    /// Launch angle range (degrees)
    pub const MIN_ANGLE: f32 = 0.0;
    pub const MAX_ANGLE: f32 = 90.0;
    /// Launch speed range (m/s)
    pub const MIN_SPEED: f32 = 5.0;
    pub const MAX_SPEED: f32 = 50.0;
    /// Gravity range (m/s²); the lower bound keeps flight time finite
    pub const MIN_GRAVITY: f32 = 0.01;
    pub const MAX_GRAVITY: f32 = 20.0;
    /// Restitution range; must stay below 1 so bounces die out
    pub const MIN_RESTITUTION: f32 = 0.0;
    pub const MAX_RESTITUTION: f32 = 0.95;

    /// Defaults
    pub const DEFAULT_ANGLE: f32 = 45.0;
    pub const DEFAULT_SPEED: f32 = 28.0;
    pub const DEFAULT_GRAVITY: f32 = 9.8;
    pub const DEFAULT_RESTITUTION: f32 = 0.6;
}

/// The launch origin as a point
#[inline]
pub fn launch_origin() -> Vec2 {
    Vec2::new(consts::LAUNCH_X, consts::LAUNCH_HEIGHT)
}

/// Decompose a launch (angle in degrees, speed) into a velocity vector
#[inline]
pub fn launch_velocity(angle_deg: f32, speed: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(speed * rad.cos(), speed * rad.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_velocity_components() {
        let v = launch_velocity(90.0, 10.0);
        assert!(v.x.abs() < 1e-5);
        assert!((v.y - 10.0).abs() < 1e-5);

        let v = launch_velocity(0.0, 12.0);
        assert!((v.x - 12.0).abs() < 1e-5);
        assert_eq!(v.y, 0.0);
    }
}
