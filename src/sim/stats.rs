//! Flight statistics published every tick
//!
//! Heights are measured from the launch baseline, distances from the launch x.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{LAUNCH_HEIGHT, LAUNCH_X};

/// Snapshot of flight statistics
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Horizontal velocity (m/s)
    pub velocity_x: f32,
    /// Vertical velocity (m/s)
    pub velocity_y: f32,
    /// Highest point so far above the launch baseline (m)
    pub max_height: f32,
    /// Horizontal distance from the launch point (m)
    pub range: f32,
    /// Total flight time across all bounces (s)
    pub elapsed_time: f32,
    /// Current height above the launch baseline (m)
    pub current_height: f32,
}

impl Stats {
    /// Record one airborne sample. `dt` is the clamped tick length.
    pub fn record(&mut self, pos: Vec2, vel: Vec2, dt: f32) {
        let height = pos.y - LAUNCH_HEIGHT;
        self.velocity_x = vel.x;
        self.velocity_y = vel.y;
        self.max_height = self.max_height.max(height);
        self.range = pos.x - LAUNCH_X;
        self.elapsed_time += dt;
        self.current_height = height;
    }

    /// Final snapshot when the ball comes to rest.
    ///
    /// Velocity is zeroed and `max_height` is kept, so the values stay frozen
    /// until the next launch or reset.
    pub fn record_landing(&mut self, pos: Vec2, dt: f32) {
        self.velocity_x = 0.0;
        self.velocity_y = 0.0;
        self.range = pos.x - LAUNCH_X;
        self.elapsed_time += dt;
        self.current_height = 0.0;
    }

    /// Zero every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
