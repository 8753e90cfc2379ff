//! Closed-form kinematics for one parabolic flight arc
//!
//! An arc is defined by:
//! - origin: position at the start of the arc (launch or bounce point)
//! - velocity: initial velocity at the origin
//! - elapsed: time spent on this arc so far
//!
//! Position and velocity are evaluated exactly at any elapsed time, so there
//! is no accumulated integration error across ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::BALL_RADIUS;

/// Position and velocity at one instant of an arc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightSample {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// A single parabolic flight segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightArc {
    /// Start position of the arc
    pub origin: Vec2,
    /// Velocity at the origin
    pub velocity: Vec2,
    /// Seconds since the arc started
    pub elapsed: f32,
}

impl FlightArc {
    pub fn new(origin: Vec2, velocity: Vec2) -> Self {
        Self {
            origin,
            velocity,
            elapsed: 0.0,
        }
    }

    /// Evaluate the arc at an arbitrary time since its origin
    #[inline]
    pub fn sample_at(&self, t: f32, gravity: f32) -> FlightSample {
        FlightSample {
            pos: Vec2::new(
                self.origin.x + self.velocity.x * t,
                self.origin.y + self.velocity.y * t - 0.5 * gravity * t * t,
            ),
            vel: Vec2::new(self.velocity.x, self.velocity.y - gravity * t),
        }
    }

    /// Evaluate the arc at its current elapsed time
    #[inline]
    pub fn sample(&self, gravity: f32) -> FlightSample {
        self.sample_at(self.elapsed, gravity)
    }

    /// Move the arc clock forward by `dt` and return the new sample.
    ///
    /// The caller is responsible for clamping `dt`.
    pub fn advance(&mut self, dt: f32, gravity: f32) -> FlightSample {
        self.elapsed += dt;
        self.sample(gravity)
    }

    /// Time at which the arc descends through the ground threshold
    pub fn contact_time(&self, gravity: f32) -> f32 {
        // y0 + vy*t - g/2*t² = r, descending root
        let drop = (self.origin.y - BALL_RADIUS).max(0.0);
        let vy = self.velocity.y;
        let disc = (vy * vy + 2.0 * gravity * drop).max(0.0);
        ((vy + disc.sqrt()) / gravity).max(0.0)
    }

    /// Exact sample at ground contact.
    ///
    /// The tick sample that first reaches the ground has overshot by up to one
    /// dt; its vertical speed is larger than the true impact speed.
    pub fn contact_sample(&self, gravity: f32) -> FlightSample {
        let t = self.contact_time(gravity);
        let mut sample = self.sample_at(t, gravity);
        sample.pos.y = BALL_RADIUS;
        sample
    }

    /// Time from origin to the top of the arc (zero if already descending)
    pub fn time_to_apex(&self, gravity: f32) -> f32 {
        (self.velocity.y / gravity).max(0.0)
    }

    /// Highest point reached on this arc
    pub fn apex(&self, gravity: f32) -> Vec2 {
        self.sample_at(self.time_to_apex(gravity), gravity).pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: f32 = 9.8;

    #[test]
    fn test_sample_matches_closed_form() {
        let arc = FlightArc::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        let s = arc.sample_at(0.5, G);
        assert!((s.pos.x - 2.5).abs() < 1e-5);
        assert!((s.pos.y - (2.0 + 2.0 - 0.5 * G * 0.25)).abs() < 1e-5);
        assert_eq!(s.vel.x, 3.0);
        assert!((s.vel.y - (4.0 - G * 0.5)).abs() < 1e-5);
    }

    #[test]
    fn test_advance_accumulates_elapsed() {
        let mut arc = FlightArc::new(Vec2::new(0.0, 1.2), Vec2::new(10.0, 10.0));
        arc.advance(0.1, G);
        let s = arc.advance(0.1, G);
        assert!((arc.elapsed - 0.2).abs() < 1e-6);
        assert_eq!(s, arc.sample_at(arc.elapsed, G));
    }

    #[test]
    fn test_contact_from_ground_is_symmetric() {
        // Arc starting on the ground lands with the speed it left with
        let arc = FlightArc::new(Vec2::new(0.0, BALL_RADIUS), Vec2::new(2.0, 5.0));
        let t = arc.contact_time(G);
        assert!((t - 2.0 * 5.0 / G).abs() < 1e-4);

        let contact = arc.contact_sample(G);
        assert_eq!(contact.pos.y, BALL_RADIUS);
        assert!((contact.vel.y + 5.0).abs() < 1e-4);
        assert!((contact.pos.x - 2.0 * t).abs() < 1e-4);
    }

    #[test]
    fn test_contact_from_height_with_flat_launch() {
        let arc = FlightArc::new(Vec2::new(0.0, 1.2), Vec2::new(10.0, 0.0));
        let t = arc.contact_time(G);
        let expected = (2.0 * (1.2 - BALL_RADIUS) / G).sqrt();
        assert!((t - expected).abs() < 1e-5);
    }

    #[test]
    fn test_apex() {
        let arc = FlightArc::new(Vec2::new(0.0, 1.2), Vec2::new(4.0, 9.8));
        let apex = arc.apex(G);
        assert!((apex.x - 4.0).abs() < 1e-4);
        assert!((apex.y - (1.2 + 9.8 * 9.8 / (2.0 * G))).abs() < 1e-4);
    }
}
