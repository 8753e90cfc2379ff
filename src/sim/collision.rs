//! Ground contact detection and bounce response
//!
//! A sample above the ground threshold continues the arc. At or below it the
//! ball either rebounds with reduced vertical speed or comes to rest. The
//! decision is made on the rebound speed, not the impact speed, so a bounce
//! too small to clear the threshold on the next tick never starts.
//!
//! Horizontal position stays on the tick sample so `x` keeps pace with the
//! flight clock. Only the vertical impact speed is taken at the exact contact
//! time; the overshooting sample would add up to `g·dt` to it every bounce.

use glam::Vec2;

use super::arc::{FlightArc, FlightSample};
use crate::consts::{BALL_RADIUS, MIN_BOUNCE_VELOCITY};

/// Outcome of checking one tick sample against the ground
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroundContact {
    /// Still airborne
    Continue,
    /// Rebounded; the flight continues on a fresh arc
    Bounce(FlightArc),
    /// Came to rest; the sample is the final resting state (velocity zeroed)
    Land(FlightSample),
}

/// Classify a tick sample taken on `arc`.
///
/// Restitution 0 is the no-bounce case: every contact lands.
pub fn resolve_ground_contact(
    arc: &FlightArc,
    sample: &FlightSample,
    gravity: f32,
    restitution: f32,
) -> GroundContact {
    if sample.pos.y > BALL_RADIUS {
        return GroundContact::Continue;
    }

    let impact_speed = arc.contact_sample(gravity).vel.y.abs();
    let rebound = impact_speed * restitution;

    if rebound > MIN_BOUNCE_VELOCITY {
        GroundContact::Bounce(FlightArc::new(
            Vec2::new(sample.pos.x, BALL_RADIUS),
            Vec2::new(sample.vel.x, rebound),
        ))
    } else {
        GroundContact::Land(FlightSample {
            pos: Vec2::new(sample.pos.x, BALL_RADIUS),
            vel: Vec2::ZERO,
        })
    }
}
