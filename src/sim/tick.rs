//! Flight state machine and per-tick advance
//!
//! Idle/Landed --launch--> Flying --tick--> Flying (continue or bounce)
//!                                      \--> Landed (at rest)
//! Any --reset--> Idle

use super::arc::FlightArc;
use super::collision::{GroundContact, resolve_ground_contact};
use super::predict::predict;
use super::state::{Flight, FlightEvent, FlightPhase, Simulation};
use crate::consts::MAX_TICK_DT;
use crate::{launch_origin, launch_velocity};

/// Edge-triggered commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start a flight (ignored while flying)
    pub launch: bool,
    /// Return to idle, clearing all flight state
    pub reset: bool,
}

/// Apply the input commands, then advance the simulation by `dt` seconds.
///
/// Reset is applied before launch so both in one tick start a fresh flight.
pub fn tick(sim: &mut Simulation, input: &TickInput, dt: f32) {
    if input.reset {
        sim.reset();
    }
    if input.launch {
        sim.launch();
    }
    sim.tick(dt);
}

impl Simulation {
    /// Start a flight with the current config.
    ///
    /// Returns false (and changes nothing) if a flight is already in progress.
    pub fn launch(&mut self) -> bool {
        if !self.can_launch() {
            log::debug!("Launch ignored: already flying");
            return false;
        }

        let config = self.config;
        let arc = FlightArc::new(launch_origin(), launch_velocity(config.angle, config.speed));

        self.flight = Some(Flight { arc, config });
        self.phase = FlightPhase::Flying;
        self.position = arc.origin;
        self.velocity = arc.velocity;
        self.stats.clear();
        self.trail.clear();
        self.preview = None;
        self.bounces = 0;
        self.events.push(FlightEvent::Launched { config });

        log::info!(
            "Launched at {:.1}° / {:.1} m/s (g = {:.2}, e = {:.2})",
            config.angle,
            config.speed,
            config.gravity,
            config.restitution
        );
        true
    }

    /// Return to idle from any phase, clearing flight state
    pub fn reset(&mut self) {
        if self.phase == FlightPhase::Flying {
            log::info!("Flight reset after {:.2}s", self.stats.elapsed_time);
        }
        self.flight = None;
        self.phase = FlightPhase::Idle;
        self.position = launch_origin();
        self.velocity = glam::Vec2::ZERO;
        self.stats.clear();
        self.trail.clear();
        self.preview = Some(predict(&self.config));
        self.bounces = 0;
        self.events.clear();
    }

    /// Advance the flight by `dt` seconds (clamped to `MAX_TICK_DT`).
    ///
    /// No-op unless flying, or when `dt` is not positive.
    pub fn tick(&mut self, dt: f32) {
        if dt.is_nan() || dt <= 0.0 {
            return;
        }
        let Some(flight) = self.flight.as_mut() else {
            return;
        };
        let dt = dt.min(MAX_TICK_DT);
        let gravity = flight.config.gravity;
        let restitution = flight.config.restitution;

        let sample = flight.arc.advance(dt, gravity);

        match resolve_ground_contact(&flight.arc, &sample, gravity, restitution) {
            GroundContact::Continue => {
                self.position = sample.pos;
                self.velocity = sample.vel;
                self.stats.record(sample.pos, sample.vel, dt);
                self.trail.record(sample.pos);
            }
            GroundContact::Bounce(next) => {
                flight.arc = next;
                self.bounces += 1;
                self.position = next.origin;
                self.velocity = next.velocity;
                self.stats.record(next.origin, next.velocity, dt);
                self.trail.record(next.origin);
                self.events.push(FlightEvent::Bounced {
                    count: self.bounces,
                    position: next.origin,
                    rebound_speed: next.velocity.y,
                });
                log::debug!(
                    "Bounce {} at x = {:.2} (rebound {:.2} m/s)",
                    self.bounces,
                    next.origin.x,
                    next.velocity.y
                );
            }
            GroundContact::Land(rest) => {
                self.flight = None;
                self.phase = FlightPhase::Landed;
                self.position = rest.pos;
                self.velocity = rest.vel;
                self.stats.record_landing(rest.pos, dt);
                self.trail.record(rest.pos);
                self.preview = Some(predict(&self.config));
                self.events.push(FlightEvent::Landed {
                    range: self.stats.range,
                    elapsed: self.stats.elapsed_time,
                });
                log::info!(
                    "Landed: range {:.2} m, max height {:.2} m, {:.2}s, {} bounce(s)",
                    self.stats.range,
                    self.stats.max_height,
                    self.stats.elapsed_time,
                    self.bounces
                );
            }
        }
    }
}
