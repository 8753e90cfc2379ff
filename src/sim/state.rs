//! Simulation state and core data types
//!
//! The `Simulation` is the single owner of all mutable flight state. Observers
//! only get copies or shared borrows; mutation goes through `launch`, `reset`
//! and `tick` (see `tick.rs`).

use std::collections::VecDeque;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arc::FlightArc;
use super::predict::{TrajectoryPreview, predict};
use super::stats::Stats;
use crate::consts::*;
use crate::launch_origin;

/// Launch parameters supplied by the driver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Launch angle above horizontal (degrees)
    pub angle: f32,
    /// Launch speed (m/s)
    pub speed: f32,
    /// Downward acceleration (m/s²)
    pub gravity: f32,
    /// Fraction of vertical speed kept on each bounce
    pub restitution: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            angle: DEFAULT_ANGLE,
            speed: DEFAULT_SPEED,
            gravity: DEFAULT_GRAVITY,
            restitution: DEFAULT_RESTITUTION,
        }
    }
}

/// Clamp into range, replacing NaN/inf with the default
fn clamp_or(value: f32, min: f32, max: f32, default: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        default
    }
}

impl SimulationConfig {
    /// Build a config, clamping every field into its valid range
    pub fn new(angle: f32, speed: f32, gravity: f32, restitution: f32) -> Self {
        Self {
            angle,
            speed,
            gravity,
            restitution,
        }
        .clamped()
    }

    /// Copy of this config with every field clamped into its valid range.
    ///
    /// Gravity never reaches zero and restitution stays below 1, so flight
    /// time is finite and bounce sequences always die out.
    pub fn clamped(self) -> Self {
        Self {
            angle: clamp_or(self.angle, MIN_ANGLE, MAX_ANGLE, DEFAULT_ANGLE),
            speed: clamp_or(self.speed, MIN_SPEED, MAX_SPEED, DEFAULT_SPEED),
            gravity: clamp_or(self.gravity, MIN_GRAVITY, MAX_GRAVITY, DEFAULT_GRAVITY),
            restitution: clamp_or(
                self.restitution,
                MIN_RESTITUTION,
                MAX_RESTITUTION,
                DEFAULT_RESTITUTION,
            ),
        }
    }
}

/// Current phase of the flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlightPhase {
    /// Waiting for launch
    #[default]
    Idle,
    /// Ball in the air (or between bounces)
    Flying,
    /// Ball at rest after a flight; ready to launch again
    Landed,
}

/// Trail point for rendering
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct TrailVertex {
    pub position: [f32; 3],
}

/// Bounded history of past positions (oldest first)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrailHistory {
    points: VecDeque<Vec2>,
}

impl TrailHistory {
    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(TRAIL_CAPACITY),
        }
    }

    /// Append a position, dropping the oldest past capacity
    pub fn record(&mut self, pos: Vec2) {
        if self.points.len() == TRAIL_CAPACITY {
            self.points.pop_front();
        }
        self.points.push_back(pos);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }

    /// Most recent position
    pub fn latest(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    /// Line-strip vertices in the flight plane (z = 0)
    pub fn vertices(&self) -> Vec<TrailVertex> {
        self.points
            .iter()
            .map(|p| TrailVertex {
                position: [p.x, p.y, 0.0],
            })
            .collect()
    }

    /// Raw vertex bytes for a GPU upload
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }
}

/// Notable moments, drained by the presentation side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FlightEvent {
    /// A flight started
    Launched { config: SimulationConfig },
    /// The ball rebounded off the ground
    Bounced {
        count: u32,
        position: Vec2,
        rebound_speed: f32,
    },
    /// The ball came to rest
    Landed { range: f32, elapsed: f32 },
}

/// The live part of a flight: current arc and the config it was launched with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub arc: FlightArc,
    pub config: SimulationConfig,
}

/// Current position/velocity as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightSnapshot {
    pub phase: FlightPhase,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Simulation {
    /// Config for the next launch (and the preview)
    pub(crate) config: SimulationConfig,
    pub(crate) phase: FlightPhase,
    /// Some iff phase is Flying
    pub(crate) flight: Option<Flight>,
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
    pub(crate) stats: Stats,
    pub(crate) trail: TrailHistory,
    /// Some iff phase is not Flying
    pub(crate) preview: Option<TrajectoryPreview>,
    /// Bounces in the current flight
    pub(crate) bounces: u32,
    #[serde(skip)]
    pub(crate) events: Vec<FlightEvent>,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl Simulation {
    /// Create an idle simulation with the ball at the launch origin
    pub fn new(config: SimulationConfig) -> Self {
        let config = config.clamped();
        Self {
            config,
            phase: FlightPhase::Idle,
            flight: None,
            position: launch_origin(),
            velocity: Vec2::ZERO,
            stats: Stats::default(),
            trail: TrailHistory::new(),
            preview: Some(predict(&config)),
            bounces: 0,
            events: Vec::new(),
        }
    }

    /// Replace the config (clamped). Recomputes the preview unless a flight is
    /// in progress; a live flight keeps the config it was launched with.
    pub fn set_config(&mut self, config: SimulationConfig) {
        self.config = config.clamped();
        if self.phase != FlightPhase::Flying {
            self.preview = Some(predict(&self.config));
        }
    }

    pub fn config(&self) -> SimulationConfig {
        self.config
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    /// Launch gate: open whenever no flight is in progress
    pub fn can_launch(&self) -> bool {
        self.phase != FlightPhase::Flying
    }

    pub fn snapshot(&self) -> FlightSnapshot {
        FlightSnapshot {
            phase: self.phase,
            position: self.position,
            velocity: self.velocity,
        }
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn trail(&self) -> &TrailHistory {
        &self.trail
    }

    /// Preview of the next launch; None while flying
    pub fn preview(&self) -> Option<&TrajectoryPreview> {
        self.preview.as_ref()
    }

    /// Live arc; None unless flying
    pub fn flight(&self) -> Option<&Flight> {
        self.flight.as_ref()
    }

    pub fn bounces(&self) -> u32 {
        self.bounces
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<FlightEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_clamps_out_of_range() {
        let config = SimulationConfig::new(120.0, 1.0, 0.0, 1.0);
        assert_eq!(config.angle, MAX_ANGLE);
        assert_eq!(config.speed, MIN_SPEED);
        assert_eq!(config.gravity, MIN_GRAVITY);
        assert_eq!(config.restitution, MAX_RESTITUTION);

        let config = SimulationConfig::new(-5.0, 80.0, -3.0, -0.2);
        assert_eq!(config.angle, MIN_ANGLE);
        assert_eq!(config.speed, MAX_SPEED);
        assert!(config.gravity > 0.0);
        assert_eq!(config.restitution, MIN_RESTITUTION);
    }

    #[test]
    fn test_config_non_finite_falls_back_to_default() {
        let config = SimulationConfig::new(f32::NAN, f32::INFINITY, f32::NAN, f32::NAN);
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_trail_drops_oldest_past_capacity() {
        let mut trail = TrailHistory::new();
        for i in 0..TRAIL_CAPACITY + 5 {
            trail.record(Vec2::new(i as f32, 1.0));
        }
        assert_eq!(trail.len(), TRAIL_CAPACITY);
        assert_eq!(trail.iter().next().copied(), Some(Vec2::new(5.0, 1.0)));
        assert_eq!(
            trail.latest(),
            Some(Vec2::new((TRAIL_CAPACITY + 4) as f32, 1.0))
        );
    }

    #[test]
    fn test_trail_vertex_bytes() {
        let mut trail = TrailHistory::new();
        trail.record(Vec2::new(1.0, 2.0));
        trail.record(Vec2::new(3.0, 4.0));
        let verts = trail.vertices();
        assert_eq!(verts[1].position, [3.0, 4.0, 0.0]);
        assert_eq!(trail.vertex_bytes().len(), 2 * 3 * std::mem::size_of::<f32>());
    }

    #[test]
    fn test_new_simulation_is_idle_with_preview() {
        let sim = Simulation::default();
        assert_eq!(sim.phase(), FlightPhase::Idle);
        assert!(sim.can_launch());
        assert!(sim.flight().is_none());
        assert!(sim.preview().is_some());
        assert_eq!(sim.snapshot().position, launch_origin());
        assert_eq!(sim.stats(), Stats::default());
    }

    #[test]
    fn test_set_config_recomputes_preview_when_idle() {
        let mut sim = Simulation::default();
        let before = sim.preview().cloned();
        sim.set_config(SimulationConfig::new(30.0, 15.0, 9.8, 0.3));
        assert_ne!(sim.preview().cloned(), before);
        assert_eq!(sim.config().angle, 30.0);
    }

    #[test]
    fn test_simulation_serializes_without_events() {
        let mut sim = Simulation::default();
        sim.events.push(FlightEvent::Launched {
            config: sim.config,
        });
        let json = serde_json::to_value(&sim).unwrap();
        assert_eq!(json["phase"], "Idle");
        assert!(json["flight"].is_null());
        assert!(json.get("events").is_none());
    }
}
