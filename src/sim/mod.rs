//! Deterministic flight simulation module
//!
//! All physics and flight-state logic lives here. This module must be pure and
//! deterministic:
//! - Closed-form kinematics, no accumulated integration error
//! - Time only advances through an externally supplied tick `dt`
//! - No rendering or platform dependencies

pub mod arc;
pub mod collision;
pub mod predict;
pub mod state;
pub mod stats;
pub mod tick;

pub use arc::{FlightArc, FlightSample};
pub use collision::{GroundContact, resolve_ground_contact};
pub use predict::{TrajectoryPreview, predict};
pub use state::{
    Flight, FlightEvent, FlightPhase, FlightSnapshot, Simulation, SimulationConfig, TrailHistory,
    TrailVertex,
};
pub use stats::Stats;
pub use tick::{TickInput, tick};
