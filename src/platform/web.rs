//! Browser bindings
//!
//! Exposes one simulation object to the JS host. The host owns the render loop
//! and calls `frame(now_ms)` from `requestAnimationFrame`; state crosses the
//! boundary only as JSON snapshots.

use wasm_bindgen::prelude::*;

use super::FrameClock;
use crate::export::stats_csv;
use crate::sim::{FlightEvent, Simulation, SimulationConfig};
use crate::swing::{SwingAnimation, SwingPose};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Ignore the error if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Cricket Flight starting...");
}

/// Simulation handle owned by the JS host
#[wasm_bindgen]
pub struct FlightSim {
    sim: Simulation,
    clock: FrameClock,
    swing: SwingAnimation,
    pose: SwingPose,
}

#[wasm_bindgen]
impl FlightSim {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            sim: Simulation::default(),
            clock: FrameClock::new(),
            swing: SwingAnimation::default(),
            pose: SwingPose::default(),
        }
    }

    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, angle: f32, speed: f32, gravity: f32, restitution: f32) {
        self.sim
            .set_config(SimulationConfig::new(angle, speed, gravity, restitution));
    }

    pub fn launch(&mut self) -> bool {
        self.sim.launch()
    }

    pub fn reset(&mut self) {
        self.sim.reset();
        self.swing = SwingAnimation::default();
        self.pose = SwingPose::default();
    }

    /// Advance physics and the swing by the time since the last frame
    pub fn frame(&mut self, now_ms: f64) {
        let dt = self.clock.delta(now_ms);
        self.sim.tick(dt);
        for event in self.sim.drain_events() {
            if let FlightEvent::Launched { .. } = event {
                self.swing.start();
            }
        }
        self.pose = self.swing.advance(dt);
    }

    #[wasm_bindgen(js_name = canLaunch)]
    pub fn can_launch(&self) -> bool {
        self.sim.can_launch()
    }

    /// {phase, position, velocity}
    #[wasm_bindgen(js_name = currentState)]
    pub fn current_state(&self) -> String {
        serde_json::to_string(&self.sim.snapshot()).unwrap_or_default()
    }

    pub fn stats(&self) -> String {
        serde_json::to_string(&self.sim.stats()).unwrap_or_default()
    }

    /// Flat xyz trail vertices
    #[wasm_bindgen(js_name = trailVertices)]
    pub fn trail_vertices(&self) -> Vec<f32> {
        bytemuck::cast_slice(&self.sim.trail().vertices()).to_vec()
    }

    /// Preview samples and markers, or "null" while flying
    #[wasm_bindgen(js_name = trajectoryPreview)]
    pub fn trajectory_preview(&self) -> String {
        serde_json::to_string(&self.sim.preview()).unwrap_or_default()
    }

    /// Bat pose offsets: [rotation_z, rotation_x, offset_x, offset_y]
    #[wasm_bindgen(js_name = swingPose)]
    pub fn swing_pose(&self) -> Vec<f32> {
        vec![
            self.pose.rotation_z,
            self.pose.rotation_x,
            self.pose.offset.x,
            self.pose.offset.y,
        ]
    }

    #[wasm_bindgen(js_name = exportCsv)]
    pub fn export_csv(&self, generated: &str) -> String {
        stats_csv(&self.sim.config(), &self.sim.stats(), generated)
    }
}

impl Default for FlightSim {
    fn default() -> Self {
        Self::new()
    }
}
