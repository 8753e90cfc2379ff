//! Pre-launch trajectory preview
//!
//! Samples the first, unbounced arc from the launch origin back down to the
//! launch height. Bounces are not previewed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::SimulationConfig;
use crate::consts::{BALL_RADIUS, LAUNCH_HEIGHT, LAUNCH_X, PREDICTION_STEPS};
use crate::launch_velocity;

/// Sampled preview of the first arc plus its annotated markers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPreview {
    /// Samples in flight order, all at or above the ground threshold
    pub points: Vec<Vec2>,
    /// Highest point of the arc
    pub apex: Vec2,
    /// Where the arc returns to launch height
    pub landing: Vec2,
    /// Time to return to launch height (s)
    pub flight_time: f32,
}

impl TrajectoryPreview {
    /// Horizontal distance from launch to the landing marker
    pub fn range(&self) -> f32 {
        self.landing.x - LAUNCH_X
    }

    /// Apex height above the launch baseline
    pub fn apex_height(&self) -> f32 {
        self.apex.y - LAUNCH_HEIGHT
    }
}

/// Compute the preview for a configuration.
///
/// Pure: the same config always yields the same preview.
pub fn predict(config: &SimulationConfig) -> TrajectoryPreview {
    let gravity = config.gravity;
    let vel = launch_velocity(config.angle, config.speed);
    let flight_time = 2.0 * vel.y / gravity;

    let position_at = |t: f32| {
        Vec2::new(
            LAUNCH_X + vel.x * t,
            LAUNCH_HEIGHT + vel.y * t - 0.5 * gravity * t * t,
        )
    };

    let points = if flight_time > 0.0 {
        (0..=PREDICTION_STEPS)
            .map(|i| position_at(flight_time * i as f32 / PREDICTION_STEPS as f32))
            .filter(|p| p.y >= BALL_RADIUS)
            .collect()
    } else {
        // Flat launch: the arc degenerates to its origin
        vec![position_at(0.0)]
    };

    let time_to_apex = vel.y / gravity;
    TrajectoryPreview {
        points,
        apex: Vec2::new(
            LAUNCH_X + vel.x * time_to_apex,
            LAUNCH_HEIGHT + vel.y * vel.y / (2.0 * gravity),
        ),
        landing: Vec2::new(LAUNCH_X + vel.x * flight_time, LAUNCH_HEIGHT),
        flight_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(angle: f32, speed: f32, gravity: f32) -> SimulationConfig {
        SimulationConfig::new(angle, speed, gravity, 0.0)
    }

    #[test]
    fn test_reference_launch() {
        let preview = predict(&config(45.0, 20.0, 9.8));
        assert!((preview.range() - 40.816).abs() < 0.01);
        assert!((preview.apex_height() - 10.204).abs() < 0.01);
        assert!((preview.apex.x - preview.range() / 2.0).abs() < 0.01);
    }

    #[test]
    fn test_range_identity() {
        for &(angle, speed, gravity) in &[(30.0, 15.0, 9.8), (60.0, 40.0, 3.7), (10.0, 5.0, 20.0)] {
            let preview = predict(&config(angle, speed, gravity));
            let analytic = speed * speed * (2.0 * f32::to_radians(angle)).sin() / gravity;
            assert!(
                (preview.range() - analytic).abs() < analytic * 1e-4 + 1e-3,
                "angle {angle}: {} vs {analytic}",
                preview.range()
            );
        }
    }

    #[test]
    fn test_samples_are_ordered_and_above_ground() {
        let preview = predict(&config(45.0, 28.0, 9.8));
        assert_eq!(preview.points.len(), PREDICTION_STEPS + 1);
        assert_eq!(preview.points[0], Vec2::new(LAUNCH_X, LAUNCH_HEIGHT));
        assert!(preview.points.windows(2).all(|w| w[1].x > w[0].x));
        assert!(preview.points.iter().all(|p| p.y >= BALL_RADIUS));
        let last = preview.points[preview.points.len() - 1];
        assert!((last.x - preview.landing.x).abs() < 1e-2);
    }

    #[test]
    fn test_flat_launch_degenerates() {
        let preview = predict(&config(0.0, 20.0, 9.8));
        assert_eq!(preview.flight_time, 0.0);
        assert_eq!(preview.points, vec![Vec2::new(LAUNCH_X, LAUNCH_HEIGHT)]);
        assert_eq!(preview.apex_height(), 0.0);
    }

    #[test]
    fn test_vertical_launch_stays_on_axis() {
        let preview = predict(&config(90.0, 10.0, 9.8));
        assert!(preview.range().abs() < 1e-3);
        assert!(preview.points.iter().all(|p| p.x.abs() < 1e-3));
    }
}
