//! Cosmetic bat swing played when a flight launches
//!
//! Runs on its own clock, independent of physics ticks. The renderer starts it
//! on `FlightEvent::Launched` and applies the returned pose offsets to the bat.

use std::f32::consts::PI;

use glam::Vec2;

/// Swing progress gained per second (0.075 per 16 ms frame)
pub const SWING_RATE: f32 = 0.075 / 0.016;
/// Time the bat holds the follow-through before snapping back (s)
pub const SWING_HOLD: f32 = 0.25;

/// Offsets from the bat's rest pose
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwingPose {
    pub rotation_z: f32,
    pub rotation_x: f32,
    pub offset: Vec2,
}

impl SwingPose {
    fn from_amount(amount: f32) -> Self {
        Self {
            rotation_z: -amount * (PI / 2.3),
            rotation_x: amount * (PI / 9.0),
            offset: Vec2::new(amount * 0.85, amount * 0.25),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SwingStage {
    Swinging { progress: f32 },
    Holding { remaining: f32, pose: SwingPose },
    Finished,
}

/// Finite swing timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingAnimation {
    stage: SwingStage,
}

impl Default for SwingAnimation {
    fn default() -> Self {
        Self {
            stage: SwingStage::Finished,
        }
    }
}

impl SwingAnimation {
    /// (Re)start the swing from the rest pose
    pub fn start(&mut self) {
        self.stage = SwingStage::Swinging { progress: 0.0 };
    }

    pub fn is_finished(&self) -> bool {
        self.stage == SwingStage::Finished
    }

    /// Advance by `dt` seconds and return the pose to draw
    pub fn advance(&mut self, dt: f32) -> SwingPose {
        let dt = dt.max(0.0);
        match self.stage {
            SwingStage::Swinging { progress } => {
                let progress = (progress + dt * SWING_RATE).min(1.0);
                let pose = SwingPose::from_amount((progress * PI).sin());
                self.stage = if progress >= 1.0 {
                    SwingStage::Holding {
                        remaining: SWING_HOLD,
                        pose,
                    }
                } else {
                    SwingStage::Swinging { progress }
                };
                pose
            }
            SwingStage::Holding { remaining, pose } => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    self.stage = SwingStage::Finished;
                    SwingPose::default()
                } else {
                    self.stage = SwingStage::Holding { remaining, pose };
                    pose
                }
            }
            SwingStage::Finished => SwingPose::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_swing_is_at_rest() {
        let mut swing = SwingAnimation::default();
        assert!(swing.is_finished());
        assert_eq!(swing.advance(0.016), SwingPose::default());
    }

    #[test]
    fn test_swing_peaks_midway_and_finishes() {
        let mut swing = SwingAnimation::default();
        swing.start();

        let mid = swing.advance(0.5 / SWING_RATE);
        assert!((mid.offset.x - 0.85).abs() < 1e-4);
        assert!((mid.rotation_z + PI / 2.3).abs() < 1e-4);

        // Reach the end of the swing, then hold
        swing.advance(1.0);
        assert!(!swing.is_finished());
        swing.advance(SWING_HOLD + 0.01);
        assert!(swing.is_finished());
    }

    #[test]
    fn test_total_duration_is_finite() {
        let mut swing = SwingAnimation::default();
        swing.start();
        let mut frames = 0;
        while !swing.is_finished() {
            swing.advance(0.016);
            frames += 1;
            assert!(frames < 100);
        }
        // ~14 frames of swing plus ~16 of hold
        assert!(frames >= 25);
    }
}
