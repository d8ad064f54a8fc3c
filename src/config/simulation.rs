use crate::math::GRAVITY;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Displayed frames per unit of simulated time.
    pub fps: u32,
    /// Integrator sub-steps per displayed frame.
    pub sub_steps: u32,
    /// Simulated time covered by the run.
    pub duration: f64,
    /// Signed vertical acceleration; negative pulls down.
    pub gravity: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fps: 100,
            sub_steps: 100,
            duration: 10.0,
            gravity: GRAVITY,
        }
    }
}

impl SimulationConfig {
    pub fn quick_test() -> Self {
        Self {
            fps: 100,
            sub_steps: 10,
            duration: 1.0,
            gravity: GRAVITY,
        }
    }

    pub fn frame_count(&self) -> usize {
        (self.duration * self.fps as f64).round() as usize
    }

    pub fn frame_dt(&self) -> f64 {
        1.0 / self.fps as f64
    }

    pub fn sub_dt(&self) -> f64 {
        self.frame_dt() / self.sub_steps as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_is_one_thousand_frames() {
        let config = SimulationConfig::default();
        assert_eq!(config.frame_count(), 1000);
        assert!((config.frame_dt() - 0.01).abs() < 1e-15);
        assert!((config.sub_dt() - 1e-4).abs() < 1e-15);
    }

    #[test]
    fn frame_count_rounds_to_nearest() {
        let config = SimulationConfig {
            fps: 30,
            duration: 0.1,
            ..SimulationConfig::default()
        };
        assert_eq!(config.frame_count(), 3);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: SimulationConfig = serde_json::from_str(r#"{"sub_steps": 5}"#).unwrap();
        assert_eq!(config.sub_steps, 5);
        assert_eq!(config.fps, 100);
        assert_eq!(config.gravity, -10.0);
    }
}
