pub mod chain;
pub mod simulation;

pub use chain::{BeadSpec, ChainConfig};
pub use simulation::SimulationConfig;

use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A chain together with the settings used to run it, as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub chain: ChainConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl Scenario {
    pub fn new(chain: ChainConfig, simulation: SimulationConfig) -> Self {
        Self { chain, simulation }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let scenario: Scenario = serde_json::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Reject values the integrator assumes never occur.
    pub fn validate(&self) -> Result<()> {
        if self.chain.beads.is_empty() {
            return Err(invalid("chain has no beads"));
        }
        for (i, bead) in self.chain.beads.iter().enumerate() {
            if !(bead.mass.is_finite() && bead.mass > 0.0) {
                return Err(invalid(format!("bead {i}: mass must be positive, got {}", bead.mass)));
            }
            if !(bead.length.is_finite() && bead.length > 0.0) {
                return Err(invalid(format!("bead {i}: length must be positive, got {}", bead.length)));
            }
            if !bead.angle.is_finite() {
                return Err(invalid(format!("bead {i}: angle must be finite")));
            }
        }

        let sim = &self.simulation;
        if sim.fps == 0 {
            return Err(invalid("fps must be positive"));
        }
        if sim.sub_steps == 0 {
            return Err(invalid("sub_steps must be positive"));
        }
        if !(sim.duration.is_finite() && sim.duration >= 0.0) {
            return Err(invalid(format!("duration must be non-negative, got {}", sim.duration)));
        }
        if !sim.gravity.is_finite() {
            return Err(invalid("gravity must be finite"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> SimError {
    SimError::InvalidConfig(message.into())
}
