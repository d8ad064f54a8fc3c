use crate::math::Vec2;
use crate::physics::{Body, Chain};
use serde::{Deserialize, Serialize};

/// One bead hanging from its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeadSpec {
    pub mass: f64,
    pub length: f64,
    /// Rod angle measured from straight down, in radians.
    pub angle: f64,
}

impl BeadSpec {
    pub fn new(mass: f64, length: f64, angle: f64) -> Self {
        Self { mass, length, angle }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub pivot: Vec2,
    pub beads: Vec<BeadSpec>,
}

fn default_name() -> String {
    "custom".to_string()
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::triple()
    }
}

impl ChainConfig {
    pub fn triple() -> Self {
        use std::f64::consts::{FRAC_PI_2, PI};

        Self {
            name: "Triple Pendulum".to_string(),
            pivot: Vec2::zero(),
            beads: vec![
                BeadSpec::new(1.0, 0.2, FRAC_PI_2),
                BeadSpec::new(0.5, 0.2, PI),
                BeadSpec::new(0.3, 0.2, PI),
            ],
        }
    }

    pub fn single(mass: f64, length: f64, angle: f64) -> Self {
        Self {
            name: "Simple Pendulum".to_string(),
            pivot: Vec2::zero(),
            beads: vec![BeadSpec::new(mass, length, angle)],
        }
    }

    /// Lay the beads out in series from the pivot, all at rest.
    ///
    /// Masses and lengths must be positive; this is not checked here.
    pub fn to_chain(&self) -> Chain {
        let mut bodies = Vec::with_capacity(self.beads.len() + 1);
        bodies.push(Body::pinned_at(self.pivot));

        let mut offset = self.pivot;
        for bead in &self.beads {
            offset.x += bead.length * bead.angle.sin();
            offset.y -= bead.length * bead.angle.cos();
            bodies.push(Body::movable(bead.mass, bead.length, offset));
        }

        Chain::new(bodies)
    }
}
