use crate::math::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub mass: f64,
    /// Rod length to the predecessor. Unused for the first body.
    pub rest_length: f64,
    pub pinned: bool,
    pub position: Vec2,
    pub previous_position: Vec2,
    pub velocity: Vec2,
}

impl Body {
    pub fn pinned_at(position: Vec2) -> Self {
        Self {
            mass: 0.0,
            rest_length: 0.0,
            pinned: true,
            position,
            previous_position: position,
            velocity: Vec2::zero(),
        }
    }

    pub fn movable(mass: f64, rest_length: f64, position: Vec2) -> Self {
        Self {
            mass,
            rest_length,
            pinned: false,
            position,
            previous_position: position,
            velocity: Vec2::zero(),
        }
    }

    pub fn inverse_mass(&self) -> f64 {
        if self.pinned {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    /// Mass as reported in the trajectory stream; pinned bodies report zero.
    pub fn reported_mass(&self) -> f64 {
        if self.pinned {
            0.0
        } else {
            self.mass
        }
    }
}

/// Bodies linked in series by rigid rods. Index 0 is the pivot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    pub bodies: Vec<Body>,
}

impl Chain {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn pivot(&self) -> &Body {
        &self.bodies[0]
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies
            .iter()
            .filter(|b| !b.pinned)
            .map(|b| 0.5 * b.mass * b.velocity.length_squared())
            .sum()
    }

    /// Potential energy relative to `y = 0` for a signed vertical acceleration.
    pub fn potential_energy(&self, gravity: f64) -> f64 {
        self.bodies
            .iter()
            .filter(|b| !b.pinned)
            .map(|b| -b.mass * gravity * b.position.y)
            .sum()
    }

    pub fn total_energy(&self, gravity: f64) -> f64 {
        self.kinetic_energy() + self.potential_energy(gravity)
    }

    /// Largest absolute difference between a rod's current and rest length.
    pub fn max_constraint_error(&self) -> f64 {
        self.bodies
            .windows(2)
            .map(|pair| ((pair[1].position - pair[0].position).length() - pair[1].rest_length).abs())
            .fold(0.0, f64::max)
    }
}
