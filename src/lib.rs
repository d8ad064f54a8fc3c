//! Multi-bead pendulum simulation.
//!
//! A chain of point masses hangs from a fixed pivot by rigid rods. The chain is
//! advanced with a position-based integrator at a fixed sub-step and its state
//! is streamed frame by frame as `f,x,y,m` rows for an external renderer.

pub mod config;
pub mod error;
pub mod math;
pub mod physics;
pub mod sim;

pub use error::{Result, SimError};
