pub mod chain;
pub mod integrator;
pub mod modes;

pub use chain::{Body, Chain};
pub use integrator::{Integrator, PositionBasedIntegrator};
pub use modes::{normal_mode_periods, simple_pendulum_period};
