pub mod vector;

pub use vector::Vec2;

/// Downward gravitational acceleration used by the default scenarios.
pub const GRAVITY: f64 = -10.0;
