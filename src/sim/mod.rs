pub mod simulator;
pub mod trajectory;

pub use simulator::{RunSummary, Simulator};
pub use trajectory::TrajectoryWriter;
