use crate::config::{ChainConfig, SimulationConfig};
use crate::error::Result;
use crate::physics::{normal_mode_periods, Chain, Integrator, PositionBasedIntegrator};
use crate::sim::TrajectoryWriter;
use std::io::Write;
use tracing::{debug, info, trace};

/// Owns the chain for the length of a run and drives it frame by frame.
pub struct Simulator<I: Integrator = PositionBasedIntegrator> {
    pub name: String,
    pub chain: Chain,
    pub config: SimulationConfig,
    pub frame: usize,
    pub mode_periods: Vec<f64>,
    integrator: I,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub frames_simulated: usize,
    pub frames_written: usize,
    pub initial_energy: f64,
    pub final_energy: f64,
    pub max_constraint_error: f64,
}

impl Simulator<PositionBasedIntegrator> {
    pub fn new(chain_config: &ChainConfig, config: SimulationConfig) -> Self {
        let integrator = PositionBasedIntegrator::new(config.gravity);
        let mut sim = Self::with_integrator(chain_config.to_chain(), config, integrator);
        sim.name = chain_config.name.clone();
        sim.mode_periods = normal_mode_periods(chain_config, sim.config.gravity).unwrap_or_default();
        sim
    }
}

impl<I: Integrator> Simulator<I> {
    pub fn with_integrator(chain: Chain, config: SimulationConfig, integrator: I) -> Self {
        Self {
            name: String::new(),
            chain,
            config,
            frame: 0,
            mode_periods: Vec::new(),
            integrator,
        }
    }

    pub fn time(&self) -> f64 {
        self.frame as f64 * self.config.frame_dt()
    }

    pub fn energy(&self) -> f64 {
        self.chain.total_energy(self.config.gravity)
    }

    /// Advance one displayed frame worth of sub-steps.
    pub fn step_frame(&mut self) {
        let dt = self.config.sub_dt();
        for _ in 0..self.config.sub_steps {
            self.integrator.step(&mut self.chain, dt);
        }
        self.frame += 1;
    }

    /// Emit every frame from the current one up to the configured frame
    /// count, then one more after the final step.
    pub fn run<W: Write>(&mut self, writer: &mut TrajectoryWriter<W>) -> Result<RunSummary> {
        let frames = self.config.frame_count();
        let initial_energy = self.energy();
        let mut max_constraint_error: f64 = 0.0;

        info!(
            chain = %self.name,
            bodies = self.chain.len(),
            frames,
            sub_steps = self.config.sub_steps,
            gravity = self.config.gravity,
            "simulation started"
        );
        if !self.mode_periods.is_empty() {
            info!(periods = ?self.mode_periods, "small-oscillation periods");
        }

        let fps = self.config.fps as usize;
        while self.frame < frames {
            writer.emit(self.frame, &self.chain)?;
            self.step_frame();
            max_constraint_error = max_constraint_error.max(self.chain.max_constraint_error());

            trace!(frame = self.frame, "frame advanced");
            if self.frame % fps == 0 {
                debug!(
                    frame = self.frame,
                    time = self.time(),
                    energy = self.energy(),
                    "status"
                );
            }
        }
        writer.emit(self.frame, &self.chain)?;
        writer.flush()?;

        let summary = RunSummary {
            frames_simulated: self.frame,
            frames_written: writer.frames_written(),
            initial_energy,
            final_energy: self.energy(),
            max_constraint_error,
        };
        info!(
            frames = summary.frames_written,
            time = self.time(),
            energy_drift = summary.final_energy - summary.initial_energy,
            max_constraint_error = summary.max_constraint_error,
            "simulation completed"
        );
        Ok(summary)
    }
}
