// src/simulation/config.rs

use crate::error::SimulationError;

/// Fixed inputs of one simulation run.
#[derive(Debug, Clone)]
pub struct SimulationParameters {
    /// Total population size.
    pub population: u64,
    /// Infection rate beta (per day).
    pub infection_rate: f64,
    /// Recovery rate gamma (per day).
    pub recovery_rate: f64,
    /// Maximum number of days to simulate. A zero horizon yields the
    /// degenerate single-day trajectory.
    pub horizon_days: usize,
    /// Number of infected individuals on day 0.
    pub initial_infected: u64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            population: 10_000,
            infection_rate: 0.21,
            recovery_rate: 0.14,
            horizon_days: 365,
            initial_infected: 1,
        }
    }
}

impl SimulationParameters {
    /// Checks every field before a run starts. Invalid parameters are fatal;
    /// the engine never produces a partial trajectory.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.population == 0 {
            return Err(SimulationError::invalid(
                "population",
                self.population as f64,
                "must be positive",
            ));
        }
        if !(self.infection_rate > 0.0) || !self.infection_rate.is_finite() {
            return Err(SimulationError::invalid(
                "infection_rate",
                self.infection_rate,
                "must be a positive finite rate",
            ));
        }
        if !(self.recovery_rate > 0.0) || !self.recovery_rate.is_finite() {
            return Err(SimulationError::invalid(
                "recovery_rate",
                self.recovery_rate,
                "must be a positive finite rate",
            ));
        }
        if self.initial_infected == 0 {
            return Err(SimulationError::invalid(
                "initial_infected",
                self.initial_infected as f64,
                "must seed at least one case",
            ));
        }
        if self.initial_infected > self.population {
            return Err(SimulationError::invalid(
                "initial_infected",
                self.initial_infected as f64,
                "cannot exceed the population",
            ));
        }
        Ok(())
    }

    /// Basic reproduction number beta / gamma. Pure division; independent of
    /// the run loop.
    pub fn basic_reproduction_number(&self) -> f64 {
        self.infection_rate / self.recovery_rate
    }
}
