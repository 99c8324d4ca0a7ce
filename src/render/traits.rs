// src/render/traits.rs

use crate::simulation::engine::{SimulationSummary, Trajectory};
use std::error::Error;
use std::fmt::Debug;

/// Everything a renderer needs to draw one simulated outbreak.
///
/// The three count sequences and the day axis always have the same length,
/// termination day + 1.
#[derive(Debug, Clone)]
pub struct RenderFrame {
    /// Day indices 0..=T.
    pub days: Vec<usize>,
    /// Susceptible individuals per day.
    pub susceptible: Vec<f64>,
    /// Infected individuals per day.
    pub infected: Vec<f64>,
    /// Recovered individuals per day.
    pub recovered: Vec<f64>,
    /// Day the outbreak ended; clips the x axis.
    pub termination_day: usize,
    /// Population size; upper bound of the y axis.
    pub population: f64,
    /// Optional "today" marker in days since day 0. Renderers ignore it when
    /// it falls on or after the termination day.
    pub marker_day: Option<usize>,
}

impl RenderFrame {
    pub fn new(trajectory: &Trajectory, marker_day: Option<usize>) -> Self {
        Self {
            days: trajectory.days(),
            susceptible: trajectory.susceptible_counts(),
            infected: trajectory.infected_counts(),
            recovered: trajectory.recovered_counts(),
            termination_day: trajectory.len().saturating_sub(1),
            population: trajectory.population(),
            marker_day,
        }
    }
}

/// Draws the compartment curves of a finished run.
///
/// We require `Debug` so we can print the renderer state if needed.
/// We require `Send` + `Sync` to allow rendering off the main thread later.
pub trait TrajectoryRenderer: Debug + Send + Sync {
    /// Renders one frame.
    ///
    /// # Arguments
    /// * `frame` - Count sequences, axis bounds and optional marker day.
    fn render(&self, frame: &RenderFrame) -> Result<(), Box<dyn Error>>;
}

/// Formats the scalar summary of a finished run.
pub trait SummaryReporter: Debug + Send + Sync {
    /// Reports the run summary.
    ///
    /// # Arguments
    /// * `summary` - Derived scalars of the run.
    /// * `population` - Population size, for count/percentage formatting.
    fn report(&self, summary: &SimulationSummary, population: u64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::config::SimulationParameters;
    use crate::simulation::engine::EpidemicSimulation;

    #[test]
    fn frame_sequences_share_one_length() {
        let outcome = EpidemicSimulation::new(SimulationParameters::default())
            .unwrap()
            .run();
        let frame = RenderFrame::new(&outcome.trajectory, None);

        assert_eq!(frame.days.len(), frame.termination_day + 1);
        assert_eq!(frame.susceptible.len(), frame.days.len());
        assert_eq!(frame.infected.len(), frame.days.len());
        assert_eq!(frame.recovered.len(), frame.days.len());
        assert_eq!(frame.termination_day, outcome.summary.termination_day);
    }
}
