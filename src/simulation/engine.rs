// src/simulation/engine.rs

use crate::error::SimulationError;
use crate::model::compartments::{sir_step, CompartmentState};
use crate::simulation::config::SimulationParameters;
use serde::Serialize;

// We make this Serialize so we can write it to CSV later
#[derive(Debug, Clone, Serialize)]
pub struct DayRecord {
    pub day: usize,
    pub susceptible: f64,
    pub infected: f64,
    pub recovered: f64,
}

/// The day-indexed compartment sequence produced by one run.
///
/// States are stored as population fractions; the accessors scale them to
/// absolute counts for presentation. The trajectory covers days
/// `0..=termination_day` and is immutable once the run returns it.
#[derive(Debug, Clone)]
pub struct Trajectory {
    population: f64,
    states: Vec<CompartmentState>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn population(&self) -> f64 {
        self.population
    }

    /// Raw fractional states, day 0 first.
    pub fn states(&self) -> &[CompartmentState] {
        &self.states
    }

    /// Day indices 0..=T, the x axis of any plot.
    pub fn days(&self) -> Vec<usize> {
        (0..self.states.len()).collect()
    }

    pub fn susceptible_counts(&self) -> Vec<f64> {
        self.scaled(|s| s.susceptible)
    }

    pub fn infected_counts(&self) -> Vec<f64> {
        self.scaled(|s| s.infected)
    }

    pub fn recovered_counts(&self) -> Vec<f64> {
        self.scaled(|s| s.recovered)
    }

    /// One serializable record per simulated day, in absolute counts.
    pub fn records(&self) -> Vec<DayRecord> {
        self.states
            .iter()
            .enumerate()
            .map(|(day, state)| DayRecord {
                day,
                susceptible: state.susceptible * self.population,
                infected: state.infected * self.population,
                recovered: state.recovered * self.population,
            })
            .collect()
    }

    fn scaled(&self, field: impl Fn(&CompartmentState) -> f64) -> Vec<f64> {
        self.states
            .iter()
            .map(|state| field(state) * self.population)
            .collect()
    }
}

/// Scalar outputs derived while iterating. Counts are absolute individuals.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSummary {
    /// beta / gamma.
    pub basic_reproduction_number: f64,
    /// Day before the first decrease of the infected curve; 0 if the curve
    /// never decreased before termination.
    pub peak_day: usize,
    /// Infected count on `peak_day`; 0 if no peak was detected.
    pub peak_infected: f64,
    /// First day on which fewer than one infected individual remained, or
    /// the horizon if that never happened.
    pub termination_day: usize,
    /// Recovered count on the termination day.
    pub total_infections: f64,
}

#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub trajectory: Trajectory,
    pub summary: SimulationSummary,
}

/// Deterministic SIR epidemic simulation.
///
/// Owns nothing but the validated parameters; `run` is a pure function of
/// them, so repeated runs yield bit-identical outcomes.
pub struct EpidemicSimulation {
    params: SimulationParameters,
}

impl EpidemicSimulation {
    /// Validates the parameters up front; an invalid set never starts a run.
    pub fn new(params: SimulationParameters) -> Result<Self, SimulationError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn run(&self) -> SimulationOutcome {
        let params = &self.params;
        let population = params.population as f64;
        let one_case = 1.0 / population;

        // Day 0 seeding.
        let mut states = Vec::with_capacity(params.horizon_days + 1);
        states.push(CompartmentState::seeded(
            params.initial_infected as f64 / population,
        ));

        let mut peak_day = 0_usize;
        let mut peak_infected = 0.0_f64;
        let mut termination_day = params.horizon_days;

        for t in 0..params.horizon_days {
            let current = states[t];
            let next = sir_step(&current, params.infection_rate, params.recovery_rate);
            states.push(next);

            // The first decrease of the infected curve marks the peak; a
            // later wave would not move it.
            if peak_infected == 0.0 && next.infected < current.infected {
                peak_day = t;
                peak_infected = current.infected;
            }

            // Fewer than one infected individual left: the outbreak is over.
            if next.infected < one_case {
                termination_day = t + 1;
                break;
            }
        }

        let summary = SimulationSummary {
            basic_reproduction_number: params.basic_reproduction_number(),
            peak_day,
            peak_infected: peak_infected * population,
            termination_day,
            total_infections: states[termination_day].recovered * population,
        };

        SimulationOutcome {
            trajectory: Trajectory { population, states },
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn run_with(params: SimulationParameters) -> SimulationOutcome {
        EpidemicSimulation::new(params).unwrap().run()
    }

    #[test]
    fn day_zero_seeds_one_case() {
        let outcome = run_with(SimulationParameters::default());
        let day0 = outcome.trajectory.states()[0];
        assert_eq!(day0.infected, 1.0 / 10_000.0);
        assert_eq!(day0.susceptible, 1.0 - 1.0 / 10_000.0);
        assert_eq!(day0.recovered, 0.0);
    }

    #[test]
    fn trajectory_covers_termination_day_inclusive() {
        let outcome = run_with(SimulationParameters::default());
        assert_eq!(
            outcome.trajectory.len(),
            outcome.summary.termination_day + 1
        );
    }

    #[test]
    fn zero_horizon_returns_single_day_trajectory() {
        let outcome = run_with(SimulationParameters {
            horizon_days: 0,
            ..Default::default()
        });
        assert_eq!(outcome.trajectory.len(), 1);
        assert_eq!(outcome.summary.termination_day, 0);
        assert_eq!(outcome.summary.peak_day, 0);
        assert_eq!(outcome.summary.peak_infected, 0.0);
        assert_eq!(outcome.summary.total_infections, 0.0);
        // R0 has no iteration dependency.
        assert_eq!(outcome.summary.basic_reproduction_number, 1.5);
    }

    #[test]
    fn population_of_one_decays_by_recovery_alone() {
        let outcome = run_with(SimulationParameters {
            population: 1,
            initial_infected: 1,
            ..Default::default()
        });
        let states = outcome.trajectory.states();
        assert_eq!(states[0].infected, 1.0);
        assert_eq!(states[0].susceptible, 0.0);
        // With S = 0 the transmission term vanishes; one recovery step drops
        // the last case below the one-individual threshold.
        assert_abs_diff_eq!(states[1].infected, 0.86, epsilon = 1e-12);
        assert_eq!(outcome.summary.termination_day, 1);
    }

    #[test]
    fn horizon_is_used_when_outbreak_never_ends() {
        // A short horizon cuts the default outbreak off mid-flight.
        let outcome = run_with(SimulationParameters {
            horizon_days: 10,
            ..Default::default()
        });
        assert_eq!(outcome.summary.termination_day, 10);
        assert_eq!(outcome.trajectory.len(), 11);
    }

    #[test]
    fn records_scale_fractions_to_counts() {
        let outcome = run_with(SimulationParameters {
            horizon_days: 5,
            ..Default::default()
        });
        let records = outcome.trajectory.records();
        assert_eq!(records.len(), outcome.trajectory.len());
        assert_eq!(records[0].day, 0);
        assert_abs_diff_eq!(records[0].infected, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(records[0].susceptible, 9_999.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_invalid_parameters_before_running() {
        let err = EpidemicSimulation::new(SimulationParameters {
            recovery_rate: 0.0,
            ..Default::default()
        });
        assert!(err.is_err());
    }
}
