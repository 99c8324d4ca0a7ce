// src/model/compartments.rs

/// The state of the population on one simulated day.
///
/// All three fields are fractions of the total population, so a valid state
/// satisfies `susceptible + infected + recovered == 1` up to floating-point
/// rounding. The transition below moves mass between compartments with
/// zero-sum deltas, which preserves that invariant analytically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompartmentState {
    pub susceptible: f64,
    pub infected: f64,
    pub recovered: f64,
}

impl CompartmentState {
    /// Day-0 state: `initial_infected` fraction in I, the rest in S, R empty.
    pub fn seeded(initial_infected: f64) -> Self {
        Self {
            susceptible: 1.0 - initial_infected,
            infected: initial_infected,
            recovered: 0.0,
        }
    }

    pub fn total(&self) -> f64 {
        self.susceptible + self.infected + self.recovered
    }
}

/// One explicit Euler step of the SIR recurrence, with a unit time increment
/// of one day:
///
/// ```text
/// dS = -beta * S * I
/// dI =  beta * S * I - gamma * I
/// dR =  gamma * I
/// ```
///
/// No clamping is applied. With a large `beta * I` the first-order step can
/// overshoot outside [0, 1]; choosing parameters that keep the step stable is
/// the caller's responsibility.
pub fn sir_step(state: &CompartmentState, beta: f64, gamma: f64) -> CompartmentState {
    let new_infections = beta * state.susceptible * state.infected;
    let new_recoveries = gamma * state.infected;

    CompartmentState {
        susceptible: state.susceptible - new_infections,
        infected: state.infected + new_infections - new_recoveries,
        recovered: state.recovered + new_recoveries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn step_preserves_total_mass() {
        let state = CompartmentState::seeded(1.0 / 10_000.0);
        let next = sir_step(&state, 0.21, 0.14);
        assert_abs_diff_eq!(next.total(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn seeded_state_puts_everyone_outside_r() {
        let state = CompartmentState::seeded(0.001);
        assert_abs_diff_eq!(state.susceptible, 0.999, epsilon = 1e-15);
        assert_abs_diff_eq!(state.infected, 0.001, epsilon = 1e-15);
        assert_eq!(state.recovered, 0.0);
    }

    #[test]
    fn step_with_no_susceptibles_is_pure_decay() {
        // S = 0 kills the transmission term; infections only recover.
        let state = CompartmentState {
            susceptible: 0.0,
            infected: 1.0,
            recovered: 0.0,
        };
        let next = sir_step(&state, 0.21, 0.14);
        assert_eq!(next.susceptible, 0.0);
        assert_abs_diff_eq!(next.infected, 0.86, epsilon = 1e-12);
        assert_abs_diff_eq!(next.recovered, 0.14, epsilon = 1e-12);
    }

    #[test]
    fn growth_requires_r0_above_one() {
        let state = CompartmentState::seeded(1.0 / 10_000.0);
        let growing = sir_step(&state, 0.21, 0.14);
        assert!(growing.infected > state.infected);

        let shrinking = sir_step(&state, 0.05, 0.14);
        assert!(shrinking.infected < state.infected);
    }
}
