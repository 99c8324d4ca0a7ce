// src/error.rs

use thiserror::Error;

/// Errors surfaced before a simulation run begins.
///
/// A run either starts with fully valid parameters or not at all; there is
/// no partial trajectory on failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A parameter failed validation (non-positive, or out of its stated range).
    #[error("invalid parameter `{name}`: {value} ({requirement})")]
    InvalidParameter {
        /// Field name as it appears on `SimulationParameters`.
        name: &'static str,
        /// The offending value, widened to f64 for display.
        value: f64,
        /// What the field must satisfy.
        requirement: &'static str,
    },
}

impl SimulationError {
    pub fn invalid(name: &'static str, value: f64, requirement: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            requirement,
        }
    }
}
