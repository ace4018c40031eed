use std::{convert::Infallible, iter};

use cascade_core::Step;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parameters of the Ricker growth map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Intrinsic growth rate, often written `r`.
    pub rate: f64,
    /// Carrying capacity, often written `K`.
    pub capacity: f64,
}

/// Error returned when constructing a growth map from invalid [`Parameters`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParametersError {
    #[error("growth rate must be finite, got {0}")]
    NonFiniteRate(f64),

    #[error("carrying capacity must be positive and finite, got {0}")]
    InvalidCapacity(f64),
}

/// The deterministic Ricker population-growth map.
///
/// Each generation advances the population by
///
/// ```text
/// next = prev * exp(rate * (1 - prev / capacity))
/// ```
///
/// A population at the carrying capacity stays there exactly; populations
/// below it grow and populations above it shrink, at a pace set by the
/// growth rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ricker {
    parameters: Parameters,
}

impl Ricker {
    /// Creates a Ricker map from validated parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParametersError`] if the growth rate is non-finite, or if
    /// the carrying capacity is zero, negative, or non-finite.
    pub fn new(parameters: Parameters) -> Result<Self, ParametersError> {
        let Parameters { rate, capacity } = parameters;

        if !rate.is_finite() {
            return Err(ParametersError::NonFiniteRate(rate));
        }

        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(ParametersError::InvalidCapacity(capacity));
        }

        Ok(Self { parameters })
    }

    /// Returns the map's parameters.
    #[must_use]
    pub fn parameters(&self) -> Parameters {
        self.parameters
    }

    /// Applies the map to a population for one generation.
    #[must_use]
    pub fn apply(&self, population: f64) -> f64 {
        let Parameters { rate, capacity } = self.parameters;
        population * f64::exp(rate * (1.0 - population / capacity))
    }

    /// Runs the map for `len` generations starting from `initial`.
    ///
    /// The first element is `initial` itself; the output is empty when `len`
    /// is zero.
    #[must_use]
    pub fn trajectory(&self, initial: f64, len: usize) -> Vec<f64> {
        iter::successors(Some(initial), |&prev| Some(self.apply(prev)))
            .take(len)
            .collect()
    }
}

impl Step for Ricker {
    type Error = Infallible;

    fn combine(&mut self, prev: f64, _input: f64) -> Result<f64, Self::Error> {
        Ok(self.apply(prev))
    }
}
