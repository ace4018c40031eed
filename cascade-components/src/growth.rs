//! Discrete population-growth recurrences.
//!
//! The Ricker map advances a population one generation at a time. It is an
//! autonomous recurrence: the next value depends only on the previous one,
//! so the per-element input drives the length of an evaluation but does not
//! enter the arithmetic.

mod ricker;
mod stochastic;

pub use ricker::{Parameters, ParametersError, Ricker};
pub use stochastic::{NoiseError, StochasticRicker};
