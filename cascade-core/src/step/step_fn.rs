use std::convert::{Infallible, identity};

use super::Step;

/// A wrapper that allows using closures as recurrence steps.
///
/// Built with [`step_fn`] or [`combine_fn`]. The seed and combine functions
/// are held as explicit values; nothing is looked up by name or captured
/// from ambient state.
pub struct StepFn<S, C> {
    seed: S,
    combine: C,
}

/// Builds a [`Step`] from explicit `seed` and `combine` closures.
///
/// # Examples
///
/// ```
/// use cascade_core::{Step, step_fn};
///
/// let mut shifted_sum = step_fn(|x| x + 10.0, |prev, x| prev + x);
/// let output = shifted_sum.evaluate(&[1.0, 2.0]).unwrap();
/// assert_eq!(output, vec![11.0, 13.0]);
/// ```
pub fn step_fn<S, C>(seed: S, combine: C) -> StepFn<S, C>
where
    S: FnMut(f64) -> f64,
    C: FnMut(f64, f64) -> f64,
{
    StepFn { seed, combine }
}

/// Builds a [`Step`] from a `combine` closure, seeding with the first input
/// element unchanged.
///
/// # Examples
///
/// ```
/// use cascade_core::{Step, combine_fn};
///
/// let mut sum = combine_fn(|prev, x| prev + x);
/// let output = sum.evaluate(&[1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(output, vec![1.0, 3.0, 6.0]);
/// ```
pub fn combine_fn<C>(combine: C) -> StepFn<fn(f64) -> f64, C>
where
    C: FnMut(f64, f64) -> f64,
{
    StepFn {
        seed: identity,
        combine,
    }
}

impl<S, C> Step for StepFn<S, C>
where
    S: FnMut(f64) -> f64,
    C: FnMut(f64, f64) -> f64,
{
    type Error = Infallible;

    fn seed(&mut self, first: f64) -> Result<f64, Self::Error> {
        Ok((self.seed)(first))
    }

    fn combine(&mut self, prev: f64, input: f64) -> Result<f64, Self::Error> {
        Ok((self.combine)(prev, input))
    }
}
