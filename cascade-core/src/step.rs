mod scan_iter;
mod step_fn;

pub use scan_iter::ScanIter;
pub use step_fn::{StepFn, combine_fn, step_fn};

use crate::observe::Observer;

/// A single step of a first-order recurrence over `f64` values.
///
/// A `Step` defines how an output sequence is built from an input sequence:
/// [`seed`] produces the first output element from the first input element,
/// and [`combine`] produces each later element from the previous output and
/// the current input.
///
/// Both methods take `&mut self` so that a step may carry caller-owned state,
/// such as a seeded pseudo-random generator. Two step values built from the
/// same seed can then be driven side by side and compared element for
/// element.
///
/// Steps operate on a single fixed floating-point type. Callers are
/// responsible for converting integer inputs before evaluation. Non-finite
/// values are not trapped; NaN and infinity propagate through the arithmetic
/// as usual.
///
/// ## Evaluating a recurrence
///
/// After implementing [`combine`] (and optionally overriding [`seed`], which
/// defaults to the identity), the following methods drive the recurrence:
///
/// - [`Step::evaluate`]: Collects every partial result into a `Vec`.
/// - [`Step::evaluate_observed`]: Same, with an [`Observer`] watching each
///   produced element.
/// - [`Step::scan_iter`]: Returns a lazy iterator over partial results.
///
/// [`seed`]: Step::seed
/// [`combine`]: Step::combine
pub trait Step {
    /// The error type returned if a step fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Produces the first output element from the first input element.
    ///
    /// Defaults to the identity, which is the seeding used by running sums,
    /// running products, and population trajectories alike.
    ///
    /// # Errors
    ///
    /// Each step defines its own `Error` type, allowing it to determine what
    /// constitutes a failure within its domain.
    fn seed(&mut self, first: f64) -> Result<f64, Self::Error> {
        Ok(first)
    }

    /// Produces the next output element from the previous output and the
    /// current input.
    ///
    /// # Errors
    ///
    /// Each step defines its own `Error` type, allowing it to determine what
    /// constitutes a failure within its domain.
    fn combine(&mut self, prev: f64, input: f64) -> Result<f64, Self::Error>;

    /// Evaluates the recurrence over `inputs`, collecting every partial
    /// result.
    ///
    /// The output always has the same length as `inputs`. An empty input
    /// returns an empty `Vec` without calling [`Step::seed`] or
    /// [`Step::combine`].
    ///
    /// # Errors
    ///
    /// Returns the first error produced by [`Step::seed`] or
    /// [`Step::combine`]. No further elements are evaluated after an error.
    fn evaluate(&mut self, inputs: &[f64]) -> Result<Vec<f64>, Self::Error>
    where
        Self: Sized,
    {
        self.scan_iter(inputs).collect()
    }

    /// Evaluates the recurrence while an [`Observer`] watches each produced
    /// element.
    ///
    /// The observer receives one [`Sample`] per output element, in order.
    /// Observation does not change what is computed; the result is identical
    /// to [`Step::evaluate`].
    ///
    /// # Errors
    ///
    /// Returns the first error produced by [`Step::seed`] or
    /// [`Step::combine`]. The observer does not see the failed element.
    fn evaluate_observed<Obs>(
        &mut self,
        inputs: &[f64],
        mut observer: Obs,
    ) -> Result<Vec<f64>, Self::Error>
    where
        Self: Sized,
        Obs: Observer<Sample>,
    {
        let mut output = Vec::with_capacity(inputs.len());

        for (index, result) in self.scan_iter(inputs).enumerate() {
            let value = result?;
            observer.observe(&Sample {
                index,
                input: inputs[index],
                value,
            });
            output.push(value);
        }

        Ok(output)
    }

    /// Creates a lazy iterator over the partial results of the recurrence.
    ///
    /// The iterator yields one `Result<f64, Self::Error>` per input element.
    /// If a step fails, the error is yielded and iteration stops. This form
    /// supports streaming evaluation and integrates with iterator adapters
    /// such as `.take(n)` or `.find(...)`.
    fn scan_iter<'a>(&'a mut self, inputs: &'a [f64]) -> ScanIter<'a, Self>
    where
        Self: Sized,
    {
        ScanIter::new(self, inputs)
    }
}

/// A single produced element, as seen by an [`Observer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Zero-based position of the element within the evaluation.
    pub index: usize,
    /// The input element at this position.
    pub input: f64,
    /// The produced output element.
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use thiserror::Error;

    #[test]
    fn running_sum_from_closures() {
        let mut sum = combine_fn(|prev, x| prev + x);
        let output = sum.evaluate(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(output, vec![1.0, 3.0, 6.0, 10.0]);
    }

    #[test]
    fn output_length_matches_input_length() {
        let mut sum = combine_fn(|prev, x| prev + x);

        for n in [0, 1, 2, 17] {
            let inputs = vec![1.5; n];
            let output = sum.evaluate(&inputs).unwrap();
            assert_eq!(output.len(), n);
        }
    }

    #[test]
    fn empty_input_invokes_neither_seed_nor_combine() {
        let mut seed_calls = 0_usize;
        let mut combine_calls = 0_usize;

        {
            let mut step = step_fn(
                |x| {
                    seed_calls += 1;
                    x
                },
                |prev, x| {
                    combine_calls += 1;
                    prev + x
                },
            );

            let output = step.evaluate(&[]).unwrap();
            assert!(output.is_empty());
        }

        assert_eq!(seed_calls, 0);
        assert_eq!(combine_calls, 0);
    }

    #[test]
    fn single_element_input_only_seeds() {
        let mut seed_calls = 0_usize;
        let mut combine_calls = 0_usize;

        {
            let mut step = step_fn(
                |x| {
                    seed_calls += 1;
                    x * 10.0
                },
                |prev, x| {
                    combine_calls += 1;
                    prev + x
                },
            );

            let output = step.evaluate(&[4.0]).unwrap();
            assert_eq!(output, vec![40.0]);
        }

        assert_eq!(seed_calls, 1);
        assert_eq!(combine_calls, 0);
    }

    #[test]
    fn custom_seed_applies_only_to_first_element() {
        let mut step = step_fn(|x| x + 100.0, |prev, x| prev + x);
        let output = step.evaluate(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(output, vec![101.0, 103.0, 106.0]);
    }

    #[test]
    fn decaying_recurrence_approaches_zero() {
        let mut decay = combine_fn(|prev, _| prev * 0.5);

        let mut inputs = vec![0.0; 40];
        inputs[0] = 1024.0;

        let output = decay.evaluate(&inputs).unwrap();
        assert_abs_diff_eq!(output[39], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn nan_propagates_without_trapping() {
        let mut sum = combine_fn(|prev, x| prev + x);
        let output = sum.evaluate(&[1.0, f64::NAN, 2.0]).unwrap();

        assert_eq!(output.len(), 3);
        assert_eq!(output[0], 1.0);
        assert!(output[1].is_nan());
        assert!(output[2].is_nan());
    }

    #[test]
    fn observer_sees_every_element_in_order() {
        let mut samples = Vec::new();

        {
            let mut sum = combine_fn(|prev, x| prev + x);
            let output = sum
                .evaluate_observed(&[1.0, 2.0, 3.0], |sample: &Sample| {
                    samples.push(*sample);
                })
                .unwrap();
            assert_eq!(output, vec![1.0, 3.0, 6.0]);
        }

        assert_eq!(
            samples,
            vec![
                Sample {
                    index: 0,
                    input: 1.0,
                    value: 1.0
                },
                Sample {
                    index: 1,
                    input: 2.0,
                    value: 3.0
                },
                Sample {
                    index: 2,
                    input: 3.0,
                    value: 6.0
                },
            ]
        );
    }

    #[test]
    fn no_op_observer_leaves_result_unchanged() {
        let mut sum = combine_fn(|prev, x| prev + x);
        let output = sum.evaluate_observed(&[1.0, 2.0], ()).unwrap();
        assert_eq!(output, vec![1.0, 3.0]);
    }

    /// A step that fails once the running value exceeds a maximum.
    struct Bounded {
        max_value: f64,
    }

    #[derive(Debug, Error)]
    #[error("{0} exceeds the maximum of {1}")]
    struct BoundedError(f64, f64);

    impl Step for Bounded {
        type Error = BoundedError;

        fn combine(&mut self, prev: f64, input: f64) -> Result<f64, Self::Error> {
            let next = prev + input;
            if next > self.max_value {
                Err(BoundedError(next, self.max_value))
            } else {
                Ok(next)
            }
        }
    }

    #[test]
    fn evaluate_stops_at_first_error() {
        let mut step = Bounded { max_value: 5.0 };

        let error = step.evaluate(&[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert_eq!(format!("{error}"), "6 exceeds the maximum of 5");
    }
}
