use std::{iter::FusedIterator, slice};

use super::Step;

/// A lazy iterator over the partial results of a recurrence.
///
/// Yields one `Result` per input element: the first element is produced by
/// [`Step::seed`], and each later element by [`Step::combine`] applied to the
/// previous output and the current input.
///
/// If a step fails, the error is yielded and iteration stops.
pub struct ScanIter<'a, S: Step> {
    step: &'a mut S,
    inputs: slice::Iter<'a, f64>,
    prev: Option<f64>,
    failed: bool,
}

impl<'a, S: Step> ScanIter<'a, S> {
    pub(super) fn new(step: &'a mut S, inputs: &'a [f64]) -> Self {
        Self {
            step,
            inputs: inputs.iter(),
            prev: None,
            failed: false,
        }
    }
}

impl<S: Step> Iterator for ScanIter<'_, S> {
    type Item = Result<f64, S::Error>;

    /// Produces the next partial result.
    ///
    /// - The first input element is seeded; later elements are combined with
    ///   the previous output.
    /// - On success, yields the new partial result.
    /// - On error, yields the error and ends the iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let &input = self.inputs.next()?;

        let result = match self.prev {
            // No output yet - seed from the first input element.
            None => self.step.seed(input),
            // An output exists - combine it with the current input.
            Some(prev) => self.step.combine(prev, input),
        };

        match result {
            Ok(value) => {
                self.prev = Some(value);
                Some(Ok(value))
            }
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            self.inputs.size_hint()
        }
    }
}

/// Marks that iteration always ends after the first `None`.
impl<S: Step> FusedIterator for ScanIter<'_, S> {}
