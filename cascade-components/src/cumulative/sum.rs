use std::convert::Infallible;

use cascade_core::Step;

/// Running sum of a sequence.
///
/// Seeds with the first element, then adds each later element to the running
/// total, yielding every partial sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sum;

impl Step for Sum {
    type Error = Infallible;

    fn combine(&mut self, prev: f64, input: f64) -> Result<f64, Self::Error> {
        Ok(prev + input)
    }
}
