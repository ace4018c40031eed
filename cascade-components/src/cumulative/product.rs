use std::convert::Infallible;

use cascade_core::Step;

/// Running product of a sequence.
///
/// Seeds with the first element, then multiplies the running value by each
/// later element, yielding every partial product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Product;

impl Step for Product {
    type Error = Infallible;

    fn combine(&mut self, prev: f64, input: f64) -> Result<f64, Self::Error> {
        Ok(prev * input)
    }
}
