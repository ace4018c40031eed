//! Running aggregations over a sequence.
//!
//! Each step here seeds with the first input element and folds every later
//! element into the running value.

mod discounted;
mod product;
mod sum;

pub use discounted::{DiscountedSum, NonFiniteFactorError};
pub use product::Product;
pub use sum::Sum;
