//! Core traits and evaluators for Cascade, a framework for first-order
//! recurrences over sequences.
//!
//! A recurrence maps an ordered input sequence to an output sequence of the
//! same length: the first output element is produced by seeding from the
//! first input element, and every later element combines the previous output
//! with the next input. Implement [`Step`] once and the eager, lazy, and
//! observed evaluators are provided.
//!
//! # Examples
//!
//! ```
//! use cascade_core::{Step, combine_fn};
//!
//! let mut product = combine_fn(|prev, x| prev * x);
//! let partials = product.evaluate(&[1.0, 2.0, 3.0, 4.0]).unwrap();
//! assert_eq!(partials, vec![1.0, 2.0, 6.0, 24.0]);
//! ```

mod observe;
mod step;

pub use observe::Observer;
pub use step::{Sample, ScanIter, Step, StepFn, combine_fn, step_fn};
