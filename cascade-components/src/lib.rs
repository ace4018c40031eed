//! A collection of recurrence steps for Cascade.
//!
//! Each component implements [`cascade_core::Step`] and is driven by the
//! evaluators that trait provides: [`evaluate`], [`evaluate_observed`], and
//! [`scan_iter`].
//!
//! [`evaluate`]: cascade_core::Step::evaluate
//! [`evaluate_observed`]: cascade_core::Step::evaluate_observed
//! [`scan_iter`]: cascade_core::Step::scan_iter

pub mod cumulative;
pub mod growth;
