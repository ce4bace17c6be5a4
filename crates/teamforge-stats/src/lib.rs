//! Small statistics toolkit shared by the optimizer and the CLI.
//!
//! The fitness evaluator needs population-level moments (mean, variance,
//! standard deviation) over tiny slices, and the CLI reports fitness
//! distributions per generation. Both go through this crate so the numeric
//! conventions (population variance, `f64` everywhere) stay in one place.

pub mod descriptive;

pub use self::descriptive::{DescriptiveStats, mean, std_dev, variance};
