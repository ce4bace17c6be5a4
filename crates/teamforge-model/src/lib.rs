//! Domain types for the team composition optimizer.
//!
//! This crate owns the data the optimizer consumes but does not produce:
//! scored candidate records (from the upstream scoring pipeline), the
//! sanitized [`CandidatePool`] built from them, and the named weighting
//! profiles ([`Archetype`]) the optimizer runs once each.
//!
//! # Sanitation policy
//!
//! Upstream scoring may emit missing or non-finite values for incomplete
//! candidates. That is not an error here: every score is forced to a finite
//! number (NaN/±Inf become `0.0`) exactly once, when the pool is built.
//! Everything downstream can assume finite inputs.

pub mod archetype;
pub mod candidate;
pub mod error;

pub use self::{
    archetype::{Archetype, Weightings},
    candidate::{CandidatePool, CandidateRecord},
    error::ConfigurationError,
};
