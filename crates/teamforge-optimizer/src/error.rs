use teamforge_model::ConfigurationError;
use thiserror::Error;

/// A GA parameter outside its legal range, rejected before any generation
/// runs.
///
/// The reference pipeline silently accepted out-of-range rates; this
/// implementation rejects them at validation instead (see `GaParams::validate`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameterError {
    /// `team_size` was zero.
    #[error("team size must be at least 1")]
    ZeroTeamSize,

    /// `team_size` was larger than the candidate pool.
    #[error("team size {team_size} exceeds candidate pool size {pool_size}")]
    TeamSizeExceedsPool {
        /// Requested team size.
        team_size: usize,
        /// Number of candidates available.
        pool_size: usize,
    },

    /// `population_size` was zero.
    #[error("population size must be at least 1")]
    ZeroPopulationSize,

    /// `generations` was zero.
    #[error("generation count must be at least 1")]
    ZeroGenerations,

    /// A probability parameter was outside `[0.0, 1.0]` (or NaN).
    #[error("{rate} must be within [0.0, 1.0], got {value}")]
    RateOutOfRange {
        /// Which rate was rejected.
        rate: &'static str,
        /// The offending value.
        value: f64,
    },
}

/// Any failure the orchestrator can surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizerError {
    /// Missing candidates, archetypes, or score columns.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A GA parameter outside its legal range.
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),
}
