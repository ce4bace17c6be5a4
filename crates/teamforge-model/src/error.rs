use thiserror::Error;

/// Fatal input problems detected before any optimization work starts.
///
/// These are never retried or recovered; the whole request aborts. Malformed
/// numeric values are deliberately NOT represented here — they are sanitized
/// to finite defaults instead (see the crate-level docs).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The candidate record set was empty.
    #[error("candidate pool is empty")]
    EmptyCandidatePool,

    /// A required score column was absent from tabular candidate input.
    #[error("required score column `{column}` is missing from candidate data")]
    MissingScoreColumn {
        /// Name of the missing column.
        column: String,
    },

    /// The archetype set was empty.
    #[error("no archetypes provided")]
    NoArchetypes,
}
