//! Output types handed to the persistence/CLI layer.
//!
//! Everything here serializes to plain finite numbers: the engine clamps
//! the reported fitness and the pool sanitized member scores at load time,
//! so no NaN or infinity can reach serialized output.

use serde::Serialize;
use teamforge_model::{Archetype, CandidateRecord};

/// Progress snapshot for one generation of one archetype run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerationSummary {
    /// Zero-based generation index.
    pub generation: usize,
    /// Best-ever fitness observed up to and including this generation.
    /// Non-decreasing over a run.
    pub best_fitness: f64,
    /// Mean fitness of this generation's population.
    pub mean_fitness: f64,
}

/// The best team found for one archetype over a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizedTeam {
    /// The archetype this team was optimized for, passed through unchanged.
    pub archetype: Archetype,
    /// Best-ever fitness across all generations. Finite; clamped to 0.0 if
    /// it would otherwise be NaN or infinite.
    pub fitness: f64,
    /// Pool indices of the selected candidates, in chromosome order.
    pub team_indices: Vec<usize>,
    /// The selected candidate records, in the same order as `team_indices`.
    pub team_members: Vec<CandidateRecord>,
    /// Per-generation progress, one entry per generation.
    pub history: Vec<GenerationSummary>,
}
