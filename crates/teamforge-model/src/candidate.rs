//! Scored candidate records and the sanitized pool the optimizer reads.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

fn nan() -> f64 {
    f64::NAN
}

/// One scored candidate, as produced by the upstream scoring pipeline.
///
/// Score fields default to NaN when absent from a record so that partial
/// input still deserializes; [`CandidatePool::from_records`] turns every
/// non-finite score into `0.0` before optimization.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CandidateRecord {
    /// Display name, passed through to output untouched.
    #[serde(default)]
    pub name: Option<String>,
    /// Technical skill score, nominally in `[0, 1]`.
    #[serde(default = "nan")]
    pub technical_score: f64,
    /// Education score. Scored on a smaller scale than the other two
    /// dimensions by the upstream rubric.
    #[serde(default = "nan")]
    pub education_score: f64,
    /// Soft skills score, nominally in `[0, 1]`.
    #[serde(default = "nan")]
    pub soft_skills_score: f64,
    /// Normalized composite score across all dimensions.
    #[serde(default = "nan")]
    pub normalized_overall_score: f64,
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Immutable, index-addressed collection of candidate scores.
///
/// Scores are stored as parallel arrays indexed `0..len()`, the layout every
/// fitness computation reads. Construction is the single sanitation point:
/// both the arrays and the retained records hold only finite values.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    records: Vec<CandidateRecord>,
    technical: Vec<f64>,
    education: Vec<f64>,
    soft_skills: Vec<f64>,
    overall: Vec<f64>,
}

impl CandidatePool {
    /// Builds a pool from raw records, sanitizing every score.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyCandidatePool`] if `records` is
    /// empty.
    pub fn from_records(records: Vec<CandidateRecord>) -> Result<Self, ConfigurationError> {
        if records.is_empty() {
            return Err(ConfigurationError::EmptyCandidatePool);
        }

        let records = records
            .into_iter()
            .map(|r| CandidateRecord {
                name: r.name,
                technical_score: finite_or_zero(r.technical_score),
                education_score: finite_or_zero(r.education_score),
                soft_skills_score: finite_or_zero(r.soft_skills_score),
                normalized_overall_score: finite_or_zero(r.normalized_overall_score),
            })
            .collect::<Vec<_>>();

        let technical = records.iter().map(|r| r.technical_score).collect();
        let education = records.iter().map(|r| r.education_score).collect();
        let soft_skills = records.iter().map(|r| r.soft_skills_score).collect();
        let overall = records.iter().map(|r| r.normalized_overall_score).collect();

        Ok(Self {
            records,
            technical,
            education,
            soft_skills,
            overall,
        })
    }

    /// Number of candidates in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the pool holds no candidates.
    ///
    /// Always `false` for a constructed pool; kept for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All sanitized records, in pool-index order.
    #[must_use]
    pub fn records(&self) -> &[CandidateRecord] {
        &self.records
    }

    /// The record at pool index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[must_use]
    pub fn record(&self, index: usize) -> &CandidateRecord {
        &self.records[index]
    }

    /// Technical scores, indexed by pool index.
    #[must_use]
    pub fn technical(&self) -> &[f64] {
        &self.technical
    }

    /// Education scores, indexed by pool index.
    #[must_use]
    pub fn education(&self) -> &[f64] {
        &self.education
    }

    /// Soft skills scores, indexed by pool index.
    #[must_use]
    pub fn soft_skills(&self) -> &[f64] {
        &self.soft_skills
    }

    /// Normalized overall scores, indexed by pool index.
    #[must_use]
    pub fn overall(&self) -> &[f64] {
        &self.overall
    }
}
