//! Fitness evaluation of one team under one archetype's weightings.
//!
//! Fitness is a weighted sum of three sub-metrics, each computed purely from
//! the scores of the `team_size` selected candidates:
//!
//! - **individual quality**: mean overall score, with a multiplicative bonus
//!   when the team covers an expert in every skill dimension
//! - **team synergy**: half "specialists" (high per-member skill variance),
//!   half "balance" (low per-skill variance across members)
//! - **team diversity**: half spread of overall scores, half skill coverage
//!
//! Evaluation has no side effects and must never produce NaN: degenerate
//! inputs clamp to safe defaults instead.

use teamforge_model::{CandidatePool, Weightings};
use teamforge_stats::{mean, std_dev, variance};

use crate::chromosome::Chromosome;

/// A team member counts as a technical expert above this score.
pub const TECHNICAL_EXPERT_THRESHOLD: f64 = 0.2;

/// A team member counts as an education expert above this score.
///
/// Deliberately far below the other two thresholds: the upstream rubric
/// scores education on a smaller numeric scale.
pub const EDUCATION_EXPERT_THRESHOLD: f64 = 0.03;

/// A team member counts as a soft-skills expert above this score.
pub const SOFT_SKILLS_EXPERT_THRESHOLD: f64 = 0.2;

/// Multiplier applied to individual quality when the team has at least one
/// expert in every skill dimension simultaneously. All-or-nothing: partial
/// coverage earns no bonus.
pub const EXPERT_BONUS: f64 = 1.2;

/// A (member, skill) slot counts toward skill coverage above this score.
pub const SKILL_COVERAGE_THRESHOLD: f64 = 0.1;

/// Fallback balance score when the across-team skill variance is not finite.
const BALANCE_FALLBACK: f64 = 0.5;

/// Fitness multiplier for a chromosome carrying duplicate genes. The
/// operators make duplicates structurally impossible; the evaluator still
/// refuses to trust its input.
const DUPLICATE_PENALTY: f64 = 0.5;

/// Scores of the members a chromosome selects, gathered once per evaluation.
struct TeamScores {
    technical: Vec<f64>,
    education: Vec<f64>,
    soft_skills: Vec<f64>,
    overall: Vec<f64>,
}

impl TeamScores {
    fn gather(pool: &CandidatePool, chromosome: &Chromosome) -> Self {
        let pick = |scores: &[f64]| {
            chromosome
                .genes()
                .iter()
                .map(|&index| scores[index])
                .collect::<Vec<_>>()
        };
        Self {
            technical: pick(pool.technical()),
            education: pick(pool.education()),
            soft_skills: pick(pool.soft_skills()),
            overall: pick(pool.overall()),
        }
    }
}

/// Pure fitness function over a sanitized candidate pool.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    pool: &'a CandidatePool,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator reading from `pool`.
    #[must_use]
    pub fn new(pool: &'a CandidatePool) -> Self {
        Self { pool }
    }

    /// Computes the fitness of `chromosome` under `weightings`.
    ///
    /// Always finite for finite weightings; a NaN combination clamps to 0.0.
    ///
    /// # Panics
    ///
    /// Panics if any gene is outside the pool's index range.
    #[must_use]
    pub fn evaluate(&self, chromosome: &Chromosome, weightings: &Weightings) -> f64 {
        let scores = TeamScores::gather(self.pool, chromosome);

        let fitness = weightings.individual_quality * individual_quality(&scores)
            + weightings.team_synergy * team_synergy(&scores)
            + weightings.team_diversity * team_diversity(&scores);

        let fitness = if fitness.is_nan() { 0.0 } else { fitness };
        if chromosome.has_duplicates() {
            fitness * DUPLICATE_PENALTY
        } else {
            fitness
        }
    }
}

/// Mean overall score, boosted by [`EXPERT_BONUS`] when every skill
/// dimension has at least one expert on the team.
fn individual_quality(scores: &TeamScores) -> f64 {
    let quality = mean(&scores.overall);

    let above = |values: &[f64], threshold: f64| values.iter().any(|&v| v > threshold);
    let has_all_experts = above(&scores.technical, TECHNICAL_EXPERT_THRESHOLD)
        && above(&scores.education, EDUCATION_EXPERT_THRESHOLD)
        && above(&scores.soft_skills, SOFT_SKILLS_EXPERT_THRESHOLD);

    if has_all_experts {
        quality * EXPERT_BONUS
    } else {
        quality
    }
}

/// Half specialist score, half balance score.
///
/// The specialist score is the mean, over members, of the variance of that
/// member's (technical, education, soft skills) vector: higher means the
/// team leans toward specialists. The balance score rewards skills being
/// evenly distributed across members and clamps to `[0, 1]`, defaulting to
/// 0.5 when the underlying variance is degenerate.
fn team_synergy(scores: &TeamScores) -> f64 {
    let member_variances = (0..scores.overall.len())
        .map(|m| {
            variance(&[
                scores.technical[m],
                scores.education[m],
                scores.soft_skills[m],
            ])
        })
        .collect::<Vec<_>>();
    let specialist_score = mean(&member_variances);

    let skill_variances = [
        variance(&scores.technical),
        variance(&scores.education),
        variance(&scores.soft_skills),
    ];
    let mean_variance = mean(&skill_variances);
    let balance_score = if mean_variance.is_finite() {
        (1.0 - mean_variance).clamp(0.0, 1.0)
    } else {
        BALANCE_FALLBACK
    };

    0.5 * specialist_score + 0.5 * balance_score
}

/// Half spread of overall scores, half skill coverage.
///
/// Coverage counts the (member, skill) slots whose score exceeds
/// [`SKILL_COVERAGE_THRESHOLD`], out of `3 * team_size` possible slots.
fn team_diversity(scores: &TeamScores) -> f64 {
    let spread = std_dev(&scores.overall);
    let score_diversity = if spread.is_finite() { spread } else { 0.0 };

    let covered = [&scores.technical, &scores.education, &scores.soft_skills]
        .into_iter()
        .flatten()
        .filter(|&&v| v > SKILL_COVERAGE_THRESHOLD)
        .count();
    #[expect(clippy::cast_precision_loss)]
    let skill_coverage = covered as f64 / (3 * scores.overall.len()) as f64;

    0.5 * score_diversity + 0.5 * skill_coverage
}
