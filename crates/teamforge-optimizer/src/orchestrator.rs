//! Runs one evolution per archetype and aggregates the results.

use std::collections::BTreeMap;

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use teamforge_model::{Archetype, CandidatePool, ConfigurationError};

use crate::{
    engine::EvolutionEngine, error::OptimizerError, params::GaParams, result::OptimizedTeam,
};

/// Optimizes team composition for every archetype over one shared pool.
///
/// Archetype runs are fully independent: each gets its own [`Pcg64`] stream
/// derived from the base seed and the archetype's position, so adding or
/// reordering archetypes does not perturb other runs beyond their seeds,
/// and a fixed base seed reproduces the entire result set.
#[derive(Debug)]
pub struct TeamOptimizer<'a> {
    pool: &'a CandidatePool,
    archetypes: &'a [Archetype],
    params: GaParams,
}

impl<'a> TeamOptimizer<'a> {
    /// Creates an optimizer over `pool` for all `archetypes`.
    #[must_use]
    pub fn new(pool: &'a CandidatePool, archetypes: &'a [Archetype], params: GaParams) -> Self {
        Self {
            pool,
            archetypes,
            params,
        }
    }

    /// Runs every archetype sequentially and returns results keyed by
    /// archetype name.
    ///
    /// # Errors
    ///
    /// Fails before any generation runs when the archetype set is empty,
    /// the pool is empty, or the parameters do not validate against the
    /// pool size.
    pub fn optimize(&self, seed: u64) -> Result<BTreeMap<String, OptimizedTeam>, OptimizerError> {
        if self.pool.is_empty() {
            return Err(ConfigurationError::EmptyCandidatePool.into());
        }
        if self.archetypes.is_empty() {
            return Err(ConfigurationError::NoArchetypes.into());
        }
        self.params.validate(self.pool.len())?;

        let mut results = BTreeMap::new();
        for (offset, archetype) in (0_u64..).zip(self.archetypes.iter()) {
            log::info!("optimizing for archetype `{}`", archetype.name);
            let rng = Pcg64::seed_from_u64(seed.wrapping_add(offset));
            let mut engine = EvolutionEngine::new(self.params, rng);
            let team = engine.run(self.pool, archetype);
            log::info!(
                "archetype `{}` done: best fitness {:.4}",
                archetype.name,
                team.fitness,
            );
            results.insert(archetype.name.clone(), team);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use teamforge_model::{CandidateRecord, Weightings};

    use crate::error::InvalidParameterError;

    use super::*;

    fn record(technical: f64, education: f64, soft: f64, overall: f64) -> CandidateRecord {
        CandidateRecord {
            name: None,
            technical_score: technical,
            education_score: education,
            soft_skills_score: soft,
            normalized_overall_score: overall,
        }
    }

    fn varied_pool() -> CandidatePool {
        // Mixed profiles: strong generalists, narrow specialists, and weak
        // candidates, so quality- and diversity-driven archetypes can
        // legitimately disagree.
        CandidatePool::from_records(vec![
            record(0.9, 0.05, 0.8, 0.9),
            record(0.1, 0.01, 0.1, 0.15),
            record(0.8, 0.04, 0.7, 0.85),
            record(0.5, 0.0, 0.0, 0.3),
            record(0.0, 0.05, 0.5, 0.35),
            record(0.7, 0.03, 0.6, 0.7),
            record(0.05, 0.0, 0.9, 0.4),
            record(0.9, 0.0, 0.05, 0.45),
        ])
        .unwrap()
    }

    fn archetype(name: &str, weightings: Weightings) -> Archetype {
        Archetype {
            name: name.to_owned(),
            description: format!("{name} archetype"),
            weightings,
        }
    }

    fn small_params() -> GaParams {
        GaParams {
            team_size: 3,
            population_size: 40,
            generations: 25,
            ..GaParams::default()
        }
    }

    #[test]
    fn returns_one_result_per_archetype() {
        let pool = varied_pool();
        let archetypes = vec![
            archetype(
                "Core",
                Weightings {
                    individual_quality: 1.0,
                    team_synergy: 0.0,
                    team_diversity: 0.0,
                },
            ),
            archetype(
                "Mosaic",
                Weightings {
                    individual_quality: 0.0,
                    team_synergy: 0.0,
                    team_diversity: 1.0,
                },
            ),
        ];
        let optimizer = TeamOptimizer::new(&pool, &archetypes, small_params());
        let results = optimizer.optimize(123).unwrap();

        assert_eq!(results.len(), 2);
        let core = &results["Core"];
        let mosaic = &results["Mosaic"];
        assert_eq!(core.archetype.name, "Core");
        assert_eq!(mosaic.archetype.name, "Mosaic");
        assert!(core.fitness.is_finite());
        assert!(mosaic.fitness.is_finite());
        // Pure individual quality must pick the three best overall scores.
        let mut core_indices = core.team_indices.clone();
        core_indices.sort_unstable();
        assert_eq!(core_indices, vec![0, 2, 5]);
    }

    #[test]
    fn empty_archetypes_are_rejected() {
        let pool = varied_pool();
        let optimizer = TeamOptimizer::new(&pool, &[], small_params());
        let err = optimizer.optimize(1).unwrap_err();
        assert_eq!(
            err,
            OptimizerError::Configuration(ConfigurationError::NoArchetypes)
        );
    }

    #[test]
    fn oversized_team_is_rejected_before_any_generation() {
        let pool = varied_pool();
        let archetypes = vec![archetype(
            "Core",
            Weightings {
                individual_quality: 1.0,
                team_synergy: 0.0,
                team_diversity: 0.0,
            },
        )];
        let params = GaParams {
            team_size: pool.len() + 1,
            ..small_params()
        };
        let optimizer = TeamOptimizer::new(&pool, &archetypes, params);
        let err = optimizer.optimize(1).unwrap_err();
        assert_eq!(
            err,
            OptimizerError::InvalidParameter(InvalidParameterError::TeamSizeExceedsPool {
                team_size: pool.len() + 1,
                pool_size: pool.len(),
            })
        );
    }

    #[test]
    fn same_seed_reproduces_all_archetype_results() {
        let pool = varied_pool();
        let archetypes = vec![
            archetype(
                "Core",
                Weightings {
                    individual_quality: 1.0,
                    team_synergy: 0.0,
                    team_diversity: 0.0,
                },
            ),
            archetype(
                "Balance",
                Weightings {
                    individual_quality: 0.4,
                    team_synergy: 0.3,
                    team_diversity: 0.3,
                },
            ),
        ];
        let optimizer = TeamOptimizer::new(&pool, &archetypes, small_params());
        let first = optimizer.optimize(77).unwrap();
        let second = optimizer.optimize(77).unwrap();

        for (name, team) in &first {
            assert_eq!(team.team_indices, second[name].team_indices);
            assert_eq!(team.fitness.to_bits(), second[name].fitness.to_bits());
        }
    }
}
