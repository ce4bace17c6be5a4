//! Populations, individuals, and tournament selection.

use rand::{Rng, seq::IndexedRandom as _};
use teamforge_model::{CandidatePool, Weightings};
use teamforge_stats::DescriptiveStats;

use crate::{chromosome::Chromosome, fitness::FitnessEvaluator, params::GaParams};

/// Tournament size for parent selection. Three-way tournaments give
/// moderate selection pressure while keeping weak individuals reachable.
pub const TOURNAMENT_SIZE: usize = 3;

/// One candidate solution: a chromosome plus its last evaluated fitness.
#[derive(Debug, Clone)]
pub struct Individual {
    chromosome: Chromosome,
    fitness: f64,
}

impl Individual {
    /// Wraps a freshly bred chromosome that has not been evaluated yet.
    pub(crate) fn unevaluated(chromosome: Chromosome) -> Self {
        Self {
            chromosome,
            fitness: f64::NEG_INFINITY,
        }
    }

    /// The team this individual encodes.
    #[must_use]
    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    /// Fitness from the most recent evaluation. Finite once evaluated.
    #[must_use]
    pub fn fitness(&self) -> f64 {
        self.fitness
    }
}

/// One generation's worth of individuals for a single archetype run.
///
/// The population size is fixed for a whole run; each generation is rebuilt
/// in full and replaces the previous one.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates the initial population: `population_size` independent random
    /// chromosomes. No deduplication across chromosomes is performed.
    #[must_use]
    pub fn random<R>(rng: &mut R, pool_size: usize, params: &GaParams) -> Self
    where
        R: Rng + ?Sized,
    {
        let individuals = (0..params.population_size)
            .map(|_| Individual::unevaluated(Chromosome::random(rng, pool_size, params.team_size)))
            .collect();
        Self { individuals }
    }

    pub(crate) fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// All individuals, best-first after [`evaluate_fitness`](Self::evaluate_fitness).
    #[must_use]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Number of individuals. Constant across generations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the population holds no individuals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Evaluates every individual and sorts the population by fitness,
    /// descending.
    ///
    /// Stored fitness is clamped to 0.0 if the evaluator ever returned a
    /// non-finite value, so downstream comparisons work on finite numbers.
    pub fn evaluate_fitness(&mut self, evaluator: &FitnessEvaluator<'_>, weightings: &Weightings) {
        for individual in &mut self.individuals {
            let fitness = evaluator.evaluate(&individual.chromosome, weightings);
            individual.fitness = if fitness.is_finite() { fitness } else { 0.0 };
        }
        self.individuals
            .sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    }

    /// The fittest individual of the current generation.
    ///
    /// # Panics
    ///
    /// Panics on an empty population; parameter validation guarantees at
    /// least one individual.
    #[must_use]
    pub fn best(&self) -> &Individual {
        self.individuals
            .first()
            .expect("population is never empty")
    }

    /// Fitness distribution of the current generation.
    #[must_use]
    pub fn fitness_stats(&self) -> DescriptiveStats {
        DescriptiveStats::new(self.individuals.iter().map(Individual::fitness))
            .expect("population is never empty")
    }
}

/// Tournament selection: sample [`TOURNAMENT_SIZE`] distinct individuals
/// uniformly and return the fittest.
///
/// Non-finite fitness is treated as 0.0 for the comparison only; the stored
/// value is untouched. Populations smaller than the tournament size fall
/// back to comparing every individual.
pub(crate) fn tournament_select<'a, R>(individuals: &'a [Individual], rng: &mut R) -> &'a Individual
where
    R: Rng + ?Sized,
{
    fn comparable(individual: &Individual) -> f64 {
        if individual.fitness.is_finite() {
            individual.fitness
        } else {
            0.0
        }
    }
    individuals
        .choose_multiple(rng, TOURNAMENT_SIZE)
        .max_by(|a, b| comparable(a).total_cmp(&comparable(b)))
        .expect("population is never empty")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;
    use teamforge_model::{CandidatePool, CandidateRecord};

    use super::*;

    fn test_pool(overalls: &[f64]) -> CandidatePool {
        let records = overalls
            .iter()
            .map(|&overall| CandidateRecord {
                name: None,
                technical_score: 0.0,
                education_score: 0.0,
                soft_skills_score: 0.0,
                normalized_overall_score: overall,
            })
            .collect();
        CandidatePool::from_records(records).unwrap()
    }

    fn quality_only() -> Weightings {
        Weightings {
            individual_quality: 1.0,
            team_synergy: 0.0,
            team_diversity: 0.0,
        }
    }

    #[test]
    fn random_population_has_requested_size_and_valid_members() {
        let mut rng = Pcg64::seed_from_u64(20);
        let params = GaParams {
            team_size: 4,
            population_size: 25,
            ..GaParams::default()
        };
        let population = Population::random(&mut rng, 9, &params);
        assert_eq!(population.len(), 25);
        for individual in population.individuals() {
            assert_eq!(individual.chromosome().len(), 4);
            assert!(!individual.chromosome().has_duplicates());
            assert!(individual.chromosome().genes().iter().all(|&g| g < 9));
        }
    }

    #[test]
    fn evaluation_sorts_best_first() {
        let mut rng = Pcg64::seed_from_u64(21);
        let pool = test_pool(&[0.1, 0.9, 0.5, 0.3, 0.7, 0.2]);
        let params = GaParams {
            team_size: 2,
            population_size: 30,
            ..GaParams::default()
        };
        let mut population = Population::random(&mut rng, pool.len(), &params);
        let evaluator = FitnessEvaluator::new(&pool);
        population.evaluate_fitness(&evaluator, &quality_only());

        let fitnesses = population
            .individuals()
            .iter()
            .map(Individual::fitness)
            .collect::<Vec<_>>();
        assert!(fitnesses.is_sorted_by(|a, b| a >= b));
        assert_eq!(population.best().fitness(), fitnesses[0]);
        assert!(fitnesses.iter().all(|f| f.is_finite()));
    }

    #[test]
    fn tournament_prefers_the_fittest_sampled() {
        // With a tournament spanning the whole population the winner must be
        // the global best.
        let mut rng = Pcg64::seed_from_u64(22);
        let individuals = vec![
            Individual {
                chromosome: Chromosome::from_genes(vec![0]),
                fitness: 0.2,
            },
            Individual {
                chromosome: Chromosome::from_genes(vec![1]),
                fitness: 0.9,
            },
            Individual {
                chromosome: Chromosome::from_genes(vec![2]),
                fitness: 0.4,
            },
        ];
        for _ in 0..20 {
            let winner = tournament_select(&individuals, &mut rng);
            assert_eq!(winner.fitness(), 0.9);
        }
    }

    #[test]
    fn tournament_treats_non_finite_fitness_as_zero() {
        let mut rng = Pcg64::seed_from_u64(23);
        let individuals = vec![
            Individual {
                chromosome: Chromosome::from_genes(vec![0]),
                fitness: f64::NAN,
            },
            Individual {
                chromosome: Chromosome::from_genes(vec![1]),
                fitness: 0.1,
            },
            Individual {
                chromosome: Chromosome::from_genes(vec![2]),
                fitness: f64::NEG_INFINITY,
            },
        ];
        for _ in 0..20 {
            let winner = tournament_select(&individuals, &mut rng);
            assert_eq!(winner.fitness(), 0.1);
        }
    }
}
