//! The generation loop for a single archetype.

use rand::Rng;
use teamforge_model::{Archetype, CandidatePool};

use crate::{
    chromosome::{self, Chromosome},
    fitness::FitnessEvaluator,
    genetic::{Individual, Population, tournament_select},
    params::GaParams,
    result::{GenerationSummary, OptimizedTeam},
};

/// How often generation progress is logged at info level.
const PROGRESS_LOG_INTERVAL: usize = 10;

/// Drives one evolution run: initialize, then evaluate / breed / advance
/// for a fixed number of generations.
///
/// The engine owns its random source so that independent archetype runs
/// never share randomness; seed the source to reproduce a run exactly. The
/// best-ever (chromosome, fitness) pair is threaded through the loop as an
/// explicit value and updated only on strict improvement, so the returned
/// team does not have to be a member of the final population.
#[derive(Debug)]
pub struct EvolutionEngine<R> {
    params: GaParams,
    rng: R,
}

impl<R> EvolutionEngine<R>
where
    R: Rng,
{
    /// Creates an engine with validated parameters and an owned random
    /// source.
    pub fn new(params: GaParams, rng: R) -> Self {
        Self { params, rng }
    }

    /// Runs the full generation loop for `archetype` over `pool`.
    ///
    /// Expects `params.validate(pool.len())` to have passed; the orchestrator
    /// enforces that before construction.
    #[must_use]
    pub fn run(&mut self, pool: &CandidatePool, archetype: &Archetype) -> OptimizedTeam {
        debug_assert!(self.params.validate(pool.len()).is_ok());

        let evaluator = FitnessEvaluator::new(pool);
        let mut population = Population::random(&mut self.rng, pool.len(), &self.params);

        let mut best_chromosome: Option<Chromosome> = None;
        let mut best_fitness = f64::NEG_INFINITY;
        let mut history = Vec::with_capacity(self.params.generations);

        for generation in 0..self.params.generations {
            population.evaluate_fitness(&evaluator, &archetype.weightings);

            let leader = population.best();
            if leader.fitness() > best_fitness {
                best_fitness = leader.fitness();
                best_chromosome = Some(leader.chromosome().clone());
            }

            let stats = population.fitness_stats();
            history.push(GenerationSummary {
                generation,
                best_fitness,
                mean_fitness: stats.mean,
            });
            log::debug!(
                "archetype `{}` generation {generation}: best {:.4}, mean {:.4}",
                archetype.name,
                best_fitness,
                stats.mean,
            );
            if (generation + 1) % PROGRESS_LOG_INTERVAL == 0 {
                log::info!(
                    "archetype `{}`: generation {}/{}, best fitness {best_fitness:.4}",
                    archetype.name,
                    generation + 1,
                    self.params.generations,
                );
            }

            if generation + 1 < self.params.generations {
                population = self.next_generation(&population, pool.len());
            }
        }

        let best_chromosome = best_chromosome.expect("at least one generation was evaluated");
        let fitness = if best_fitness.is_finite() {
            best_fitness
        } else {
            0.0
        };
        let team_members = best_chromosome
            .genes()
            .iter()
            .map(|&index| pool.record(index).clone())
            .collect();

        OptimizedTeam {
            archetype: archetype.clone(),
            fitness,
            team_indices: best_chromosome.genes().to_vec(),
            team_members,
            history,
        }
    }

    /// Builds the next generation: elites first, then offspring bred from
    /// the current generation until the population size is reached.
    ///
    /// When a single slot remains, only the first child of the final pair
    /// is kept.
    fn next_generation(&mut self, current: &Population, pool_size: usize) -> Population {
        // evaluate_fitness sorted the population best-first.
        let mut next = current.individuals()[..self.params.elitism_count()].to_vec();

        while next.len() < self.params.population_size {
            let parent1 = tournament_select(current.individuals(), &mut self.rng);
            let parent2 = tournament_select(current.individuals(), &mut self.rng);

            let (mut child1, mut child2) = chromosome::order_crossover(
                parent1.chromosome(),
                parent2.chromosome(),
                self.params.crossover_rate,
                &mut self.rng,
            );
            chromosome::mutate(&mut child1, pool_size, self.params.mutation_rate, &mut self.rng);
            chromosome::mutate(&mut child2, pool_size, self.params.mutation_rate, &mut self.rng);

            next.push(Individual::unevaluated(child1));
            if next.len() < self.params.population_size {
                next.push(Individual::unevaluated(child2));
            }
        }

        Population::from_individuals(next)
    }
}
