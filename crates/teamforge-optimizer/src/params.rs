//! Genetic algorithm run parameters.

use crate::error::InvalidParameterError;

/// Parameters controlling one evolution run.
///
/// Defaults match the reference pipeline's production configuration. All
/// fields are validated together by [`GaParams::validate`] before a run
/// starts; rates outside `[0.0, 1.0]` are rejected rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaParams {
    /// Number of candidates per team. Must be in `(0, pool_size]`.
    pub team_size: usize,
    /// Number of chromosomes per generation.
    pub population_size: usize,
    /// Number of generations to evolve. The sole termination condition.
    pub generations: usize,
    /// Per-gene probability of mutation, in `[0, 1]`.
    pub mutation_rate: f64,
    /// Probability that a parent pair undergoes crossover, in `[0, 1]`.
    pub crossover_rate: f64,
    /// Fraction of the population carried over unchanged, in `[0, 1]`.
    /// The elite count is `floor(population_size * elitism_rate)`.
    pub elitism_rate: f64,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            team_size: 5,
            population_size: 975,
            generations: 50,
            mutation_rate: 0.1,
            crossover_rate: 0.8,
            elitism_rate: 0.1,
        }
    }
}

impl GaParams {
    /// Checks every parameter against `pool_size` candidates.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidParameterError`] found. NaN rates fail the
    /// range check and are rejected like any other out-of-range value.
    pub fn validate(&self, pool_size: usize) -> Result<(), InvalidParameterError> {
        if self.team_size == 0 {
            return Err(InvalidParameterError::ZeroTeamSize);
        }
        if self.team_size > pool_size {
            return Err(InvalidParameterError::TeamSizeExceedsPool {
                team_size: self.team_size,
                pool_size,
            });
        }
        if self.population_size == 0 {
            return Err(InvalidParameterError::ZeroPopulationSize);
        }
        if self.generations == 0 {
            return Err(InvalidParameterError::ZeroGenerations);
        }
        for (name, value) in [
            ("mutation rate", self.mutation_rate),
            ("crossover rate", self.crossover_rate),
            ("elitism rate", self.elitism_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(InvalidParameterError::RateOutOfRange { rate: name, value });
            }
        }
        Ok(())
    }

    /// Number of individuals copied verbatim into each next generation.
    #[must_use]
    pub fn elitism_count(&self) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let count = (self.population_size as f64 * self.elitism_rate).floor() as usize;
        count.min(self.population_size)
    }
}
