//! Genetic-algorithm team composition optimizer.
//!
//! Given a pool of scored candidates and a set of named weighting profiles
//! ("archetypes"), this crate searches for the fixed-size team that best
//! satisfies each archetype's weighted objective. Exhaustive search over
//! `C(N, k)` subsets is infeasible for realistic pools, so each archetype
//! gets one independent genetic-algorithm run.
//!
//! # Algorithm Overview
//!
//! One run follows this cycle for a fixed number of generations:
//!
//! 1. **Evaluate Fitness** - Score every chromosome (candidate team) against
//!    the archetype's weightings
//! 2. **Track Best** - Remember the single best team ever observed, across
//!    all generations (independent of elitism)
//! 3. **Elite Selection** - Copy the top performers unchanged into the next
//!    generation
//! 4. **Tournament Selection** - Pick parent pairs from the current
//!    generation
//! 5. **Order Crossover (OX)** - Transplant a gene segment from one parent
//!    and fill the rest from the other, preserving distinctness
//! 6. **Mutation** - Swap individual genes for candidates currently outside
//!    the team
//!
//! There is no convergence or plateau detection: the generation count is the
//! sole termination condition. That is a deliberate simplicity/performance
//! tradeoff inherited from the reference pipeline.
//!
//! # Key Components
//!
//! - [`Chromosome`](chromosome::Chromosome) - a team as `team_size` distinct
//!   pool indices, plus the crossover/mutation operators
//! - [`FitnessEvaluator`](fitness::FitnessEvaluator) - pure scoring of one
//!   team under one archetype
//! - [`Population`](genetic::Population) - one generation's individuals and
//!   their fitness values
//! - [`EvolutionEngine`](engine::EvolutionEngine) - the generation loop for
//!   a single archetype
//! - [`TeamOptimizer`](orchestrator::TeamOptimizer) - runs every archetype
//!   and aggregates results by name
//!
//! # Randomness
//!
//! All stochastic steps draw from a caller-supplied [`rand::Rng`]; the
//! orchestrator derives one seeded [`rand_pcg::Pcg64`] per archetype from a
//! base seed. A fixed seed reproduces a run bit for bit, which is what the
//! determinism tests rely on.
//!
//! # Numeric robustness
//!
//! Candidate scores are sanitized before they reach this crate
//! ([`teamforge_model::CandidatePool`]), and every place a NaN or infinity
//! could still appear (degenerate variances, extreme weightings) clamps to a
//! safe default instead of erroring. A malformed candidate or an
//! all-identical team must never abort an evolution run.
//!
//! # Example
//!
//! ```
//! use rand_pcg::Pcg64;
//! use teamforge_model::{Archetype, CandidatePool, CandidateRecord, Weightings};
//! use teamforge_optimizer::{GaParams, TeamOptimizer};
//!
//! # fn record(overall: f64) -> CandidateRecord {
//! #     CandidateRecord {
//! #         name: None,
//! #         technical_score: 0.0,
//! #         education_score: 0.0,
//! #         soft_skills_score: 0.0,
//! #         normalized_overall_score: overall,
//! #     }
//! # }
//! let pool = CandidatePool::from_records(
//!     (0..10).map(|i| record(f64::from(i) / 10.0)).collect(),
//! )?;
//! let archetypes = vec![Archetype {
//!     name: "Core".into(),
//!     description: "Individual strength first.".into(),
//!     weightings: Weightings {
//!         individual_quality: 1.0,
//!         team_synergy: 0.0,
//!         team_diversity: 0.0,
//!     },
//! }];
//!
//! let params = GaParams {
//!     team_size: 3,
//!     population_size: 40,
//!     generations: 20,
//!     ..GaParams::default()
//! };
//! let optimizer = TeamOptimizer::new(&pool, &archetypes, params);
//! let results = optimizer.optimize(42)?;
//! assert!(results.contains_key("Core"));
//! # Ok::<(), teamforge_optimizer::OptimizerError>(())
//! ```

pub mod chromosome;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod genetic;
pub mod orchestrator;
pub mod params;
pub mod result;

pub use self::{
    engine::EvolutionEngine,
    error::{InvalidParameterError, OptimizerError},
    fitness::FitnessEvaluator,
    orchestrator::TeamOptimizer,
    params::GaParams,
    result::{GenerationSummary, OptimizedTeam},
};
