use std::path::PathBuf;

use teamforge_model::CandidatePool;
use teamforge_optimizer::{GaParams, TeamOptimizer};

use crate::data::{self, OutputFormat};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct OptimizeArg {
    /// Scored candidates file (`.csv` or `.json`)
    #[arg(long)]
    candidates: PathBuf,
    /// Team archetypes JSON file
    #[arg(long)]
    archetypes: PathBuf,
    /// Number of candidates per team
    #[arg(long, default_value_t = GaParams::default().team_size)]
    team_size: usize,
    /// Number of chromosomes per generation
    #[arg(long, default_value_t = GaParams::default().population_size)]
    population_size: usize,
    /// Number of generations to evolve
    #[arg(long, default_value_t = GaParams::default().generations)]
    generations: usize,
    /// Per-gene mutation probability, in [0, 1]
    #[arg(long, default_value_t = GaParams::default().mutation_rate)]
    mutation_rate: f64,
    /// Crossover probability per parent pair, in [0, 1]
    #[arg(long, default_value_t = GaParams::default().crossover_rate)]
    crossover_rate: f64,
    /// Fraction of the population carried over unchanged, in [0, 1]
    #[arg(long, default_value_t = GaParams::default().elitism_rate)]
    elitism_rate: f64,
    /// Seed for the random source; drawn randomly when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Directory to write the summary and per-archetype result files
    #[arg(long)]
    output: Option<PathBuf>,
    /// Which per-archetype files to write (json, csv, or all)
    #[arg(long, default_value = "all")]
    format: OutputFormat,
}

pub(crate) fn run(arg: &OptimizeArg) -> anyhow::Result<()> {
    let records = data::load_candidates(&arg.candidates)?;
    let pool = CandidatePool::from_records(records)?;
    let archetypes = data::load_archetypes(&arg.archetypes)?;

    let params = GaParams {
        team_size: arg.team_size,
        population_size: arg.population_size,
        generations: arg.generations,
        mutation_rate: arg.mutation_rate,
        crossover_rate: arg.crossover_rate,
        elitism_rate: arg.elitism_rate,
    };
    let seed = arg.seed.unwrap_or_else(rand::random);
    log::info!(
        "optimizing {} archetypes over {} candidates (seed {seed})",
        archetypes.len(),
        pool.len(),
    );

    let optimizer = TeamOptimizer::new(&pool, &archetypes, params);
    let results = optimizer.optimize(seed)?;

    for (name, team) in &results {
        println!("Archetype: {name}");
        println!("  Fitness: {:.4}", team.fitness);
        println!("  Team indices: {:?}", team.team_indices);
        for member in &team.team_members {
            println!(
                "    {} (overall {:.3})",
                member.name.as_deref().unwrap_or("<unnamed>"),
                member.normalized_overall_score,
            );
        }
    }

    if let Some(output_dir) = &arg.output {
        data::save_results(output_dir, &results, seed, arg.format)?;
        println!("Results saved to {}", output_dir.display());
    }
    Ok(())
}
