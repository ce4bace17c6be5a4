use clap::{Parser, Subcommand};

use self::optimize::OptimizeArg;

mod optimize;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Optimize team composition for each archetype
    Optimize(#[clap(flatten)] OptimizeArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Optimize(arg) => optimize::run(&arg)?,
    }
    Ok(())
}
