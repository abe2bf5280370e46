mod report;
mod stress;
mod trace;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Stress {
        #[arg(long, default_value_t = 64)]
        trials: usize,
        #[arg(long, default_value_t = 100_000)]
        ops: usize,
        #[arg(long, default_value_t = 2)]
        capacity: usize,
        #[arg(long, default_value_t = 0xC0FFEE)]
        seed: u64,
    },
    Trace {
        #[arg(long, default_value_t = 5)]
        pushes: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Stress {
            trials,
            ops,
            capacity,
            seed,
        } => {
            stress::run_stress(trials, ops, capacity, seed)?;
        }
        Commands::Trace { pushes } => {
            trace::run_trace(pushes)?;
        }
    }
    Ok(())
}
