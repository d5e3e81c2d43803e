mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::{BestMoveArgs, DuelArgs, run_best_move, run_duel};
use tictactoe_common::log_debug;
use tictactoe_common::logger::{self, Verbosity};

#[derive(Parser)]
#[command(name = "tictactoe_arena", version, about = "Query and pit tic-tac-toe engine tiers against each other")]
struct Args {
    /// YAML config; defaults are used when the file does not exist
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every engine decision
    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, global = true)]
    use_log_prefix: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the move a tier picks for a position
    BestMove(BestMoveArgs),
    /// Play rounds between two tiers and print the score
    Duel(DuelArgs),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Arena".to_string())
    } else {
        None
    };
    let verbosity = if args.verbose { Verbosity::Debug } else { Verbosity::Info };
    logger::init_logger(prefix, verbosity);

    let config = config::get_config_manager(args.config.as_deref()).get_config()?;
    log_debug!("Loaded config: {:?}", config);

    match args.command {
        Command::BestMove(best_move_args) => {
            run_best_move(&best_move_args, &config);
        }
        Command::Duel(duel_args) => {
            let report = run_duel(&duel_args, &config)?;
            println!("{}", report);
        }
    }

    Ok(())
}
