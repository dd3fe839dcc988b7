#![deny(unsafe_code)]
//! CLI binary for chainmat number chain puzzles.
//!
//! Subcommands:
//! - `generate`: build the 25-chain set for a seed and print tasks and
//!   solutions
//! - `list`: print the available chain variants

mod error;
mod render;

use chainmat_chains::{generate, ChainSetSnapshot, Variant};
use chainmat_core::PuzzleSeed;
use clap::{Parser, Subcommand};
use error::CliError;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chainmat", about = "Reproducible number chain puzzles")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the chain set for a seed.
    Generate {
        /// Seed; read leniently (leading digits, else 0). A fresh
        /// time-based seed is used when omitted.
        #[arg(long)]
        seed: Option<String>,

        /// Values per chain in the solution; the task shows one fewer.
        #[arg(short, long, default_value_t = PuzzleSeed::DEFAULT_LENGTH)]
        length: usize,
    },
    /// List available chain variants.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            if cli.json {
                let variants: Vec<_> = Variant::ALL
                    .iter()
                    .map(|v| serde_json::json!({"name": v.name(), "summary": v.summary()}))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&variants)?);
            } else {
                println!("Variants:");
                for v in Variant::ALL {
                    println!("  {:<10} {}", v.name(), v.summary());
                }
            }
        }
        Command::Generate { seed, length } => {
            let puzzle = match seed {
                Some(s) => PuzzleSeed::parse(&s),
                None => PuzzleSeed::from_clock(),
            }
            .with_length(length);
            puzzle.validate()?;
            tracing::info!(seed = puzzle.seed, length = puzzle.length, "generating chain set");

            let set = generate(puzzle.seed, Some(puzzle.length))?;
            let snapshot = ChainSetSnapshot::capture(&set, puzzle.length)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                println!("Seed: {}", snapshot.seed);
                println!();
                println!("Tasks:");
                for (i, chain) in snapshot.chains.iter().enumerate() {
                    println!("{}", render::task_line(i + 1, chain));
                }
                println!();
                println!("Solutions:");
                for (i, chain) in snapshot.chains.iter().enumerate() {
                    println!("{}", render::solution_line(i + 1, chain));
                }
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
