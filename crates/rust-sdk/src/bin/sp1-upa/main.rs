//! sp1-upa CLI - Convert SP1 Groth16 proofs for UPA
//!
//! This CLI provides commands for turning SP1 proof fixtures into UPA
//! submissions, writing the UPA verifying key, and inspecting encoded proofs.

mod commands;
mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use commands::{convert, inspect, vk};
use console::style;
use std::path::PathBuf;

/// CLI for converting SP1 Groth16 proofs into UPA submissions
#[derive(Parser)]
#[command(name = "sp1-upa")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Common options shared across commands
#[derive(Args, Clone)]
pub struct CommonArgs {
    /// Directory the UPA files are written to
    #[arg(long, env = "UPA_OUTPUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// Reject proofs not produced for this verifier selector (4 bytes, hex)
    #[arg(long, env = "SP1_VERIFIER_SELECTOR")]
    pub expect_selector: Option<String>,

    /// Output format (human, json)
    #[arg(long, default_value = "human")]
    pub output: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an SP1 proof fixture into UPA verifying key and proof files
    Convert(convert::ConvertArgs),

    /// Decode the proof of an SP1 fixture and print its points
    Inspect(inspect::InspectArgs),

    /// Write the UPA verifying key for the built-in SP1 verifier key
    Vk(vk::VkArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert(args) => config::Config::load(&args.common, args.fixture.as_ref())
            .and_then(|config| convert::run(&config)),
        Commands::Inspect(args) => config::Config::load(&args.common, args.fixture.as_ref())
            .and_then(|config| inspect::run(&config)),
        Commands::Vk(args) => {
            config::Config::load(&args.common, None).and_then(|config| vk::run(&config))
        }
    };

    // Handle errors nicely
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
