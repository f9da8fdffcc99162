//! Convert command - turn an SP1 fixture into UPA files

use crate::config::Config;
use crate::CommonArgs;
use anyhow::Result;
use clap::Args;
use console::style;
use sp1_upa_sdk::Sp1ToUpaConverter;
use std::path::PathBuf;

#[derive(Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Path to the SP1 proof fixture
    #[arg(long, env = "SP1_FIXTURE_PATH")]
    pub fixture: Option<PathBuf>,
}

pub fn run(config: &Config) -> Result<()> {
    if !config.quiet && !config.json_output {
        println!(
            "{} Converting {:?}...",
            style("→").cyan().bold(),
            config.fixture_path
        );
    }

    let converter = Sp1ToUpaConverter::new(config.converter.clone());
    let result = converter.convert_file(&config.fixture_path)?;

    if config.json_output {
        println!(
            "{}",
            serde_json::json!({
                "vk": result.vk_path,
                "bundle": result.bundle_path,
                "selector": format!("0x{}", result.selector),
                "public_inputs": result.num_public_inputs,
            })
        );
    } else if !config.quiet {
        println!("{} Conversion complete!", style("✓").green().bold());
        println!("  Verifier selector: 0x{}", result.selector);
        println!("  Public inputs: {}", result.num_public_inputs);
        println!("  Verifying key: {}", style(result.vk_path.display()).cyan());
        println!(
            "  Proof bundle:  {}",
            style(result.bundle_path.display()).cyan()
        );
    }

    Ok(())
}
