//! Vk command - write the UPA verifying key for the built-in SP1 key

use crate::config::Config;
use crate::CommonArgs;
use anyhow::Result;
use clap::Args;
use console::style;
use sp1_upa_core::constants::SP1_VERIFIER_VERSION;
use sp1_upa_sdk::Sp1ToUpaConverter;

#[derive(Args)]
pub struct VkArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn run(config: &Config) -> Result<()> {
    let converter = Sp1ToUpaConverter::new(config.converter.clone());
    let path = converter.write_verifying_key()?;

    if config.json_output {
        println!(
            "{}",
            serde_json::json!({
                "vk": path,
                "sp1_verifier": SP1_VERIFIER_VERSION,
            })
        );
    } else if !config.quiet {
        println!(
            "{} UPA verifying key for SP1 verifier {} written",
            style("✓").green().bold(),
            SP1_VERIFIER_VERSION
        );
        println!("  Path: {}", style(path.display()).cyan());
    }

    Ok(())
}
