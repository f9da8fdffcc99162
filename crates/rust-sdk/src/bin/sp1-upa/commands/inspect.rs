//! Inspect command - decode a fixture's proof without writing anything

use crate::config::Config;
use crate::CommonArgs;
use anyhow::{Context, Result};
use clap::Args;
use console::style;
use sp1_upa_sdk::{load_fixture, Sp1ToUpaConverter};
use std::path::PathBuf;

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Path to the SP1 proof fixture
    #[arg(long, env = "SP1_FIXTURE_PATH")]
    pub fixture: Option<PathBuf>,
}

pub fn run(config: &Config) -> Result<()> {
    let fixture = load_fixture(&config.fixture_path)?;
    let converter = Sp1ToUpaConverter::new(config.converter.clone());
    let decoded = converter
        .decode_proof(&fixture)
        .context("Failed to decode proof")?;
    let proof = decoded.to_proof();

    if config.json_output {
        println!(
            "{}",
            serde_json::json!({
                "selector": format!("0x{}", decoded.selector_hex()),
                "vkey": fixture.vkey,
                "public_values_digest": fixture.public_values_digest,
                "proof": proof,
            })
        );
        return Ok(());
    }

    if config.quiet {
        return Ok(());
    }

    println!();
    println!("  Fixture: {:?}", config.fixture_path);
    if let (Some(a), Some(b), Some(n)) = (fixture.a, fixture.b, fixture.n) {
        println!("  Program inputs: n={} a={} b={}", n, a, b);
    }
    println!("  Program vkey: {}", fixture.vkey);
    println!("  Public values digest: {}", fixture.public_values_digest);
    println!(
        "  Verifier selector: {}",
        style(format!("0x{}", decoded.selector_hex())).cyan()
    );
    println!();
    println!("  A.x  {}", proof.pi_a.x.to_hex());
    println!("  A.y  {}", proof.pi_a.y.to_hex());
    println!("  B.x0 {}", proof.pi_b.x.c0.to_hex());
    println!("  B.x1 {}", proof.pi_b.x.c1.to_hex());
    println!("  B.y0 {}", proof.pi_b.y.c0.to_hex());
    println!("  B.y1 {}", proof.pi_b.y.c1.to_hex());
    println!("  C.x  {}", proof.pi_c.x.to_hex());
    println!("  C.y  {}", proof.pi_c.y.to_hex());

    Ok(())
}
