mod data;

use std::path::Path;

use anyhow::Result;
use rand::Rng;

use data::filter::{rebalance, RebalanceConfig};
use data::loader;

/// Input table; first line is the header, the status label sits in the
/// second column.
const INPUT_PATH: &str = "american_bankruptcy.csv";
/// Destination for the filtered table.
const OUTPUT_PATH: &str = "american_bankruptcy_filtered.csv";

fn main() -> Result<()> {
    env_logger::init();

    run(
        Path::new(INPUT_PATH),
        Path::new(OUTPUT_PATH),
        &RebalanceConfig::default(),
        &mut rand::thread_rng(),
    )
}

/// The whole pipeline: load, report the estimated split, downsample,
/// report the surviving count, write atomically. An integrity error
/// aborts before the output path is touched.
fn run(
    input: &Path,
    output: &Path,
    config: &RebalanceConfig,
    rng: &mut impl Rng,
) -> Result<()> {
    let table = loader::load_file(input)?;

    let estimate = config.estimate(table.len());
    println!("Total: {}", estimate.total);
    println!("Dead: {}", estimate.estimated_failed);
    println!("Alive: {}", estimate.estimated_alive);

    let filtered = rebalance(table, config, rng)?;
    println!("New: {}", filtered.len());

    // Cannot fail once rebalance has validated every label.
    let counts = filtered.class_counts()?;
    log::info!(
        "final split: {} alive, {} failed",
        counts.alive,
        counts.failed
    );

    loader::save_file(&filtered, output)?;
    Ok(())
}
