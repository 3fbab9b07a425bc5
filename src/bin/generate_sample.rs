//! Generates a synthetic `american_bankruptcy.csv` so the filter can be
//! exercised without the real dataset. Deterministic: same seed, same file.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const OUTPUT_PATH: &str = "american_bankruptcy.csv";
const COMPANY_COUNT: usize = 5_000;
/// Roughly the failed share documented for the real dataset.
const FAILED_SHARE: f64 = 0.07;
/// Financial indicator columns X1..X18, mirroring the real table layout.
const INDICATOR_COUNT: usize = 18;

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);

    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;

    let mut header = vec![
        "company_name".to_string(),
        "status_label".to_string(),
        "year".to_string(),
    ];
    header.extend((1..=INDICATOR_COUNT).map(|i| format!("X{i}")));
    writer.write_record(&header).context("writing header")?;

    let mut failed = 0usize;
    for id in 0..COMPANY_COUNT {
        let status = if rng.gen_bool(FAILED_SHARE) {
            failed += 1;
            "failed"
        } else {
            "alive"
        };
        let year: u32 = rng.gen_range(1999..=2018);

        let mut record = vec![format!("C_{id}"), status.to_string(), year.to_string()];
        record.extend((0..INDICATOR_COUNT).map(|_| format!("{:.4}", rng.gen_range(-5.0f64..5.0))));
        writer
            .write_record(&record)
            .with_context(|| format!("writing record {id}"))?;
    }
    writer.flush().context("flushing output")?;

    println!("Wrote {COMPANY_COUNT} records ({failed} failed) to {OUTPUT_PATH}");
    Ok(())
}
