use log::info;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::model::{CompanyTable, IntegrityError, Label};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tuning knobs for the downsampling pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RebalanceConfig {
    /// Share of the table assumed to be `failed`, in percent. Only feeds
    /// the reported estimate, never the filter itself.
    pub percent_dead: f64,
    /// Alive-row cut threshold: alive rows are kept from the `cut`-th one
    /// seen (in shuffled order) onward, so up to `cut - 1` of them are
    /// dropped. `cut == 0` drops nothing.
    pub cut: usize,
}

impl Default for RebalanceConfig {
    fn default() -> Self {
        Self {
            percent_dead: 7.0,
            cut: 64_000,
        }
    }
}

/// The three observational counts reported before filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitEstimate {
    pub total: usize,
    pub estimated_failed: usize,
    pub estimated_alive: usize,
}

impl RebalanceConfig {
    /// Estimate the class split from the row total alone. Floor on the
    /// failed share, remainder alive. Not exact.
    pub fn estimate(&self, total: usize) -> SplitEstimate {
        let estimated_failed = (total as f64 * self.percent_dead / 100.0) as usize;
        SplitEstimate {
            total,
            estimated_failed,
            estimated_alive: total.saturating_sub(estimated_failed),
        }
    }
}

// ---------------------------------------------------------------------------
// The rebalancing pass
// ---------------------------------------------------------------------------

/// Shuffle the table, then drop the leading alive rows.
///
/// Every `failed` row survives. `alive` rows are counted in shuffled
/// order and kept from the `config.cut`-th one onward. Any other status
/// value aborts the whole pass with an [`IntegrityError`] – the caller
/// must not write anything in that case.
///
/// The RNG is a parameter so tests can seed it; the binary passes
/// `rand::thread_rng()`.
pub fn rebalance(
    table: CompanyTable,
    config: &RebalanceConfig,
    rng: &mut impl Rng,
) -> Result<CompanyTable, IntegrityError> {
    let CompanyTable {
        header,
        mut records,
    } = table;

    records.shuffle(rng);

    let total = records.len();
    let mut cut = 0usize;
    let mut kept = Vec::with_capacity(total);

    for record in records {
        match record.label()? {
            Label::Alive => {
                cut += 1;
                if cut >= config.cut {
                    kept.push(record);
                }
            }
            Label::Failed => kept.push(record),
        }
    }

    info!(
        "rebalance: kept {} of {} rows ({} alive dropped)",
        kept.len(),
        total,
        total - kept.len()
    );

    Ok(CompanyTable::new(header, kept))
}
