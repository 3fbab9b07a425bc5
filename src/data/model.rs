use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Label – the status column
// ---------------------------------------------------------------------------

/// Index of the status column within a record.
pub const LABEL_FIELD: usize = 1;

/// Company status, parsed from the `status_label` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Still operating at the end of the observation window.
    Alive,
    /// Filed for bankruptcy.
    Failed,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Alive => "alive",
            Label::Failed => "failed",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fatal data-integrity violation found while scanning the table.
///
/// Either variant aborts the whole run; no output is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("unrecognized status label `{label}` (expected `alive` or `failed`)")]
    UnrecognizedLabel { label: String },
    #[error("record has no status column")]
    MissingLabel,
}

// ---------------------------------------------------------------------------
// Record – one row of the table
// ---------------------------------------------------------------------------

/// A single data row. Field content is never mutated; rows are only
/// reordered and selectively dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Record { fields }
    }

    /// Parse the status column. The single place the label is interpreted;
    /// filtering and statistics both go through here.
    pub fn label(&self) -> Result<Label, IntegrityError> {
        let value = self
            .fields
            .get(LABEL_FIELD)
            .ok_or(IntegrityError::MissingLabel)?;
        match value.as_str() {
            "alive" => Ok(Label::Alive),
            "failed" => Ok(Label::Failed),
            other => Err(IntegrityError::UnrecognizedLabel {
                label: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// CompanyTable – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table: header fields plus data rows, in file order
/// until shuffled.
#[derive(Debug, Clone, Default)]
pub struct CompanyTable {
    pub header: Vec<String>,
    pub records: Vec<Record>,
}

impl CompanyTable {
    pub fn new(header: Vec<String>, records: Vec<Record>) -> Self {
        CompanyTable { header, records }
    }

    /// Number of data rows (the header does not count).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has any data rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed per-label totals. Fails on the first integrity violation,
    /// just like the filter scan.
    pub fn class_counts(&self) -> Result<ClassCounts, IntegrityError> {
        let mut counts = ClassCounts::default();
        for record in &self.records {
            match record.label()? {
                Label::Alive => counts.alive += 1,
                Label::Failed => counts.failed += 1,
            }
        }
        Ok(counts)
    }
}

/// Observed class totals over a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    pub alive: usize,
    pub failed: usize,
}

impl ClassCounts {
    pub fn total(&self) -> usize {
        self.alive + self.failed
    }
}
