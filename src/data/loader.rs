use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use tempfile::NamedTempFile;

use super::model::{CompanyTable, Record};

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Load the company table from a delimited text file.
///
/// The first line is the header; every following line is one record.
/// Field counts may vary per row – integrity is judged on the status
/// column during filtering, not on row width here.
pub fn load_file(path: &Path) -> Result<CompanyTable> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let header: Vec<String> = reader
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        records.push(Record::new(record.iter().map(|f| f.to_string()).collect()));
    }

    log::debug!("loaded {} records from {}", records.len(), path.display());
    Ok(CompanyTable::new(header, records))
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Write the table to `path` without ever exposing a partial file.
///
/// Rows go to a temporary file in the destination directory first; the
/// temp file is renamed onto `path` only after a successful flush. On
/// any error the guard removes the temp file and `path` is untouched.
pub fn save_file(table: &CompanyTable, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temporary file in {}", dir.display()))?;

    let mut writer = WriterBuilder::new().flexible(true).from_writer(tmp.as_file());
    writer.write_record(&table.header).context("writing CSV header")?;
    for record in &table.records {
        writer.write_record(&record.fields).context("writing CSV record")?;
    }
    writer.flush().context("flushing CSV output")?;
    drop(writer);

    tmp.persist(path)
        .with_context(|| format!("renaming temporary file onto {}", path.display()))?;

    log::debug!("wrote {} records to {}", table.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SAMPLE: &str = "company_name,status_label,year,X1\n\
                          C_1,alive,1999,0.5\n\
                          C_2,failed,2001,-0.3\n\
                          C_3,alive,2004,1.2\n";

    #[test]
    fn loads_header_and_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.csv");
        fs::write(&path, SAMPLE).unwrap();

        let table = load_file(&path).unwrap();
        assert_eq!(
            table.header,
            vec!["company_name", "status_label", "year", "X1"]
        );
        assert_eq!(table.len(), 3);
        assert_eq!(table.records[1].fields[0], "C_2");
        assert_eq!(table.records[1].fields[1], "failed");
    }

    #[test]
    fn loads_ragged_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        fs::write(&path, "company_name,status_label,year\nC_1,alive\nC_2,failed,2001,extra\n")
            .unwrap();

        let table = load_file(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].fields.len(), 2);
        assert_eq!(table.records[1].fields.len(), 4);
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("nope.csv"));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.csv");
        fs::write(&input, SAMPLE).unwrap();

        let table = load_file(&input).unwrap();
        save_file(&table, &output).unwrap();

        let reloaded = load_file(&output).unwrap();
        assert_eq!(reloaded.header, table.header);
        assert_eq!(reloaded.records, table.records);
    }

    #[test]
    fn save_leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output.csv");
        let table = CompanyTable::new(
            vec!["company_name".into(), "status_label".into()],
            vec![Record::new(vec!["C_1".into(), "failed".into()])],
        );
        save_file(&table, &output).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["output.csv"]);
    }
}
