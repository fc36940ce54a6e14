// file: src/exporter/csv.rs
// description: csv export of accumulated company records
// reference: https://docs.rs/csv

use crate::error::Result;
use crate::models::CompanyRecord;
use std::path::PathBuf;
use tracing::info;

const HEADER: [&str; 2] = ["Company Name", "Record ID"];

#[derive(Debug, Clone)]
pub struct CsvExporter {
    destination: PathBuf,
}

impl CsvExporter {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    pub fn destination(&self) -> &PathBuf {
        &self.destination
    }

    /// Writes the header row plus one row per record, in sequence order.
    /// An existing file is overwritten; an empty sequence still produces
    /// the header. Fails only if the destination cannot be opened or
    /// written.
    pub fn write_records(&self, records: &[CompanyRecord]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.destination)?;

        writer.write_record(HEADER)?;
        for record in records {
            writer.write_record([record.name.as_str(), record.record_id.as_str()])?;
        }
        writer.flush()?;

        info!("Data saved to {}", self.destination.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_records_exact_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let exporter = CsvExporter::new(&path);

        let records = vec![CompanyRecord::new("A", "1"), CompanyRecord::new("B", "2")];
        exporter.write_records(&records).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Company Name,Record ID\nA,1\nB,2\n");
    }

    #[test]
    fn test_empty_input_writes_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let exporter = CsvExporter::new(&path);

        exporter.write_records(&[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Company Name,Record ID\n");
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale contents\n").unwrap();

        let exporter = CsvExporter::new(&path);
        exporter
            .write_records(&[CompanyRecord::new("A", "1")])
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Company Name,Record ID\nA,1\n");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let exporter = CsvExporter::new(&path);

        exporter
            .write_records(&[CompanyRecord::new("Acme, Inc.", "9")])
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Company Name,Record ID\n\"Acme, Inc.\",9\n");
    }

    #[test]
    fn test_unopenable_destination_errors() {
        let exporter = CsvExporter::new("/nonexistent-dir/out.csv");
        assert!(exporter.write_records(&[]).is_err());
    }
}
