use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::contact_record::ContactRecord;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no contact records to write")]
    NoRecords,
    #[error("could not write report {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Writes the report csv, one row per non-empty record, replacing any earlier
/// report at `path`.
///
/// The header is always the full record schema. Empty records are left out,
/// and a report with nothing to write is an error, leaving `path` untouched.
pub fn write_report<P: AsRef<Path>>(
    path: P,
    records: &[ContactRecord],
) -> Result<usize, ReportError> {
    let path = path.as_ref();
    let rows: Vec<&ContactRecord> = records.iter().filter(|r| !r.is_empty()).collect();

    if rows.is_empty() {
        return Err(ReportError::NoRecords);
    }

    let write_err = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut wtr = csv::Writer::from_path(path).map_err(write_err)?;
    for row in rows.iter() {
        wtr.serialize(row).map_err(write_err)?;
    }
    wtr.flush()
        .map_err(|e| write_err(csv::Error::from(e)))?;

    log::info!(
        "Wrote {} records to {:?}, skipped {} empty",
        rows.len(),
        path,
        records.len() - rows.len()
    );
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use crate::domain::contact_record::ContactRecord;

    use super::{write_report, ReportError};

    fn record(name: &str, website: Option<&str>) -> ContactRecord {
        ContactRecord {
            company_name: Some(name.to_string()),
            website: website.map(|w| w.to_string()),
            ..ContactRecord::default()
        }
    }

    #[test]
    fn write_report_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let records = vec![
            record("Acme Solar", Some("https://acme.com")),
            record("Sun, Wind & Co", None),
            record("Helios", Some("helios.de")),
        ];

        let written = write_report(&path, &records).unwrap();
        assert_eq!(written, 3);

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
        let first_fields: Vec<&str> = records[0].fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(headers, first_fields);

        let read_back: Vec<ContactRecord> = rdr.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(read_back, records);
    }

    #[test]
    fn write_report_skips_empty_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let records = vec![
            ContactRecord::empty(),
            record("Acme Solar", None),
            ContactRecord::empty(),
        ];

        assert_eq!(write_report(&path, &records).unwrap(), 1);

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        assert_eq!(rdr.headers().unwrap().len(), ContactRecord::FIELD_NAMES.len());
        assert_eq!(rdr.records().count(), 1);
    }

    #[test]
    fn write_report_no_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        assert!(matches!(write_report(&path, &[]), Err(ReportError::NoRecords)));
        assert!(matches!(
            write_report(&path, &[ContactRecord::empty()]),
            Err(ReportError::NoRecords)
        ));
        assert!(!path.exists());
    }
}
