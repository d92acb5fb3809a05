//! Loads the cross reference table from a CSV file.
//!
//! The file is separated by semicolons and starts with a header:
//!
//! ```text
//! name;serviceGuidenId;nutsCode;deviceId
//! Askimsbadet;61e0a244cfc4d247cca95f4e;SE0A21480000000617;sk-elt-temp-02
//! ```

use beachsync_core::{entities::CrossReference, lookup::ReferenceTable};
use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

const MIN_COLUMNS: usize = 4;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to open file {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("Expected at least 4 columns in line {line}, but got {columns}")]
    Columns { line: u64, columns: usize },
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ReferenceTable, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let table = load(file)?;
    log::info!(
        "Loaded {} cross references from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

pub fn load<R: io::Read>(reader: R) -> Result<ReferenceTable, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = vec![];
    for record in reader.records() {
        let record = record?;
        if record.len() < MIN_COLUMNS {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(Error::Columns {
                line,
                columns: record.len(),
            });
        }
        rows.push(CrossReference {
            site_id: record[1].to_string(),
            nuts_code: record[2].to_string(),
            device_id: record[3].to_string(),
        });
    }
    Ok(ReferenceTable::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOOKUP_CSV: &str = "\
name;serviceGuidenId;nutsCode;deviceId
Askimsbadet;61e0a244cfc4d247cca95f4e;SE0A21480000000617;sk-elt-temp-02
Hovås;61e0a244cfc4d247cca95f50;;
";

    #[test]
    fn load_cross_references() {
        let table = load(LOOKUP_CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.nuts_code("61e0a244cfc4d247cca95f4e"),
            Some("SE0A21480000000617")
        );
        assert_eq!(
            table.device_id("61e0a244cfc4d247cca95f4e"),
            Some("sk-elt-temp-02")
        );
        assert_eq!(table.nuts_code("61e0a244cfc4d247cca95f50"), None);
        assert_eq!(table.nuts_code("name"), None);
    }

    #[test]
    fn reject_rows_with_missing_columns() {
        let csv = "name;id;nuts;device\nAskimsbadet;61e0a244cfc4d247cca95f4e\n";
        let err = load(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Columns { line: 2, columns: 2 }));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(dir.path().join("lookup.csv")).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
    }

    #[test]
    fn load_from_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lookup.csv");
        std::fs::write(&path, LOOKUP_CSV).unwrap();
        assert_eq!(load_from_file(&path).unwrap().len(), 2);
    }
}
