use crate::error::CheckError;
use csv::ReaderBuilder;
use std::{
    fs::File,
    io::BufReader,
    path::Path,
};

#[derive(Debug)]
pub struct Table {
    /// Column names, from the first line of the CSV file.
    pub headers: Vec<String>,
    /// Each data row, as a Vec of Strings (one per field), in file order.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Position of `name` in the header, exact case-sensitive match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Load a CSV file into memory. The first record is the header; every row
/// must have the same field count as the header, otherwise the file is
/// rejected as invalid. All cell values stay as strings.
pub fn load_csv(path: &Path) -> Result<Table, CheckError> {
    let file = File::open(path).map_err(|source| CheckError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|source| CheckError::Parse {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|source| CheckError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    Ok(Table { headers, rows })
}
