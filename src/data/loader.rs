//! Text loader for solver output tables
//!
//! Accepted format, one sample point per line:
//!
//! ```text
//! 0 0.5 0.2 0.1 ...
//! 1e-09 0.5 0.2 0.1 ...
//! ```
//!
//! Fields are separated by any whitespace and trailing whitespace is
//! allowed (the solver terminates every field with a space). Blank lines
//! are skipped and `#` starts a comment running to the end of the line.

use std::fs;
use std::path::Path;

use super::{DataError, Dataset};

/// Read and parse a data file
///
/// # Errors
///
/// `DataError::Io` if the file cannot be read, otherwise any error from
/// [`parse_dataset`].
pub fn load_dataset(path: &Path) -> Result<Dataset, DataError> {
    let text = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = parse_dataset(&text)?;
    log::debug!(
        "loaded {}: {} samples, {} series",
        path.display(),
        dataset.samples(),
        dataset.series_count()
    );
    Ok(dataset)
}

/// Parse whitespace-delimited rows into a column-major dataset
///
/// Line numbers in errors are 1-based and count every line of `text`,
/// including skipped ones.
pub fn parse_dataset(text: &str) -> Result<Dataset, DataError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut width = None;

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let content = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };

        let row = content
            .split_whitespace()
            .map(|field| {
                field.parse::<f64>().map_err(|_| DataError::InvalidNumber {
                    line,
                    field: field.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, DataError>>()?;

        if row.is_empty() {
            continue;
        }

        let expected = *width.get_or_insert(row.len());
        if row.len() != expected {
            return Err(DataError::RaggedRow {
                line,
                expected,
                found: row.len(),
            });
        }

        rows.push(row);
    }

    Dataset::from_rows(&rows)
}
