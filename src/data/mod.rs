//! Simulation data files
//!
//! The solver writes plain-text tables: one sample point per line,
//! whitespace-separated floating-point fields. The first field is the
//! position, the remaining fields are the dependent series.
//!
//! # Organization
//!
//! - **dataset**: Column-major container (`Dataset`)
//! - **loader**: Text parsing (`parse_dataset`, `load_dataset`)
//!
//! # Example
//!
//! ```rust
//! use spinplot::data::parse_dataset;
//!
//! let dataset = parse_dataset("0.0 1.0 2.0\n0.5 1.5 2.5\n").unwrap();
//! assert_eq!(dataset.samples(), 2);
//! assert_eq!(dataset.series_count(), 2);
//! assert_eq!(dataset.position(), &[0.0, 0.5]);
//! ```

pub mod dataset;
pub mod loader;

pub use dataset::Dataset;
pub use loader::{load_dataset, parse_dataset};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a data file
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: '{field}' is not a number")]
    InvalidNumber { line: usize, field: String },

    #[error("line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("no data rows")]
    Empty,
}
