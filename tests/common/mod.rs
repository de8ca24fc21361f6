//! Common utilities for integration tests

#![allow(dead_code)]

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{
    files_with_extension,
    series_value,
    write_snapshot,
    write_system,
    write_table,
    write_table_at,
    DX,
};
