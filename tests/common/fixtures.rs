//! Solver-like data files for integration tests
//!
//! Files are written the way the solver writes them: space-separated
//! fields with a trailing space on every line.

use std::fs;
use std::path::{Path, PathBuf};

/// Grid spacing used by the fixtures [m]
pub const DX: f64 = 1e-9;

/// Write `name` in `dir` with `points` rows of position plus `series` values
///
/// Series `j` (1-based) at row `i` is `j * sin(i / points) - 0.1`, so every
/// series dips below zero at the first row and peaks at the last.
pub fn write_table(dir: &Path, name: &str, points: usize, series: usize) -> PathBuf {
    write_table_at(dir, name, points, series, 0.0)
}

/// Same as [`write_table`] with positions starting at `x0` instead of 0
pub fn write_table_at(dir: &Path, name: &str, points: usize, series: usize, x0: f64) -> PathBuf {
    let mut text = String::new();
    for i in 0..points {
        text.push_str(&format!("{} ", x0 + i as f64 * DX));
        for j in 1..=series {
            text.push_str(&format!("{} ", series_value(i, j, points)));
        }
        text.push('\n');
    }

    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

/// Value of series `j` at row `i`, as written by [`write_table`]
pub fn series_value(i: usize, j: usize, points: usize) -> f64 {
    j as f64 * (i as f64 / points as f64).sin() - 0.1
}

/// `system.dat` with the seven material parameter profiles
pub fn write_system(dir: &Path, points: usize) -> PathBuf {
    write_table(dir, "system.dat", points, 7)
}

/// A snapshot file with spin current and spin accumulation columns
pub fn write_snapshot(dir: &Path, name: &str, points: usize) -> PathBuf {
    write_table(dir, name, points, 6)
}

/// Sorted file names in `dir` with the given extension
pub fn files_with_extension(dir: &Path, extension: &str) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(extension))
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_table_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(dir.path(), "1.dat", 4, 6);

        let text = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.split_whitespace().count() == 7));
        assert!(lines[0].ends_with(' '));
    }
}
