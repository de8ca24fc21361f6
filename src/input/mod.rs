//! Input resolution
//!
//! Locates the files a solver run leaves in its output directory:
//!
//! - `system.dat`: material parameter profiles (exactly one)
//! - `<digits>….dat`: one snapshot per output time step, e.g. `0.dat`,
//!   `100.dat`
//!
//! Discovery is non-recursive. Snapshots are returned in numeric order of
//! their leading digits so that runs are reproducible regardless of the
//! filesystem's listing order.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Name of the system parameter file
pub const SYSTEM_FILE: &str = "system.dat";

/// Extension shared by all solver data files
pub const DATA_EXTENSION: &str = "dat";

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("system file not found: {}", path.display())]
    MissingSystemFile { path: PathBuf },

    #[error("cannot list {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Path of the system file inside `dir`
///
/// # Errors
///
/// `MissingSystemFile` if `dir/system.dat` is not an existing regular file.
pub fn system_file(dir: &Path) -> Result<PathBuf, ResolveError> {
    let path = dir.join(SYSTEM_FILE);
    if path.is_file() {
        Ok(path)
    } else {
        Err(ResolveError::MissingSystemFile { path })
    }
}

/// Snapshot files directly under `dir`, sorted by step number
///
/// Ties on the step number (`5.dat`, `5b.dat`, `05.dat`) are broken by
/// file name.
pub fn snapshot_files(dir: &Path) -> Result<Vec<PathBuf>, ResolveError> {
    let read_dir_error = |source| ResolveError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut snapshots: Vec<(u64, String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if !is_snapshot_name(&name) || !entry.path().is_file() {
            continue;
        }

        let step = snapshot_index(&name).unwrap_or(u64::MAX);
        snapshots.push((step, name, entry.path()));
    }

    snapshots.sort_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)));
    Ok(snapshots.into_iter().map(|(_, _, path)| path).collect())
}

/// Whether `name` looks like a snapshot: a leading digit, ending in `.dat`
pub fn is_snapshot_name(name: &str) -> bool {
    let starts_with_digit = name.chars().next().is_some_and(|c| c.is_ascii_digit());
    let suffix = format!(".{}", DATA_EXTENSION);

    starts_with_digit && name.len() > suffix.len() && name.ends_with(&suffix)
}

/// Step number encoded by the leading digits of a snapshot name
///
/// `None` if there are no leading digits or they overflow `u64`.
pub fn snapshot_index(name: &str) -> Option<u64> {
    let digits: &str = match name.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &name[..end],
        None => name,
    };
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_is_snapshot_name() {
        assert!(is_snapshot_name("0.dat"));
        assert!(is_snapshot_name("100.dat"));
        assert!(is_snapshot_name("5_run.dat"));

        assert!(!is_snapshot_name("system.dat"));
        assert!(!is_snapshot_name("x5.dat"));
        assert!(!is_snapshot_name("5.png"));
        assert!(!is_snapshot_name("5.dat.bak"));
        assert!(!is_snapshot_name(".dat"));
        assert!(!is_snapshot_name("5dat"));
        assert!(!is_snapshot_name(""));
    }

    #[test]
    fn test_snapshot_index() {
        assert_eq!(snapshot_index("0.dat"), Some(0));
        assert_eq!(snapshot_index("1500.dat"), Some(1500));
        assert_eq!(snapshot_index("42_b.dat"), Some(42));
        assert_eq!(snapshot_index("system.dat"), None);
    }

    #[test]
    fn test_snapshot_files_numeric_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["100.dat", "5.dat", "0.dat", "20.dat", "system.dat", "5.png", "notes.txt"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let names: Vec<String> = snapshot_files(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["0.dat", "5.dat", "20.dat", "100.dat"]);
    }

    #[test]
    fn test_snapshot_files_is_not_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("7.dat")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        File::create(dir.path().join("nested").join("3.dat")).unwrap();
        File::create(dir.path().join("1.dat")).unwrap();

        let snapshots = snapshot_files(dir.path()).unwrap();
        assert_eq!(snapshots, vec![dir.path().join("1.dat")]);
    }

    #[test]
    fn test_snapshot_files_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(matches!(
            snapshot_files(&missing),
            Err(ResolveError::ReadDir { .. })
        ));
    }

    #[test]
    fn test_system_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            system_file(dir.path()),
            Err(ResolveError::MissingSystemFile { .. })
        ));

        File::create(dir.path().join(SYSTEM_FILE)).unwrap();
        assert_eq!(system_file(dir.path()).unwrap(), dir.path().join(SYSTEM_FILE));
    }
}
