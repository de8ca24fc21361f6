//! Column-major dataset container

use nalgebra::DMatrix;

use super::DataError;

/// A rectangular table of samples, stored column by column
///
/// Rows are sample points, columns are fields. Column 0 is the position
/// axis; columns `1..=series_count()` are the dependent series.
///
/// The backing `DMatrix` is column-major, so every column is a contiguous
/// slice and can be handed to the renderer without copying.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    table: DMatrix<f64>,
}

impl Dataset {
    /// Build from rows of equal width
    ///
    /// # Errors
    ///
    /// - `Empty` if there are no rows or the rows have no fields
    /// - `RaggedRow` if a row differs in width from the first one
    ///   (`line` is the 1-based row index)
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, DataError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(DataError::Empty);
        }

        let mut flat = Vec::with_capacity(rows.len() * width);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(DataError::RaggedRow {
                    line: i + 1,
                    expected: width,
                    found: row.len(),
                });
            }
            flat.extend_from_slice(row);
        }

        Ok(Self {
            table: DMatrix::from_row_slice(rows.len(), width, &flat),
        })
    }

    /// Build from columns of equal length (column 0 = position)
    ///
    /// A length mismatch is reported as `RaggedRow` with `line` holding the
    /// 1-based index of the offending column.
    pub fn from_columns(columns: &[Vec<f64>]) -> Result<Self, DataError> {
        let samples = columns.first().map(Vec::len).unwrap_or(0);
        if samples == 0 {
            return Err(DataError::Empty);
        }

        if let Some((j, column)) = columns
            .iter()
            .enumerate()
            .find(|(_, column)| column.len() != samples)
        {
            return Err(DataError::RaggedRow {
                line: j + 1,
                expected: samples,
                found: column.len(),
            });
        }

        let flat: Vec<f64> = columns.iter().flatten().copied().collect();
        Ok(Self {
            table: DMatrix::from_vec(samples, columns.len(), flat),
        })
    }

    /// Number of sample points (N)
    pub fn samples(&self) -> usize {
        self.table.nrows()
    }

    /// Number of dependent series (K), i.e. all columns but the position
    pub fn series_count(&self) -> usize {
        self.table.ncols().saturating_sub(1)
    }

    /// Column `index` as a contiguous slice, `None` if out of range
    pub fn column(&self, index: usize) -> Option<&[f64]> {
        if index >= self.table.ncols() {
            return None;
        }
        let n = self.table.nrows();
        Some(&self.table.as_slice()[index * n..(index + 1) * n])
    }

    /// Position axis (column 0)
    pub fn position(&self) -> &[f64] {
        self.column(0).unwrap_or(&[])
    }

    /// Iterate over `(position, value)` pairs of column `index`
    pub fn trace(&self, index: usize) -> impl Iterator<Item = (f64, f64)> + '_ {
        let values = self.column(index).unwrap_or(&[]);
        self.position().iter().copied().zip(values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_transposes() {
        let rows = vec![vec![0.0, 1.0, 10.0], vec![1.0, 2.0, 20.0]];
        let dataset = Dataset::from_rows(&rows).unwrap();

        assert_eq!(dataset.samples(), 2);
        assert_eq!(dataset.series_count(), 2);
        assert_eq!(dataset.position(), &[0.0, 1.0]);
        assert_eq!(dataset.column(1).unwrap(), &[1.0, 2.0]);
        assert_eq!(dataset.column(2).unwrap(), &[10.0, 20.0]);
        assert!(dataset.column(3).is_none());
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows = vec![vec![0.0, 1.0], vec![1.0, 2.0, 3.0]];
        match Dataset::from_rows(&rows) {
            Err(DataError::RaggedRow { line, expected, found }) => {
                assert_eq!((line, expected, found), (2, 2, 3));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_rows_empty() {
        assert!(matches!(Dataset::from_rows(&[]), Err(DataError::Empty)));
        assert!(matches!(Dataset::from_rows(&[vec![]]), Err(DataError::Empty)));
    }

    #[test]
    fn test_from_columns_matches_from_rows() {
        let by_rows = Dataset::from_rows(&[vec![0.0, 5.0], vec![0.5, 6.0]]).unwrap();
        let by_columns = Dataset::from_columns(&[vec![0.0, 0.5], vec![5.0, 6.0]]).unwrap();
        assert_eq!(by_rows, by_columns);
    }

    #[test]
    fn test_trace_pairs_position_with_series() {
        let dataset = Dataset::from_columns(&[vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]]).unwrap();
        let points: Vec<(f64, f64)> = dataset.trace(1).collect();
        assert_eq!(points, vec![(0.0, 3.0), (1.0, 4.0), (2.0, 5.0)]);
    }

    #[test]
    fn test_position_only_has_no_series() {
        let dataset = Dataset::from_columns(&[vec![0.0, 1.0]]).unwrap();
        assert_eq!(dataset.series_count(), 0);
    }
}
