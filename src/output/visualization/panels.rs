//! Panel tables, grid layouts and the axis-range policy
//!
//! Every figure is a fixed grid of line panels, one panel per dependent
//! series. What goes where is decided by the [`DatasetKind`]:
//!
//! | Kind | Grid | Panels | Caption | x axis |
//! |------|------|--------|---------|--------|
//! | `System` | 4 x 2 | 7 | "System plot" | floored at the origin |
//! | `Snapshot` | 2 x 3 | 6 | none | raw data extent |
//!
//! The y axis of every panel spans `[min(0, min y), 1.1 * max y]`.

use std::fmt;
use std::ops::Range;

use crate::data::Dataset;

/// Label of the shared position axis
pub const POSITION_LABEL: &str = "Position, x";

/// Multiplicative headroom applied to the upper y bound
pub const HEADROOM: f64 = 1.1;

/// One entry of a panel table: which column, and how to label it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSpec {
    /// Dataset column plotted against position (1-based, column 0 is x)
    pub column: usize,
    pub title: &'static str,
    pub ylabel: &'static str,
}

/// Material parameter panels of `system.dat`
pub static SYSTEM_PANELS: [PanelSpec; 7] = [
    PanelSpec { column: 1, title: "Equilibrium spin accumulation, m∞", ylabel: "m∞" },
    PanelSpec { column: 2, title: "Spin polarization of the conductivity, β", ylabel: "β" },
    PanelSpec { column: 3, title: "Spin polarization of the diffusivity, β′", ylabel: "β′" },
    PanelSpec { column: 4, title: "Diffusivity, D₀", ylabel: "D₀" },
    PanelSpec { column: 5, title: "Precession length, λ_J", ylabel: "λ_J" },
    PanelSpec { column: 6, title: "Dephasing length, λ_φ", ylabel: "λ_φ" },
    PanelSpec { column: 7, title: "Spin-flip length, λ_sf", ylabel: "λ_sf" },
];

/// Spin current and spin accumulation panels of a snapshot file
pub static SNAPSHOT_PANELS: [PanelSpec; 6] = [
    PanelSpec { column: 1, title: "Spin current, j_mx", ylabel: "j_mx" },
    PanelSpec { column: 2, title: "Spin current, j_my", ylabel: "j_my" },
    PanelSpec { column: 3, title: "Spin current, j_mz", ylabel: "j_mz" },
    PanelSpec { column: 4, title: "Spin accumulation, m_x", ylabel: "m_x" },
    PanelSpec { column: 5, title: "Spin accumulation, m_y", ylabel: "m_y" },
    PanelSpec { column: 6, title: "Spin accumulation, m_z", ylabel: "m_z" },
];

/// Grid of panel cells, filled row by row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// (row, column) of the panel in slot `index`
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

/// Which kind of solver file a dataset came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    /// `system.dat`: material parameter profiles
    System,
    /// `<step>.dat`: spin current and spin accumulation at one step
    Snapshot,
}

impl DatasetKind {
    pub fn layout(&self) -> GridLayout {
        match self {
            DatasetKind::System => GridLayout { rows: 4, cols: 2 },
            DatasetKind::Snapshot => GridLayout { rows: 2, cols: 3 },
        }
    }

    pub fn panels(&self) -> &'static [PanelSpec] {
        match self {
            DatasetKind::System => &SYSTEM_PANELS,
            DatasetKind::Snapshot => &SNAPSHOT_PANELS,
        }
    }

    /// Figure caption drawn above the grid
    pub fn caption(&self) -> Option<&'static str> {
        match self {
            DatasetKind::System => Some("System plot"),
            DatasetKind::Snapshot => None,
        }
    }

    /// System profiles start at a physical boundary at x = 0; snapshots
    /// keep the raw extent.
    fn floors_position_at_origin(&self) -> bool {
        matches!(self, DatasetKind::System)
    }

    /// Compute every panel of the figure for `dataset`
    ///
    /// # Errors
    ///
    /// `PanelError::ColumnMismatch` if the dataset does not carry exactly
    /// as many series as the panel table has entries.
    pub fn panels_for(&self, dataset: &Dataset) -> Result<Vec<Panel>, PanelError> {
        let specs = self.panels();
        if dataset.series_count() != specs.len() {
            return Err(PanelError::ColumnMismatch {
                kind: *self,
                expected: specs.len(),
                found: dataset.series_count(),
            });
        }

        let layout = self.layout();
        let x = AxisRange::position(dataset.position(), self.floors_position_at_origin());

        specs
            .iter()
            .enumerate()
            .map(|(slot, spec)| -> Result<Panel, PanelError> {
                let values = dataset.column(spec.column).ok_or(PanelError::ColumnMismatch {
                    kind: *self,
                    expected: specs.len(),
                    found: dataset.series_count(),
                })?;

                Ok(Panel {
                    spec: *spec,
                    xlabel: POSITION_LABEL,
                    cell: layout.cell(slot),
                    x,
                    y: AxisRange::series(values),
                })
            })
            .collect()
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetKind::System => f.write_str("system"),
            DatasetKind::Snapshot => f.write_str("snapshot"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    #[error("{kind} data has {found} series, expected {expected}")]
    ColumnMismatch {
        kind: DatasetKind,
        expected: usize,
        found: usize,
    },
}

/// Axis bounds as computed by the range policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// x bounds: the data extent, optionally extended down to 0
    pub fn position(values: &[f64], floor_at_origin: bool) -> Self {
        let (min, max) = extent(values);
        let min = if floor_at_origin { min.min(0.0) } else { min };
        Self { min, max }
    }

    /// y bounds: extended down to 0, with headroom above the maximum
    pub fn series(values: &[f64]) -> Self {
        let (min, max) = extent(values);
        Self {
            min: min.min(0.0),
            max: HEADROOM * max,
        }
    }

    /// Range handed to the chart builder
    ///
    /// Same as `min..max` whenever that is a non-empty finite interval.
    /// Otherwise (flat series, all-negative series whose headroom inverts
    /// the bounds, NaN data) the bounds are ordered and padded so that the
    /// panel can still be drawn.
    pub fn drawable(&self) -> Range<f64> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return 0.0..1.0;
        }
        if self.max > self.min {
            return self.min..self.max;
        }

        let (lo, hi) = (self.max, self.min);
        if hi > lo {
            return lo..hi;
        }

        let pad = if lo == 0.0 { 1.0 } else { 0.1 * lo.abs() };
        (lo - pad)..(hi + pad)
    }
}

/// One subplot of a figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub spec: PanelSpec,
    pub xlabel: &'static str,
    /// (row, column) in the figure grid
    pub cell: (usize, usize),
    pub x: AxisRange,
    pub y: AxisRange,
}

/// (min, max) ignoring NaN; (inf, -inf) for an empty or all-NaN slice
fn extent(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

// =================================================================================================
// Tests
// =================================================================================================
