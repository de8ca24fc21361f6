//! Plotting pipeline: resolve → load → render
//!
//! The system file is plotted first, then every snapshot in step order.
//! Files are processed one at a time and the first failure aborts the run.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::data::{load_dataset, DataError};
use crate::input::{self, ResolveError};
use crate::output::visualization::{output_path_for, render_dataset, DatasetKind, Panel, PlotConfig, RenderError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("{}: {source}", path.display())]
    Data {
        path: PathBuf,
        #[source]
        source: DataError,
    },

    #[error("{}: {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: RenderError,
    },
}

/// Which figures a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// System figure, then all snapshots
    #[default]
    All,
    System,
    Snapshots,
}

impl Selection {
    fn includes_system(&self) -> bool {
        matches!(self, Selection::All | Selection::System)
    }

    fn includes_snapshots(&self) -> bool {
        matches!(self, Selection::All | Selection::Snapshots)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::System => f.write_str("system"),
            Selection::Snapshots => f.write_str("snapshots"),
        }
    }
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Selection::All),
            "system" => Ok(Selection::System),
            "snapshots" => Ok(Selection::Snapshots),
            other => Err(format!(
                "unknown selection '{}' (expected all, system or snapshots)",
                other
            )),
        }
    }
}

/// One written image and the panels it contains
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFigure {
    pub source: PathBuf,
    pub output: PathBuf,
    pub panels: Vec<Panel>,
}

/// Everything a run wrote
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotRun {
    pub system: Option<RenderedFigure>,
    pub snapshots: Vec<RenderedFigure>,
}

impl PlotRun {
    /// Number of images written
    pub fn len(&self) -> usize {
        self.snapshots.len() + usize::from(self.system.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Load one data file and write its figure next to it
pub fn plot_file(
    path: &Path,
    kind: DatasetKind,
    config: &PlotConfig,
) -> Result<RenderedFigure, PipelineError> {
    let dataset = load_dataset(path).map_err(|source| PipelineError::Data {
        path: path.to_path_buf(),
        source,
    })?;

    let output = output_path_for(path, config);
    let panels = render_dataset(&dataset, kind, &output, config).map_err(|source| {
        PipelineError::Render {
            path: path.to_path_buf(),
            source,
        }
    })?;

    Ok(RenderedFigure {
        source: path.to_path_buf(),
        output,
        panels,
    })
}

/// Plot `dir/system.dat`
pub fn plot_system(dir: &Path, config: &PlotConfig) -> Result<RenderedFigure, PipelineError> {
    let path = input::system_file(dir)?;
    let figure = plot_file(&path, DatasetKind::System, config)?;
    log::info!("Wrote {}", figure.output.display());
    Ok(figure)
}

/// Plot every snapshot in `dir`, in step order, stopping at the first failure
pub fn plot_snapshots(
    dir: &Path,
    config: &PlotConfig,
) -> Result<Vec<RenderedFigure>, PipelineError> {
    let paths = input::snapshot_files(dir)?;
    if paths.is_empty() {
        log::warn!("No snapshot files found in {}", dir.display());
    }

    let mut figures = Vec::with_capacity(paths.len());
    for path in paths {
        log::info!("Plotting: {}", path.display());
        figures.push(plot_file(&path, DatasetKind::Snapshot, config)?);
    }
    Ok(figures)
}

/// Run the pipeline over a solver output directory
pub fn run(dir: &Path, selection: Selection, config: &PlotConfig) -> Result<PlotRun, PipelineError> {
    let mut result = PlotRun::default();

    if selection.includes_system() {
        result.system = Some(plot_system(dir, config)?);
    }
    if selection.includes_snapshots() {
        result.snapshots = plot_snapshots(dir, config)?;
    }

    Ok(result)
}
