//! Multi-panel figure rendering
//!
//! A figure is drawn in one call: the backend is opened, every panel is
//! drawn into its grid cell, the image is presented to disk and the
//! backend is dropped before returning. Nothing outlives the call, so
//! rendering thousands of snapshots keeps memory flat.
//!
//! # Usage
//!
//! ```rust,ignore
//! use spinplot::output::visualization::{render_dataset, DatasetKind, PlotConfig};
//!
//! let dataset = load_dataset(Path::new("out/system.dat"))?;
//! let panels = render_dataset(&dataset, DatasetKind::System, Path::new("out/system.png"), &PlotConfig::default())?;
//! ```

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::config::PlotConfig;
use super::panels::{DatasetKind, Panel, PanelError};
use crate::data::Dataset;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Panels(#[from] PanelError),

    #[error("failed to draw {}: {message}", path.display())]
    Backend { path: PathBuf, message: String },
}

/// Image path for a data file: same directory and stem, image extension
///
/// `out/5.dat` becomes `out/5.png` (or `out/5.svg`).
pub fn output_path_for(input: &Path, config: &PlotConfig) -> PathBuf {
    input.with_extension(config.format.extension())
}

/// Render `dataset` as a grid of panels into `output_path`
///
/// The backend is picked from the extension of `output_path`: `.svg` uses
/// the SVG backend, anything else the bitmap backend.
///
/// Returns the panels that were drawn, with their axis bounds.
///
/// # Errors
///
/// - `Panels` if the dataset's series count does not match `kind`;
///   nothing is written in that case
/// - `Backend` if drawing or writing the image fails
pub fn render_dataset(
    dataset: &Dataset,
    kind: DatasetKind,
    output_path: &Path,
    config: &PlotConfig,
) -> Result<Vec<Panel>, RenderError> {
    let panels = kind.panels_for(dataset)?;
    for panel in &panels {
        log::debug!(
            "{} panel '{}': x = [{}, {}], y = [{}, {}]",
            kind,
            panel.spec.title,
            panel.x.min,
            panel.x.max,
            panel.y.min,
            panel.y.max
        );
    }

    let size = config.pixel_size();
    let is_svg = output_path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    let drawn = if is_svg {
        let root = SVGBackend::new(output_path, size).into_drawing_area();
        draw_figure(&root, dataset, kind, &panels, config)
    } else {
        let root = BitMapBackend::new(output_path, size).into_drawing_area();
        draw_figure(&root, dataset, kind, &panels, config)
    };

    drawn.map_err(|e| RenderError::Backend {
        path: output_path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(panels)
}

/// Draw the caption and every panel on any drawing area, then present it
fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    dataset: &Dataset,
    kind: DatasetKind,
    panels: &[Panel],
    config: &PlotConfig,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&config.background)?;

    let layout = kind.layout();
    let cells = match kind.caption() {
        Some(caption) => root
            .titled(caption, ("sans-serif", config.caption_size).into_font())?
            .split_evenly((layout.rows, layout.cols)),
        None => root.split_evenly((layout.rows, layout.cols)),
    };

    for panel in panels {
        let (row, col) = panel.cell;
        let area = &cells[row * layout.cols + col];
        draw_panel(area, dataset, panel, config)?;
    }

    root.present()?;
    Ok(())
}

/// Draw a single line panel
fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    dataset: &Dataset,
    panel: &Panel,
    config: &PlotConfig,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .caption(panel.spec.title, ("sans-serif", config.title_size).into_font())
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(80)
        .build_cartesian_2d(panel.x.drawable(), panel.y.drawable())?;

    let mut mesh = chart.configure_mesh();
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.x_desc(panel.xlabel)
        .y_desc(panel.spec.ylabel)
        .axis_desc_style(("sans-serif", config.label_size).into_font())
        .x_label_formatter(&format_tick)
        .y_label_formatter(&format_tick)
        .draw()?;

    chart.draw_series(LineSeries::new(
        dataset.trace(panel.spec.column),
        config.line_color.stroke_width(config.line_width),
    ))?;

    Ok(())
}

/// Tick labels: plain decimals for moderate magnitudes, scientific otherwise
fn format_tick(value: &f64) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-2..1e4).contains(&magnitude) {
        format!("{:.3}", value)
    } else {
        format!("{:.2e}", value)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
