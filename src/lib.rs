//! spinplot: Plots of spin-accumulation simulation output
//!
//! A spin-transport solver leaves a directory of plain-text tables behind:
//!
//! - `system.dat`: position plus seven material parameter profiles
//!   (m∞, β, β′, D₀, λ_J, λ_φ, λ_sf)
//! - `<step>.dat`: position plus spin current (j_mx, j_my, j_mz) and spin
//!   accumulation (m_x, m_y, m_z) at one output step
//!
//! spinplot turns each of those tables into a multi-panel image written
//! next to it (`system.png`, `0.png`, `100.png`, ...).
//!
//! # Architecture
//!
//! The crate is a single pipeline, run file by file:
//!
//! 1. [`input`]: locate the system file and the snapshot files
//! 2. [`data`]: parse a table into a column-major [`data::Dataset`]
//! 3. [`output`]: derive axis bounds and draw the panel grid
//!
//! [`pipeline`] chains the three stages.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use spinplot::prelude::*;
//!
//! # fn main() -> Result<(), PipelineError> {
//! let config = PlotConfig::default();
//! let run = spinplot::pipeline::run(Path::new("out"), Selection::All, &config)?;
//! println!("{} images written", run.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`input`]: File discovery
//! - [`data`]: Dataset container and text loader
//! - [`output`]: Figure rendering
//! - [`pipeline`]: End-to-end driver

pub mod data;
pub mod input;
pub mod output;
pub mod pipeline;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use spinplot::prelude::*;
    //! ```
    pub use crate::data::{load_dataset, parse_dataset, Dataset, DataError};
    pub use crate::output::visualization::{
        render_dataset, AxisRange, DatasetKind, ImageFormat, Panel, PlotConfig,
    };
    pub use crate::pipeline::{PipelineError, PlotRun, RenderedFigure, Selection};
}
