//! Output of plotted results
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! └── visualization/      ← Multi-panel figures
//!     ├── mod.rs
//!     ├── config.rs
//!     ├── panels.rs
//!     └── figure.rs
//! ```
//!
//! Figures take a loaded [`Dataset`](crate::data::Dataset) and write one
//! image per input file, next to the input.

pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{
    output_path_for,
    render_dataset,
    DatasetKind,
    ImageFormat,
    PlotConfig,
    RenderError,
};
