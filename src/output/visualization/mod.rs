//! Visualization of solver output using the `plotters` library
//!
//! # Organization
//!
//! - **config**: Shared figure configuration (`PlotConfig`, `ImageFormat`)
//! - **panels**: Panel tables, grid layouts and the axis-range policy
//! - **figure**: Drawing a dataset as a multi-panel image
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use spinplot::data::load_dataset;
//! use spinplot::output::visualization::{output_path_for, render_dataset, DatasetKind, PlotConfig};
//!
//! let config = PlotConfig::default();
//! let input = Path::new("out/100.dat");
//! let dataset = load_dataset(input)?;
//!
//! // Writes out/100.png
//! render_dataset(&dataset, DatasetKind::Snapshot, &output_path_for(input, &config), &config)?;
//! ```
//!
//! # Which Kind
//!
//! | File | Kind | Grid | Panels |
//! |------|------|------|--------|
//! | `system.dat` | `DatasetKind::System` | 4 x 2 | m∞, β, β′, D₀, λ_J, λ_φ, λ_sf |
//! | `<step>.dat` | `DatasetKind::Snapshot` | 2 x 3 | j_mx, j_my, j_mz, m_x, m_y, m_z |

pub mod config;
pub mod figure;
pub mod panels;

pub use config::{ImageFormat, PlotConfig};

pub use figure::{output_path_for, render_dataset, RenderError};

pub use panels::{
    AxisRange, DatasetKind, GridLayout, Panel, PanelError, PanelSpec, HEADROOM, POSITION_LABEL,
};
