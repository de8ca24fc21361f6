//! Plot configuration shared by system and snapshot figures

use std::fmt;
use std::str::FromStr;

use plotters::prelude::*;

/// Output image format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// Raster image (bitmap backend)
    #[default]
    Png,
    /// Vector image (SVG backend)
    Svg,
}

impl ImageFormat {
    /// File extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            other => Err(format!("unsupported image format '{}' (expected png or svg)", other)),
        }
    }
}

/// Configuration for customizing figures
///
/// # Fields
///
/// - `figure_size`: Figure size in inches (width, height)
/// - `dpi`: Pixels per inch, the pixel size is `figure_size * dpi`
/// - `format`: Image format of the written files
/// - `line_color`, `line_width`: Style of the trace in every panel
/// - `background`: Background color
/// - `show_grid`: Whether to draw grid lines
/// - `caption_size`, `title_size`: Font sizes of the figure caption and
///   of the panel titles
///
/// # Example
///
/// ```rust
/// use spinplot::output::visualization::{ImageFormat, PlotConfig};
///
/// let config = PlotConfig {
///     format: ImageFormat::Svg,
///     dpi: 150,
///     ..PlotConfig::default()
/// };
/// assert_eq!(config.pixel_size(), (3000, 1500));
/// ```
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Figure size in inches (default: 20 x 10)
    pub figure_size: (f64, f64),

    /// Pixels per inch (default: 100)
    pub dpi: u32,

    /// Output format (default: PNG)
    pub format: ImageFormat,

    /// Trace color (default: BLUE)
    pub line_color: RGBColor,

    /// Trace width in pixels (default: 2)
    pub line_width: u32,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Figure caption font size (default: 36)
    pub caption_size: f64,

    /// Panel title font size (default: 22)
    pub title_size: f64,

    /// Axis label font size (default: 16)
    pub label_size: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            figure_size: (20.0, 10.0),
            dpi: 100,
            format: ImageFormat::Png,
            line_color: BLUE,
            line_width: 2,
            background: WHITE,
            show_grid: true,
            caption_size: 36.0,
            title_size: 22.0,
            label_size: 16.0,
        }
    }
}

impl PlotConfig {
    /// Image size in pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        let (width, height) = self.figure_size;
        let dpi = self.dpi as f64;
        ((width * dpi).round() as u32, (height * dpi).round() as u32)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
