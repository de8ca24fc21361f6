use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use spinplot::output::visualization::{ImageFormat, PlotConfig};
use spinplot::pipeline::{self, Selection};

/// Spin-accumulation plotter
#[derive(Parser, Debug)]
#[command(name = "spinplot", version, about)]
struct Cli {
    /// Folder holding system.dat and the numbered snapshot files
    #[arg(short = 'f', long = "folder", value_name = "DIR")]
    folder: PathBuf,

    /// Image format of the written figures (png or svg)
    #[arg(long, default_value = "png")]
    format: ImageFormat,

    /// Figures to produce (all, system or snapshots)
    #[arg(long, default_value = "all")]
    only: Selection,

    /// Pixels per inch of the 20 x 10 inch figures
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    dpi: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = PlotConfig {
        format: cli.format,
        dpi: cli.dpi,
        ..PlotConfig::default()
    };

    let run = pipeline::run(&cli.folder, cli.only, &config)
        .with_context(|| format!("plotting {}", cli.folder.display()))?;

    log::info!("Done: {} image(s) written", run.len());
    Ok(())
}
