// File: crates/plot-demo/src/main.rs
// Summary: Demo renders one formula to PNG; settings come from an optional JSON config plus CLI overrides.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use plot_core::{PlotConfig, Plotter, HINT};

#[derive(Parser, Debug)]
#[command(name = "plot-demo", about = "Render f(x) to a PNG")]
struct Cli {
    /// JSON config with the widget keys (width, height, xMin, xMax, yMin, yMax, functionStr, theme)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Formula in x, e.g. "sin(x) / x"
    #[arg(short, long)]
    expr: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    x_min: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    x_max: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    y_min: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    y_max: Option<f64>,

    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,

    /// Theme preset: light, dark, high-contrast-dark
    #[arg(short, long)]
    theme: Option<String>,

    /// Output PNG path
    #[arg(short, long, default_value = "target/out/plot.png")]
    out: PathBuf,
}

impl Cli {
    fn into_config(self) -> Result<(PlotConfig, PathBuf)> {
        let mut cfg = match &self.config {
            Some(path) => PlotConfig::from_path(path)
                .with_context(|| format!("failed to load config '{}'", path.display()))?,
            None => PlotConfig::default(),
        };
        if let Some(v) = self.expr { cfg.function_str = v; }
        if let Some(v) = self.x_min { cfg.x_min = v; }
        if let Some(v) = self.x_max { cfg.x_max = v; }
        if let Some(v) = self.y_min { cfg.y_min = v; }
        if let Some(v) = self.y_max { cfg.y_max = v; }
        if let Some(v) = self.width { cfg.width = v; }
        if let Some(v) = self.height { cfg.height = v; }
        if let Some(v) = self.theme { cfg.theme = v; }
        Ok((cfg, self.out))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (config, out) = Cli::parse().into_config()?;
    log::debug!("config: {config:?}");

    let plotter = Plotter::new(config.clone())
        .with_context(|| format!("cannot plot '{}'", config.function_str))?;

    println!("f(x) = {}", plotter.committed());
    println!("{}", plotter.status_line());
    println!("{HINT}");

    plot_render_skia::render_to_png(&plotter, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
