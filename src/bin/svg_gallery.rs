//! Renders all four charts from the sample dataset into SVG files.
//!
//! Usage: `svg_gallery [output-dir]` (defaults to `target/gallery`).

use std::fs;
use std::path::PathBuf;

use keyed_charts::charts::{
    ChartComponent, OneSidedBarChart, OneSidedBarConfig, ParallelCoordinatesConfig,
    ParallelCoordinatesPlot, Scatterplot, ScatterplotConfig, TwoSidedBarChart, TwoSidedBarConfig,
};
use keyed_charts::data::Dataset;
use keyed_charts::render::{Renderer, SvgRenderer};

fn main() {
    let _ = keyed_charts::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let output_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("target/gallery"), PathBuf::from);
    fs::create_dir_all(&output_dir)
        .map_err(|err| format!("failed to create `{}`: {err}", output_dir.display()))?;

    let dataset = Dataset::sample();

    let charts: Vec<(&str, Box<dyn ChartComponent>)> = vec![
        (
            "one-sided-barchart",
            Box::new(
                OneSidedBarChart::new(&dataset, OneSidedBarConfig::default())
                    .map_err(|err| err.to_string())?,
            ),
        ),
        (
            "two-sided-barchart",
            Box::new(
                TwoSidedBarChart::new(&dataset, TwoSidedBarConfig::default())
                    .map_err(|err| err.to_string())?,
            ),
        ),
        (
            "parallel-coordinates-plot",
            Box::new(
                ParallelCoordinatesPlot::new(&dataset, ParallelCoordinatesConfig::default())
                    .map_err(|err| err.to_string())?,
            ),
        ),
        (
            "scatterplot",
            Box::new(
                Scatterplot::new(&dataset, ScatterplotConfig::default())
                    .map_err(|err| err.to_string())?,
            ),
        ),
    ];

    let mut renderer = SvgRenderer::new();
    for (name, chart) in &charts {
        let frame = chart.frame().map_err(|err| err.to_string())?;
        renderer.render(&frame).map_err(|err| err.to_string())?;

        let path = output_dir.join(format!("{name}.svg"));
        fs::write(&path, renderer.document())
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
