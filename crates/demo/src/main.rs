// File: crates/demo/src/main.rs
// Summary: Demo loads a metric column from CSV and prints chart variants to the terminal.
//
// Usage: termchart-demo [file.csv] [scale] [aggregation] [overflow]
// where scale is linear|log|log-inverted, aggregation is mean|min|max|skip,
// and overflow is linear|log|clamp.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use termchart_core::{
    Aggregation, AxisScale, Chart, ChartOptions, Color, Overflow, SeriesConfig,
};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "load_1m.csv".to_string());

    let scale = match args.next() {
        Some(name) => AxisScale::from_name(&name)?,
        None => AxisScale::Linear,
    };
    let aggregation = match args.next() {
        Some(name) => Some(Aggregation::from_name(&name)?),
        None => None,
    };
    let overflow = match args.next() {
        Some(name) => Overflow::from_name(&name)?,
        None => Overflow::LinearScale,
    };

    let path = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());

    let values = load_metric_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} samples", values.len());

    if values.len() < 2 {
        anyhow::bail!("need at least two samples to draw a line");
    }

    let options = ChartOptions {
        axis_scale: scale,
        aggregation,
        title: path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("metric")
            .to_string(),
        ..ChartOptions::default()
    };
    let config = SeriesConfig::with_color(Color::DarkCyan).overflow(overflow);

    let text = Chart::plot(&values, 80, 20, options, config)?;
    println!("{text}");

    Ok(())
}

fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load one numeric column from a headed CSV. Prefers a column named
/// value/load/close/y, otherwise takes the first column that parses.
fn load_metric_csv(path: &Path) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let preferred = headers
        .iter()
        .position(|h| matches!(h.as_str(), "value" | "load" | "close" | "y"));

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let value = match preferred {
            Some(ix) => rec.get(ix).and_then(|s| s.trim().parse::<f64>().ok()),
            None => rec
                .iter()
                .find_map(|field| field.trim().parse::<f64>().ok()),
        };
        if let Some(v) = value {
            out.push(v);
        }
    }
    Ok(out)
}
