// File: crates/demo/src/main.rs
// Summary: Demo loads a (time, value) CSV (or synthesizes one) and renders a scatter SVG.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveTime};
use scatter_core::types::{HEIGHT, WIDTH};
use scatter_core::{Observation, RenderOptions, ScatterChart};
use scatter_render_svg::SvgSurface;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let observations = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            println!("Using input file: {}", path.display());
            load_time_value_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            println!("No input file given; using a synthesized sample series");
            sample_series()
        }
    };
    println!("Loaded {} observations", observations.len());

    if observations.is_empty() {
        anyhow::bail!("no observations loaded — check headers/delimiter.");
    }

    let chart = ScatterChart::new();
    let opts = RenderOptions::default();
    let mut surface = SvgSurface::new(f64::from(WIDTH), f64::from(HEIGHT));
    chart.render(&opts, &mut surface, &observations)?;

    let out = PathBuf::from("target/out/scatter.svg");
    surface.write_to(&out)?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// Load a CSV with one timestamp-ish column and one numeric column.
fn load_time_value_csv(path: &Path) -> Result<Vec<Observation>> {
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

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_time = idx(&["time", "timestamp", "date", "datetime"]);
    let i_value = idx(&["value", "temperature", "reading", "y", "amount"]);

    let (i_time, i_value) = match (i_time, i_value) {
        (Some(t), Some(v)) => (t, v),
        _ => anyhow::bail!("could not find time and value columns in {:?}", headers),
    };

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let time = rec.get(i_time).map(str::trim).unwrap_or("");
        let value = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok());
        if let (false, Some(value)) = (time.is_empty(), value) {
            out.push(Observation::new(time, value));
        }
    }
    Ok(out)
}

/// Five days of hourly readings on a gentle wave, spanning the 0..4 band
/// the chart's fixed y domain expects.
fn sample_series() -> Vec<Observation> {
    let start = NaiveDate::from_ymd_opt(2021, 11, 19)
        .map(|d| d.and_time(NaiveTime::MIN))
        .unwrap_or_default();
    (0..120)
        .map(|i| {
            let t = start + Duration::hours(i);
            let v = 2.0 + 1.5 * ((i as f64) * 0.26).sin();
            Observation::new(
                t.format("%Y-%m-%dT%H:%M:%S").to_string(),
                (v * 10.0).round() / 10.0,
            )
        })
        .collect()
}
