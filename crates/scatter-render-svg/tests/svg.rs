// File: crates/scatter-render-svg/tests/svg.rs
// Purpose: End-to-end serialization checks for the SVG surface backend.

use scatter_core::{Observation, RenderOptions, ScatterChart};
use scatter_render_svg::SvgSurface;

fn sample_data() -> Vec<Observation> {
    vec![
        Observation::new("2020-01-01", 2.0),
        Observation::new("2020-03-01", 3.5),
        Observation::new("2020-06-01", 1.0),
    ]
}

#[test]
fn serializes_the_rendered_tree() {
    let mut surface = SvgSurface::new(600.0, 400.0);
    ScatterChart::new()
        .render(&RenderOptions::default(), &mut surface, &sample_data())
        .expect("render");

    let svg = surface.to_svg_string();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"600\" height=\"400\">"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("transform=\"translate(120,20)\""));
    assert!(svg.contains("transform=\"translate(0,260)\""));
    assert!(svg.contains("class=\"axis-label\""));
    assert!(svg.contains("transform=\"rotate(-90)\""));
    assert!(svg.contains("class=\"tick\""));
    assert!(svg.contains("class=\"domain\""));
    assert_eq!(svg.matches("<circle").count(), 3);
    assert_eq!(svg.matches("r=\"8\"").count(), 3);
    assert_eq!(svg.matches("fill-opacity=\"0.6\"").count(), 3);
}

#[test]
fn cleared_surface_serializes_only_the_latest_render() {
    let mut surface = SvgSurface::new(600.0, 400.0);
    let chart = ScatterChart::new();
    let opts = RenderOptions::default();
    chart.render(&opts, &mut surface, &sample_data()).expect("first");
    chart.render(&opts, &mut surface, &sample_data()).expect("second");

    let svg = surface.to_svg_string();
    assert_eq!(svg.matches("transform=\"translate(120,20)\"").count(), 1);
    assert_eq!(surface.nodes().len(), 1);
}

#[test]
fn append_only_surface_serializes_both_renders() {
    let mut surface = SvgSurface::new(600.0, 400.0);
    let chart = ScatterChart::new();
    let opts = RenderOptions { clear_before_draw: false, ..RenderOptions::default() };
    chart.render(&opts, &mut surface, &sample_data()).expect("first");
    chart.render(&opts, &mut surface, &sample_data()).expect("second");

    let svg = surface.to_svg_string();
    assert_eq!(svg.matches("transform=\"translate(120,20)\"").count(), 2);
    assert_eq!(svg.matches("<circle").count(), 6);
}

#[test]
fn escapes_label_text() {
    let mut surface = SvgSurface::new(600.0, 400.0);
    let mut chart = ScatterChart::new();
    chart.x_label = "Time & <Tide>".to_string();
    chart
        .render(&RenderOptions::default(), &mut surface, &sample_data())
        .expect("render");

    let svg = surface.to_svg_string();
    assert!(svg.contains("Time &amp; &lt;Tide&gt;"));
    assert!(!svg.contains("<Tide>"));
}

#[test]
fn writes_the_document_to_disk() {
    let mut surface = SvgSurface::new(600.0, 400.0);
    ScatterChart::new()
        .render(&RenderOptions::default(), &mut surface, &sample_data())
        .expect("render");

    let out = std::path::PathBuf::from("target/test_out/scatter.svg");
    surface.write_to(&out).expect("write svg");
    let written = std::fs::read_to_string(&out).expect("read back");
    assert_eq!(written, surface.to_svg_string());
}
