// File: crates/scatter-core/src/chart.rs
// Summary: Scatter chart struct and the surface-agnostic rendering pipeline.

use chrono::NaiveDateTime;
use log::debug;

use crate::axis::{draw_axis, AxisSpec, Tick};
use crate::error::{ChartError, ChartResult};
use crate::geometry::Frame;
use crate::scale::{format_tick, LinearScale, TimeScale};
use crate::surface::{Circle, Group, Node, Surface, Text, TextAnchor, Transform};
use crate::theme::Theme;
use crate::time::{parse_timestamp, tick_label};
use crate::types::{Insets, Observation};

/// Local y position of the x-axis title inside the bottom margin.
const X_LABEL_OFFSET: f64 = 100.0;
/// Local y position of the rotated y-axis title left of the axis.
const Y_LABEL_OFFSET: f64 = -60.0;
/// Tick-label distance from the axis line, both axes.
const TICK_PADDING: f64 = 15.0;
/// Requested y tick count.
const Y_TICK_COUNT: usize = 5;
/// Default tick count used for the x axis and for domain nicing.
const NICE_COUNT: usize = 10;

pub struct RenderOptions {
    pub insets: Insets,
    /// Drop prior surface content before drawing. When off, repeated
    /// renders append duplicate element trees.
    pub clear_before_draw: bool,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            clear_before_draw: true,
            theme: Theme::light(),
        }
    }
}

/// A time/value scatter chart: labels, the fixed y domain, and point
/// styling. Everything else is derived per render call.
pub struct ScatterChart {
    pub x_label: String,
    pub y_label: String,
    /// Fixed, not derived from the data; out-of-range values plot outside
    /// the frame.
    pub y_domain: (f64, f64),
    pub point_radius: f64,
    pub point_opacity: f64,
}

impl ScatterChart {
    pub fn new() -> Self {
        Self {
            x_label: "Time".to_string(),
            y_label: "Temperature".to_string(),
            y_domain: (0.0, 4.0),
            point_radius: 8.0,
            point_opacity: 0.6,
        }
    }

    /// Render the observations onto `surface`.
    ///
    /// Validation and timestamp parsing happen before anything is drawn;
    /// on error the surface is left exactly as it was.
    pub fn render(
        &self,
        opts: &RenderOptions,
        surface: &mut dyn Surface,
        data: &[Observation],
    ) -> ChartResult<()> {
        let frame = Frame::compute(surface.width(), surface.height(), &opts.insets)?;
        if data.is_empty() {
            return Err(ChartError::EmptyData);
        }
        let mut parsed: Vec<(NaiveDateTime, f64)> = Vec::with_capacity(data.len());
        for (index, obs) in data.iter().enumerate() {
            let t = parse_timestamp(&obs.x).ok_or_else(|| ChartError::InvalidTimestamp {
                index,
                value: obs.x.clone(),
            })?;
            parsed.push((t, obs.y));
        }
        debug!(
            "rendering {} observations into a {}x{} plot area",
            parsed.len(),
            frame.inner_width,
            frame.inner_height
        );

        let mut x_axis_group = Group::translated(0.0, frame.inner_height);
        let mut y_axis_group = Group::new();

        x_axis_group.push(Node::Text(Text {
            class: Some("axis-label"),
            anchor: Some(TextAnchor::Middle),
            fill: Some(opts.theme.axis_label),
            ..Text::label(frame.inner_width / 2.0, X_LABEL_OFFSET, self.x_label.clone())
        }));
        y_axis_group.push(Node::Text(Text {
            class: Some("axis-label"),
            anchor: Some(TextAnchor::Middle),
            transform: Some(Transform::Rotate(-90.0)),
            fill: Some(opts.theme.axis_label),
            ..Text::label(-frame.inner_height / 2.0, Y_LABEL_OFFSET, self.y_label.clone())
        }));

        let x_scale = TimeScale::from_observations(parsed.iter().map(|p| p.0), (0.0, frame.inner_width))
            .ok_or(ChartError::EmptyData)?
            .nice(NICE_COUNT);
        let y_scale = LinearScale::new(self.y_domain, (frame.inner_height, 0.0)).nice(NICE_COUNT);

        let x_spec = AxisSpec::bottom()
            .tick_padding(TICK_PADDING)
            .tick_size(-frame.inner_height);
        let y_spec = AxisSpec::left()
            .ticks(Y_TICK_COUNT)
            .tick_padding(TICK_PADDING)
            .tick_size(-frame.inner_width);

        // Ticks are read off the finished scales; the axis specs never see
        // a domain that could still change.
        let x_ticks: Vec<Tick> = x_scale
            .ticks(x_spec.tick_count)
            .into_iter()
            .map(|t| Tick::new(x_scale.scale(t), tick_label(t)))
            .collect();
        let y_values = y_scale.ticks(y_spec.tick_count);
        let y_step = if y_values.len() > 1 {
            y_values[1] - y_values[0]
        } else {
            0.0
        };
        let y_ticks: Vec<Tick> = y_values
            .iter()
            .map(|&v| Tick::new(y_scale.scale(v), format_tick(v, y_step)))
            .collect();

        draw_axis(&mut x_axis_group, &x_spec, &x_ticks, x_scale.range(), &opts.theme);
        draw_axis(&mut y_axis_group, &y_spec, &y_ticks, y_scale.range(), &opts.theme);

        let mut root = Group::translated(frame.left, frame.top);
        root.push(Node::Group(x_axis_group));
        root.push(Node::Group(y_axis_group));
        for &(t, v) in &parsed {
            root.push(Node::Circle(Circle {
                cx: x_scale.scale(t),
                cy: y_scale.scale(v),
                r: self.point_radius,
                fill: Some(opts.theme.point),
                fill_opacity: Some(self.point_opacity),
            }));
        }

        if opts.clear_before_draw {
            surface.clear();
        }
        surface.append(Node::Group(root));
        Ok(())
    }
}

impl Default for ScatterChart {
    fn default() -> Self {
        Self::new()
    }
}
