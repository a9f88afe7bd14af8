// File: crates/scatter-core/src/axis.rs
// Summary: Immutable axis configuration and tick/gridline drawing.

use crate::surface::{Group, Line, Node, Path, Text, TextAnchor};
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

/// Axis configuration, fixed before any drawing happens. A negative tick
/// size extends the tick lines across the plot area, turning them into
/// gridlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisSpec {
    pub orient: Orient,
    pub tick_count: usize,
    pub tick_padding: f64,
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
}

impl AxisSpec {
    pub fn bottom() -> Self {
        Self {
            orient: Orient::Bottom,
            tick_count: 10,
            tick_padding: 3.0,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
        }
    }

    pub fn left() -> Self {
        Self { orient: Orient::Left, ..Self::bottom() }
    }

    pub fn ticks(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    pub fn tick_padding(mut self, padding: f64) -> Self {
        self.tick_padding = padding;
        self
    }

    /// Set both inner and outer tick size.
    pub fn tick_size(mut self, size: f64) -> Self {
        self.tick_size_inner = size;
        self.tick_size_outer = size;
        self
    }
}

/// One tick: a pixel position along the axis and its label text.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

impl Tick {
    pub fn new(position: f64, label: impl Into<String>) -> Self {
        Self { position, label: label.into() }
    }
}

/// Draw the axis into `group`: a domain outline with outer-tick end caps,
/// then one tick group per tick carrying its gridline and padded label.
/// Tick positions come from a finished scale; drawing never reads one.
pub fn draw_axis(group: &mut Group, spec: &AxisSpec, ticks: &[Tick], range: (f64, f64), theme: &Theme) {
    let k = match spec.orient {
        Orient::Bottom => 1.0,
        Orient::Left => -1.0,
    };
    let (r0, r1) = range;
    let outer = k * spec.tick_size_outer;
    let d = match spec.orient {
        Orient::Bottom => format!("M{r0},{outer}V0H{r1}V{outer}"),
        Orient::Left => format!("M{outer},{r0}H0V{r1}H{outer}"),
    };
    group.push(Node::Path(Path {
        d,
        class: Some("domain"),
        stroke: Some(theme.axis_line),
    }));

    let spacing = spec.tick_size_inner.max(0.0) + spec.tick_padding;
    for tick in ticks {
        let mut g = match spec.orient {
            Orient::Bottom => Group::translated(tick.position, 0.0),
            Orient::Left => Group::translated(0.0, tick.position),
        }
        .with_class("tick");

        let gridline = match spec.orient {
            Orient::Bottom => Line {
                x1: 0.0,
                y1: 0.0,
                x2: 0.0,
                y2: k * spec.tick_size_inner,
                stroke: Some(theme.grid),
            },
            Orient::Left => Line {
                x1: 0.0,
                y1: 0.0,
                x2: k * spec.tick_size_inner,
                y2: 0.0,
                stroke: Some(theme.grid),
            },
        };
        g.push(Node::Line(gridline));

        let label = match spec.orient {
            Orient::Bottom => Text {
                anchor: Some(TextAnchor::Middle),
                dy: Some("0.71em"),
                fill: Some(theme.tick_label),
                ..Text::label(0.0, k * spacing, tick.label.clone())
            },
            Orient::Left => Text {
                anchor: Some(TextAnchor::End),
                dy: Some("0.32em"),
                fill: Some(theme.tick_label),
                ..Text::label(k * spacing, 0.0, tick.label.clone())
            },
        };
        g.push(Node::Text(label));
        group.push(Node::Group(g));
    }
}
