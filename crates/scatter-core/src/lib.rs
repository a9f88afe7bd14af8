// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports public API for scatter chart rendering.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod scale;
pub mod surface;
pub mod theme;
pub mod time;
pub mod types;

pub use axis::{draw_axis, AxisSpec, Orient, Tick};
pub use chart::{RenderOptions, ScatterChart};
pub use error::{ChartError, ChartResult};
pub use geometry::Frame;
pub use scale::{LinearScale, TimeScale};
pub use surface::{Node, Surface};
pub use theme::{Color, Theme};
pub use time::{parse_timestamp, TimeInterval, TimeUnit};
pub use types::{Insets, Observation};
