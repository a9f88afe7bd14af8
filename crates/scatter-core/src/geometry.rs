// File: crates/scatter-core/src/geometry.rs
// Summary: Margin-inset plot frame arithmetic.

use crate::error::{ChartError, ChartResult};
use crate::types::Insets;

/// The plotting rectangle inside the margins. All drawing happens in a
/// coordinate system whose origin sits at `(left, top)` of the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub left: f64,
    pub top: f64,
    pub inner_width: f64,
    pub inner_height: f64,
}

impl Frame {
    /// Derive the frame from surface dimensions and margins.
    ///
    /// Fails when the dimensions are non-finite or the margins consume the
    /// whole surface; rendering never proceeds from a degenerate frame.
    pub fn compute(width: f64, height: f64, insets: &Insets) -> ChartResult<Frame> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidSurface { width, height });
        }
        let inner_width = width - f64::from(insets.hsum());
        let inner_height = height - f64::from(insets.vsum());
        if inner_width <= 0.0 || inner_height <= 0.0 {
            return Err(ChartError::InvalidSurface { width, height });
        }
        Ok(Frame {
            left: f64::from(insets.left),
            top: f64::from(insets.top),
            inner_width,
            inner_height,
        })
    }
}
