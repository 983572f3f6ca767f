//! Linear mapping between raster pixels and extent units.

use serde::{Deserialize, Serialize};

use crate::config::Extent;

/// Affine frame of a locator raster.
///
/// Pixel `(0, 0)` is the upper-left corner of the extent. The scale on each
/// axis is `span / dimension`, derived once at construction. A cyclic frame
/// measures its horizontal span eastward across ±180°, so the right edge is
/// `left + span` in unwrapped degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterFrame {
    left: f64,
    top: f64,
    x_scale: f64,
    y_scale: f64,
    width: i64,
    height: i64,
    cyclic: bool,
}

impl RasterFrame {
    /// Dimensions must already be validated as positive.
    pub fn new(extent: &Extent, width: i64, height: i64, cyclic: bool) -> Self {
        Self {
            left: extent.left,
            top: extent.top,
            x_scale: extent.horizontal_span(cyclic) / width as f64,
            y_scale: extent.vertical_span() / height as f64,
            width,
            height,
            cyclic,
        }
    }

    /// Extent units per pixel horizontally.
    pub fn x_scale(&self) -> f64 {
        self.x_scale
    }

    /// Extent units per pixel vertically.
    pub fn y_scale(&self) -> f64 {
        self.y_scale
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    /// Unwrapped right edge.
    pub fn right(&self) -> f64 {
        self.left + self.x_scale * self.width as f64
    }

    pub fn bottom(&self) -> f64 {
        self.top - self.y_scale * self.height as f64
    }

    /// Horizontal midpoint in unwrapped units.
    pub fn center_x(&self) -> f64 {
        (self.left + self.right()) / 2.0
    }

    pub fn center_y(&self) -> f64 {
        (self.top + self.bottom()) / 2.0
    }

    /// Extent units at a pixel. Pixels outside the raster extrapolate.
    pub fn pixel_to_frame(&self, x: f64, y: f64) -> (f64, f64) {
        (self.left + x * self.x_scale, self.top - y * self.y_scale)
    }

    /// Fractional pixel at extent units.
    pub fn frame_to_pixel(&self, fx: f64, fy: f64) -> (f64, f64) {
        ((fx - self.left) / self.x_scale, (self.top - fy) / self.y_scale)
    }

    /// Hold a point inside the extent, edges inclusive.
    pub fn clamp(&self, fx: f64, fy: f64) -> (f64, f64) {
        (
            fx.clamp(self.left, self.right()),
            fy.clamp(self.bottom(), self.top),
        )
    }
}
