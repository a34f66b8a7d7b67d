//! Mapping between editor canvas pixels and the engine's logical units.
//!
//! Canvas space has its origin at the top-left corner with y growing
//! downward. Logical space has its origin at the canvas center with y growing
//! upward, and always spans [`LOGICAL_WIDTH`] × [`LOGICAL_HEIGHT`] units no
//! matter how many pixels the canvas occupies.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use serde::{Deserialize, Serialize};

use crate::consts::{LOGICAL_HEIGHT, LOGICAL_WIDTH};

/// A point in either canvas or logical space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Convert a canvas pixel position to logical coordinates.
///
/// `width` and `height` must be positive; a zero-area canvas divides by zero.
/// Use [`CanvasSize`] to carry that precondition in the type.
#[must_use]
pub fn canvas_to_logical(px: f64, py: f64, width: f64, height: f64) -> (f64, f64) {
    let x = (px - width / 2.0) / (width / LOGICAL_WIDTH);
    let y = -(py - height / 2.0) / (height / LOGICAL_HEIGHT);
    tracing::trace!(px, py, width, height, x, y, "canvas to logical");
    (x, y)
}

/// Convert a logical position to canvas pixel coordinates.
///
/// Exact inverse of [`canvas_to_logical`] for the same canvas size.
#[must_use]
pub fn logical_to_canvas(lx: f64, ly: f64, width: f64, height: f64) -> (f64, f64) {
    let x = lx * (width / LOGICAL_WIDTH) + width / 2.0;
    let y = -ly * (height / LOGICAL_HEIGHT) + height / 2.0;
    tracing::trace!(lx, ly, width, height, x, y, "logical to canvas");
    (x, y)
}

/// Canvas pixel dimensions with a positive, finite area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    width: f64,
    height: f64,
}

impl CanvasSize {
    /// Returns `None` unless both dimensions are positive and finite.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Some(Self { width, height })
        } else {
            None
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.height
    }

    /// Canvas pixels per logical unit along x.
    #[must_use]
    pub fn pixels_per_unit_x(self) -> f64 {
        self.width / LOGICAL_WIDTH
    }

    /// Canvas pixels per logical unit along y.
    #[must_use]
    pub fn pixels_per_unit_y(self) -> f64 {
        self.height / LOGICAL_HEIGHT
    }

    /// Convert a canvas pixel point to logical coordinates.
    #[must_use]
    pub fn canvas_to_logical(self, canvas: Point) -> Point {
        let (x, y) = canvas_to_logical(canvas.x, canvas.y, self.width, self.height);
        Point { x, y }
    }

    /// Convert a logical point to canvas pixel coordinates.
    #[must_use]
    pub fn logical_to_canvas(self, logical: Point) -> Point {
        let (x, y) = logical_to_canvas(logical.x, logical.y, self.width, self.height);
        Point { x, y }
    }
}
