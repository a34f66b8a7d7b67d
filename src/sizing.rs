//! Canvas sizing: fit the editor canvas into its container at a fixed aspect ratio.

#[cfg(test)]
#[path = "sizing_test.rs"]
mod sizing_test;

use crate::config::EditorConfig;
use crate::consts::{MAX_CANVAS_HEIGHT_PX, MAX_CANVAS_WIDTH_PX};
use crate::scene::SceneSettings;
use crate::transform::CanvasSize;

/// Aspect ratio and absolute caps used to size the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingPolicy {
    /// Target width / height ratio, taken from the render settings.
    pub aspect_ratio: f64,
    /// Largest canvas width in pixels.
    pub max_width: f64,
    /// Largest canvas height in pixels.
    pub max_height: f64,
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self::for_settings(&SceneSettings::default(), &EditorConfig::default())
    }
}

impl SizingPolicy {
    /// Policy with the default caps and an explicit aspect ratio.
    #[must_use]
    pub fn with_aspect_ratio(aspect_ratio: f64) -> Self {
        Self { aspect_ratio, max_width: MAX_CANVAS_WIDTH_PX, max_height: MAX_CANVAS_HEIGHT_PX }
    }

    /// Policy matching the render aspect of `settings` and the caps in `config`.
    #[must_use]
    pub fn for_settings(settings: &SceneSettings, config: &EditorConfig) -> Self {
        Self {
            aspect_ratio: settings.aspect_ratio(),
            max_width: config.max_canvas_width,
            max_height: config.max_canvas_height,
        }
    }

    /// Compute the canvas pixel size for a container, already net of padding.
    ///
    /// The result never exceeds the container or the caps and always has the
    /// policy's aspect ratio. Negative container dimensions count as zero.
    #[must_use]
    pub fn fit(&self, container_width: f64, container_height: f64) -> (f64, f64) {
        let max_w = container_width.max(0.0).min(self.max_width);
        let max_h = container_height.max(0.0).min(self.max_height);

        let mut width = max_w;
        let mut height = width / self.aspect_ratio;
        if height > max_h {
            height = max_h;
            width = height * self.aspect_ratio;
        }
        (width, height)
    }

    /// Like [`fit`](Self::fit), but `None` when the result has no area.
    #[must_use]
    pub fn canvas_size(&self, container_width: f64, container_height: f64) -> Option<CanvasSize> {
        let (width, height) = self.fit(container_width, container_height);
        CanvasSize::new(width, height)
    }
}
