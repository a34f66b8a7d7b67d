//! Shared numeric constants for the scene editor.

// ── Logical space ───────────────────────────────────────────────

/// Horizontal extent of the engine's logical viewport, in logical units.
pub const LOGICAL_WIDTH: f64 = 14.0;

/// Vertical extent of the engine's logical viewport, in logical units.
pub const LOGICAL_HEIGHT: f64 = 8.0;

// ── Render output ───────────────────────────────────────────────

/// Default output video width in pixels.
pub const DEFAULT_RENDER_WIDTH: u32 = 1920;

/// Default output video height in pixels.
pub const DEFAULT_RENDER_HEIGHT: u32 = 1080;

/// Default output frame rate.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Default scene background color.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#000000";

/// Document format version written into scene metadata.
pub const SCENE_FORMAT_VERSION: &str = "1.0.0";

// ── Editor canvas ───────────────────────────────────────────────

/// Largest canvas width in pixels, regardless of container size.
pub const MAX_CANVAS_WIDTH_PX: f64 = 900.0;

/// Largest canvas height in pixels, regardless of container size.
pub const MAX_CANVAS_HEIGHT_PX: f64 = 600.0;

/// Padding subtracted from each container dimension before sizing the canvas.
pub const CONTAINER_PADDING_PX: f64 = 32.0;
