// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE, GREY, RED};
use plotters::style::RGBColor;

// Draw surface dimensions.
pub const PLOT_WIDTH: u32 = 800;
pub const PLOT_HEIGHT: u32 = 600;
// Largest surface edge accepted from the command line.
pub const MAX_SURFACE_PX: u32 = 16_384;

// Pixels reserved on every side of the drawable region.
pub const PLOT_MARGIN_PX: f64 = 40.0;

// Visible math-space rectangle.
pub const VIEWPORT_MIN_X: f64 = -10.0;
pub const VIEWPORT_MAX_X: f64 = 10.0;
pub const VIEWPORT_MIN_Y: f64 = -20.0;
pub const VIEWPORT_MAX_Y: f64 = 20.0;

// Values whose magnitude exceeds this multiple of max_y break the curve.
pub const DISCONTINUITY_FACTOR: f64 = 2.0;

// |x| below this is treated as the removable singularity of (3x + 1) / atan(x).
pub const ARCTAN_SINGULARITY_EPSILON: f64 = 1e-4;

// Amplitude of the reference sine function.
pub const SINE_AMPLITUDE: f64 = 5.0;

// --- Plot Color Assignments ---
pub const COLOR_CURVE: &RGBColor = &BLUE;
pub const COLOR_AXES: &RGBColor = &GREY;
pub const COLOR_MESSAGE: &RGBColor = &RED;

// Stroke widths for lines
pub const LINE_WIDTH_CURVE: u32 = 2;
pub const LINE_WIDTH_AXES: u32 = 1;

// Font sizes
pub const FONT_SIZE_CHART_TITLE: i32 = 18;
pub const FONT_SIZE_MESSAGE: i32 = 16;

// Console table widths, Standard layout (title, author, year, price).
pub const TABLE_WIDTHS_STANDARD: [usize; 4] = [20, 18, 6, 10];
// Console table widths, Wide layout.
pub const TABLE_WIDTHS_WIDE: [usize; 4] = [32, 24, 8, 12];

// src/constants.rs
