// src/graph/viewport.rs

use std::ops::RangeInclusive;

use crate::constants::{VIEWPORT_MAX_X, VIEWPORT_MAX_Y, VIEWPORT_MIN_X, VIEWPORT_MIN_Y};

/// Visible math-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Viewport {
    /// Both ranges are closed: the bounds themselves are visible.
    pub fn new(x_range: RangeInclusive<f64>, y_range: RangeInclusive<f64>) -> Self {
        Self {
            min_x: *x_range.start(),
            max_x: *x_range.end(),
            min_y: *y_range.start(),
            max_y: *y_range.end(),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.min_y && y <= self.max_y
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(VIEWPORT_MIN_X..=VIEWPORT_MAX_X, VIEWPORT_MIN_Y..=VIEWPORT_MAX_Y)
    }
}

/// A point in pixel space; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// Math-space to pixel-space transform for one surface size.
///
/// Built by [`ScreenMapping::new`] only when the drawable region left inside
/// the margin has positive width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapping {
    viewport: Viewport,
    margin: f64,
    drawable_width: f64,
    drawable_height: f64,
    scale_x: f64,
    scale_y: f64,
}

impl ScreenMapping {
    /// Returns `None` if the margin leaves no drawable pixels or the viewport is degenerate.
    pub fn new(viewport: Viewport, margin: f64, width: u32, height: u32) -> Option<Self> {
        let drawable_width = f64::from(width) - 2.0 * margin;
        let drawable_height = f64::from(height) - 2.0 * margin;
        if drawable_width <= 0.0 || drawable_height <= 0.0 {
            return None;
        }
        if viewport.width() <= 0.0 || viewport.height() <= 0.0 {
            return None;
        }

        Some(Self {
            viewport,
            margin,
            drawable_width,
            drawable_height,
            scale_x: drawable_width / viewport.width(),
            scale_y: drawable_height / viewport.height(),
        })
    }

    pub fn drawable_width(&self) -> f64 {
        self.drawable_width
    }

    pub fn drawable_height(&self) -> f64 {
        self.drawable_height
    }

    pub fn screen_x(&self, x: f64) -> f64 {
        self.margin + (x - self.viewport.min_x) * self.scale_x
    }

    // Vertical flip: math y grows upward, screen y downward.
    pub fn screen_y(&self, y: f64) -> f64 {
        self.margin + self.drawable_height - (y - self.viewport.min_y) * self.scale_y
    }

    pub fn to_screen(&self, x: f64, y: f64) -> ScreenPoint {
        ScreenPoint {
            x: self.screen_x(x),
            y: self.screen_y(y),
        }
    }

    /// Inverse of [`ScreenMapping::to_screen`].
    pub fn to_math(&self, point: ScreenPoint) -> (f64, f64) {
        let x = self.viewport.min_x + (point.x - self.margin) / self.scale_x;
        let y =
            self.viewport.min_y + (self.margin + self.drawable_height - point.y) / self.scale_y;
        (x, y)
    }

    pub fn left(&self) -> f64 {
        self.margin
    }

    pub fn right(&self) -> f64 {
        self.margin + self.drawable_width
    }

    pub fn top(&self) -> f64 {
        self.margin
    }

    pub fn bottom(&self) -> f64 {
        self.margin + self.drawable_height
    }

    pub fn contains_screen_x(&self, sx: f64) -> bool {
        sx >= self.left() && sx <= self.right()
    }

    pub fn contains_screen_y(&self, sy: f64) -> bool {
        sy >= self.top() && sy <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn default_mapping() -> ScreenMapping {
        ScreenMapping::new(Viewport::default(), 40.0, 800, 600).unwrap()
    }

    #[test]
    fn test_origin_maps_to_axis_intersection() {
        // drawable 720x520, scale 36 px/unit horizontally and 13 px/unit vertically
        let p = default_mapping().to_screen(0.0, 0.0);
        assert!((p.x - 400.0).abs() < TOLERANCE);
        assert!((p.y - 300.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_origin_round_trip() {
        let mapping = default_mapping();
        let (x, y) = mapping.to_math(mapping.to_screen(0.0, 0.0));
        assert!(x.abs() < TOLERANCE);
        assert!(y.abs() < TOLERANCE);
    }

    #[test]
    fn test_viewport_corners() {
        let mapping = default_mapping();
        let top_left = mapping.to_screen(-10.0, 20.0);
        let bottom_right = mapping.to_screen(10.0, -20.0);
        assert_eq!(top_left, ScreenPoint { x: 40.0, y: 40.0 });
        assert_eq!(bottom_right, ScreenPoint { x: 760.0, y: 560.0 });
    }

    #[test]
    fn test_no_mapping_without_drawable_region() {
        assert!(ScreenMapping::new(Viewport::default(), 40.0, 80, 600).is_none());
        assert!(ScreenMapping::new(Viewport::default(), 40.0, 800, 79).is_none());
        assert!(ScreenMapping::new(Viewport::default(), 40.0, 0, 0).is_none());
        assert!(ScreenMapping::new(Viewport::default(), 40.0, 81, 81).is_some());
    }

    #[test]
    fn test_viewport_bounds_are_inclusive() {
        let viewport = Viewport::new(-10.0..=10.0, -20.0..=20.0);
        assert_eq!(viewport, Viewport::default());
        assert!(viewport.contains_y(-20.0));
        assert!(viewport.contains_y(20.0));
        assert!(!viewport.contains_y(20.000001));
    }

    #[test]
    fn test_degenerate_viewport() {
        let flat = Viewport::new(-1.0..=1.0, 5.0..=5.0);
        assert!(ScreenMapping::new(flat, 40.0, 800, 600).is_none());
    }
}
