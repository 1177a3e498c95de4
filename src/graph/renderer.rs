// src/graph/renderer.rs

use log::debug;
use ndarray::Array1;

use crate::constants::{DISCONTINUITY_FACTOR, PLOT_MARGIN_PX};
use crate::graph::function_strategy::FunctionStrategy;
use crate::graph::viewport::{ScreenMapping, ScreenPoint, Viewport};

/// Straight line between two screen points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: ScreenPoint,
    pub to: ScreenPoint,
}

/// Everything needed to paint one frame of the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub function_name: &'static str,
    pub axes: Vec<Segment>,
    pub curve: Vec<Segment>,
}

impl Scene {
    fn empty(width: u32, height: u32, function_name: &'static str) -> Self {
        Self {
            width,
            height,
            function_name,
            axes: Vec::new(),
            curve: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty() && self.curve.is_empty()
    }

    /// Curve segments joined into continuous runs, split at every discontinuity.
    pub fn curve_polylines(&self) -> Vec<Vec<ScreenPoint>> {
        let mut polylines: Vec<Vec<ScreenPoint>> = Vec::new();
        for segment in &self.curve {
            match polylines.last_mut() {
                Some(run) if run.last() == Some(&segment.from) => run.push(segment.to),
                _ => polylines.push(vec![segment.from, segment.to]),
            }
        }
        polylines
    }
}

/// Samples a function over a fixed viewport and maps it to pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphRenderer {
    viewport: Viewport,
    margin: f64,
}

impl GraphRenderer {
    pub fn new(viewport: Viewport, margin: f64) -> Self {
        Self { viewport, margin }
    }

    pub fn mapping(&self, width: u32, height: u32) -> Option<ScreenMapping> {
        ScreenMapping::new(self.viewport, self.margin, width, height)
    }

    /// Produces the axes and the curve of `function` for a `width` x `height` surface.
    ///
    /// Returns an empty scene when the margin leaves nothing to draw on.
    pub fn render(&self, function: &dyn FunctionStrategy, width: u32, height: u32) -> Scene {
        let Some(mapping) = self.mapping(width, height) else {
            debug!("Surface {width}x{height} has no drawable region, skipping render");
            return Scene::empty(width, height, function.name());
        };

        let mut scene = Scene::empty(width, height, function.name());
        scene.axes = self.axes(&mapping);
        scene.curve = self.curve(&mapping, function);

        debug!(
            "Rendered '{}' at {}x{}: {} axis segments, {} curve segments",
            scene.function_name,
            width,
            height,
            scene.axes.len(),
            scene.curve.len()
        );
        scene
    }

    fn axes(&self, mapping: &ScreenMapping) -> Vec<Segment> {
        let mut axes = Vec::with_capacity(2);

        let x_axis_y = mapping.screen_y(0.0);
        if mapping.contains_screen_y(x_axis_y) {
            axes.push(Segment {
                from: ScreenPoint { x: mapping.left(), y: x_axis_y },
                to: ScreenPoint { x: mapping.right(), y: x_axis_y },
            });
        }

        let y_axis_x = mapping.screen_x(0.0);
        if mapping.contains_screen_x(y_axis_x) {
            axes.push(Segment {
                from: ScreenPoint { x: y_axis_x, y: mapping.top() },
                to: ScreenPoint { x: y_axis_x, y: mapping.bottom() },
            });
        }

        axes
    }

    fn curve(&self, mapping: &ScreenMapping, function: &dyn FunctionStrategy) -> Vec<Segment> {
        // Roughly one sample per horizontal pixel, endpoints included.
        let sample_count = mapping.drawable_width().ceil() as usize + 1;
        let xs = Array1::linspace(self.viewport.min_x, self.viewport.max_x, sample_count);

        let mut segments = Vec::with_capacity(sample_count);
        let mut previous: Option<ScreenPoint> = None;

        for &x in xs.iter() {
            let Some(y) = function.evaluate(x).filter(|&y| self.is_plottable(y)) else {
                previous = None;
                continue;
            };

            let current = mapping.to_screen(x, y);
            if let Some(from) = previous {
                segments.push(Segment { from, to: current });
            }
            previous = Some(current);
        }

        segments
    }

    fn is_plottable(&self, y: f64) -> bool {
        y.is_finite()
            && y.abs() <= DISCONTINUITY_FACTOR * self.viewport.max_y
            && self.viewport.contains_y(y)
    }
}

impl Default for GraphRenderer {
    fn default() -> Self {
        Self::new(Viewport::default(), PLOT_MARGIN_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::function_strategy::{ArctanRatio, ScaledSine};

    struct Constant(f64);

    impl FunctionStrategy for Constant {
        fn name(&self) -> &'static str {
            "constant"
        }

        fn evaluate(&self, _x: f64) -> Option<f64> {
            Some(self.0)
        }
    }

    struct Nowhere;

    impl FunctionStrategy for Nowhere {
        fn name(&self) -> &'static str {
            "nowhere"
        }

        fn evaluate(&self, _x: f64) -> Option<f64> {
            None
        }
    }

    #[test]
    fn test_small_surface_renders_nothing() {
        let renderer = GraphRenderer::default();
        let scene = renderer.render(&ScaledSine, 80, 600);
        assert!(scene.is_empty());
        assert_eq!(scene.function_name, "y = 5 sin(x)");
    }

    #[test]
    fn test_axes_cross_at_origin() {
        let scene = GraphRenderer::default().render(&ScaledSine, 800, 600);
        assert_eq!(scene.axes.len(), 2);
        let x_axis = scene.axes[0];
        let y_axis = scene.axes[1];
        assert_eq!(x_axis.from, ScreenPoint { x: 40.0, y: 300.0 });
        assert_eq!(x_axis.to, ScreenPoint { x: 760.0, y: 300.0 });
        assert_eq!(y_axis.from, ScreenPoint { x: 400.0, y: 40.0 });
        assert_eq!(y_axis.to, ScreenPoint { x: 400.0, y: 560.0 });
    }

    #[test]
    fn test_axes_hidden_when_origin_out_of_view() {
        let renderer = GraphRenderer::new(Viewport::new(1.0..=5.0, 2.0..=6.0), 40.0);
        let scene = renderer.render(&Constant(3.0), 400, 300);
        assert!(scene.axes.is_empty());
        assert!(!scene.curve.is_empty());
    }

    #[test]
    fn test_sine_is_one_continuous_run() {
        let scene = GraphRenderer::default().render(&ScaledSine, 800, 600);
        // 721 samples across a 720 px drawable width
        assert_eq!(scene.curve.len(), 720);
        assert_eq!(scene.curve_polylines().len(), 1);
    }

    #[test]
    fn test_curve_stays_inside_drawable_region() {
        let renderer = GraphRenderer::default();
        let mapping = renderer.mapping(800, 600).unwrap();
        let scene = renderer.render(&ArctanRatio, 800, 600);
        for segment in &scene.curve {
            for p in [segment.from, segment.to] {
                assert!(mapping.contains_screen_x(p.x));
                assert!(mapping.contains_screen_y(p.y));
            }
        }
    }

    #[test]
    fn test_curve_breaks_at_singularity() {
        let renderer = GraphRenderer::default();
        let origin_x = renderer.mapping(800, 600).unwrap().screen_x(0.0);
        let scene = renderer.render(&ArctanRatio, 800, 600);

        assert!(!scene.curve.is_empty());
        for segment in &scene.curve {
            let crosses = segment.from.x < origin_x && segment.to.x > origin_x;
            assert!(!crosses, "segment {segment:?} bridges the singularity");
        }
        assert!(scene.curve_polylines().len() >= 2);
    }

    #[test]
    fn test_out_of_range_values_break_curve() {
        let scene = GraphRenderer::default().render(&Constant(25.0), 800, 600);
        assert!(scene.curve.is_empty());
        assert_eq!(scene.axes.len(), 2);
    }

    #[test]
    fn test_values_beyond_twice_max_y_break_curve() {
        // -25 lies inside [-30, 10] but its magnitude exceeds 2 * max_y = 20.
        let renderer = GraphRenderer::new(Viewport::new(-10.0..=10.0, -30.0..=10.0), 40.0);
        assert!(renderer.render(&Constant(-25.0), 800, 600).curve.is_empty());
        assert_eq!(renderer.render(&Constant(-15.0), 800, 600).curve.len(), 720);
        assert_eq!(renderer.render(&Constant(1.0), 800, 600).curve.len(), 720);
    }

    #[test]
    fn test_undefined_everywhere_draws_only_axes() {
        let scene = GraphRenderer::default().render(&Nowhere, 800, 600);
        assert!(scene.curve.is_empty());
        assert!(!scene.is_empty());
    }

    #[test]
    fn test_segments_are_chained() {
        let scene = GraphRenderer::default().render(&Constant(0.0), 200, 200);
        for pair in scene.curve.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
        // 120 px drawable width, 121 samples
        assert_eq!(scene.curve.len(), 120);
    }
}
