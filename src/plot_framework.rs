// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Text};
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, IntoFont};

use log::{info, warn};
use std::error::Error;
use std::path::Path;

use crate::constants::{COLOR_AXES, COLOR_CURVE, COLOR_MESSAGE, LINE_WIDTH_AXES, LINE_WIDTH_CURVE};
use crate::font_config::{FONT_TUPLE_CHART_TITLE, FONT_TUPLE_MESSAGE};
use crate::graph::renderer::Scene;
use crate::graph::viewport::ScreenPoint;

fn to_pixel(point: ScreenPoint) -> (i32, i32) {
    (point.x.round() as i32, point.y.round() as i32)
}

/// Draw a "Graph Unavailable" message on a plot area.
pub fn draw_unavailable_message<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    function_name: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    // Approximate character width relative to font size
    const CHAR_WIDTH_RATIO: f32 = 0.6;

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (x_range.end - x_range.start, y_range.end - y_range.start);
    let message = format!("{function_name} Graph Unavailable: {reason}");

    let estimated_char_width = (FONT_TUPLE_MESSAGE.1 as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_text_width = (message.len() as i32).saturating_mul(estimated_char_width);
    let center_x = (width / 2 - estimated_text_width / 2).max(0);
    let center_y = height / 2 - FONT_TUPLE_MESSAGE.1 / 2;

    let text_style = FONT_TUPLE_MESSAGE.into_font().color(COLOR_MESSAGE);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

/// Paints the axes and curve of a scene. No text is drawn.
pub fn draw_scene_paths<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    scene: &Scene,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let axis_style = COLOR_AXES.stroke_width(LINE_WIDTH_AXES);
    for axis in &scene.axes {
        area.draw(&PathElement::new(
            vec![to_pixel(axis.from), to_pixel(axis.to)],
            axis_style,
        ))?;
    }

    let curve_style = COLOR_CURVE.stroke_width(LINE_WIDTH_CURVE);
    for run in scene.curve_polylines() {
        let points: Vec<(i32, i32)> = run.into_iter().map(to_pixel).collect();
        area.draw(&PathElement::new(points, curve_style))?;
    }
    Ok(())
}

/// Paints a full frame: background, caption, axes and curve.
pub fn draw_scene_on<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    scene: &Scene,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    area.fill(&WHITE)?;
    area.draw(&Text::new(
        scene.function_name,
        (10, 10),
        FONT_TUPLE_CHART_TITLE.into_font().color(&BLACK),
    ))?;

    if scene.is_empty() {
        return draw_unavailable_message(area, scene.function_name, "window too small");
    }
    draw_scene_paths(area, scene)
}

/// Renders a scene into a PNG file sized to the scene's surface.
///
/// The bitmap backend lives only for the duration of this call.
pub fn draw_scene_to_file(output_path: &Path, scene: &Scene) -> Result<(), Box<dyn Error>> {
    if scene.width == 0 || scene.height == 0 {
        warn!(
            "Skipping '{}': surface {}x{} has no pixels",
            output_path.display(),
            scene.width,
            scene.height
        );
        return Ok(());
    }

    let root_area =
        BitMapBackend::new(output_path, (scene.width, scene.height)).into_drawing_area();
    draw_scene_on(&root_area, scene)?;
    root_area.present()?;
    info!("Graph saved as '{}'.", output_path.display());
    Ok(())
}
