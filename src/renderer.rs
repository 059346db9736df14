use iced::Color;

use crate::config::PlotConfig;
use crate::geometry::{Point, Segment, WindowSize};
use crate::ticks::ruler_positions;
use crate::transform::{conceptual_to_pixel, segment_from_normalized, segment_from_pixel};
use crate::viewport::Viewport;

// ================================================================================
// Draw List
// ================================================================================

/// One line draw call, in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawLine {
    pub segment: Segment,
    pub color: Color,
}

/// Conceptual extent of the window along each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleRegion {
    pub x: (f32, f32),
    pub y: (f32, f32),
}

/// Everything drawn in one frame: a clear color, then lines in order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Window size the lines were laid out for.
    pub window: WindowSize,
    pub background: Color,
    /// Axes first (horizontal, vertical), then rulers, then the curve.
    pub lines: Vec<DrawLine>,
    /// `None` when the window had a zero dimension and nothing was drawn.
    pub visible: Option<VisibleRegion>,
    pub curve_segments: usize,
}

impl Scene {
    fn blank(window: WindowSize, background: Color) -> Self {
        Self {
            window,
            background,
            lines: Vec::new(),
            visible: None,
            curve_segments: 0,
        }
    }
}

// ================================================================================
// Free Functions
// ================================================================================

/// Builds the draw list for `viewport` in a window of `window` pixels.
///
/// Pure: neither the viewport nor the window is touched.
pub fn render(viewport: &Viewport, window: WindowSize, config: &PlotConfig) -> Scene {
    if !window.is_drawable() {
        return Scene::blank(window, config.background);
    }
    let (width, height) = window.as_f32();
    let mut lines = Vec::new();

    // Axes through the conceptual origin.
    let origin = conceptual_to_pixel(viewport, Point::ORIGIN, width, height);
    let x_axis = Segment::new(Point::new(0.0, origin.y), Point::new(width, origin.y));
    let y_axis = Segment::new(Point::new(origin.x, 0.0), Point::new(origin.x, height));
    lines.push(DrawLine {
        segment: x_axis,
        color: config.axis_color,
    });
    lines.push(DrawLine {
        segment: y_axis,
        color: config.axis_color,
    });

    let visible = axes_to_conceptual(viewport, x_axis, y_axis, width, height);
    push_rulers(&mut lines, viewport, &visible, width, height, config);
    let curve_segments = push_curve(&mut lines, viewport, &visible, width, height, config);

    Scene {
        window,
        background: config.background,
        lines,
        visible: Some(visible),
        curve_segments,
    }
}

/// The curve only needs sampling over the visible part of the x axis, so the
/// pixel-space axes are walked back into conceptual space to find it.
fn axes_to_conceptual(
    viewport: &Viewport,
    x_axis: Segment,
    y_axis: Segment,
    width: f32,
    height: f32,
) -> VisibleRegion {
    let x_axis_c = segment_from_normalized(viewport, segment_from_pixel(x_axis, width, height));
    let y_axis_c = segment_from_normalized(viewport, segment_from_pixel(y_axis, width, height));
    VisibleRegion {
        x: (x_axis_c.v0.x, x_axis_c.v1.x),
        // The y axis runs top to bottom, so v1 is the low end.
        y: (y_axis_c.v1.y, y_axis_c.v0.y),
    }
}

fn push_rulers(
    lines: &mut Vec<DrawLine>,
    viewport: &Viewport,
    visible: &VisibleRegion,
    width: f32,
    height: f32,
    config: &PlotConfig,
) {
    let ruler_height = height / 150.0;
    let ruler_width = width / 150.0;

    for x in ruler_positions(visible.x.0, visible.x.1, config.ruler_step) {
        let p = conceptual_to_pixel(viewport, Point::new(x, 0.0), width, height);
        lines.push(DrawLine {
            segment: Segment::new(
                Point::new(p.x, p.y - ruler_height),
                Point::new(p.x, p.y + ruler_height),
            ),
            color: config.axis_color,
        });
    }

    for y in ruler_positions(visible.y.0, visible.y.1, config.ruler_step) {
        let p = conceptual_to_pixel(viewport, Point::new(0.0, y), width, height);
        lines.push(DrawLine {
            segment: Segment::new(
                Point::new(p.x - ruler_width, p.y),
                Point::new(p.x + ruler_width, p.y),
            ),
            color: config.axis_color,
        });
    }
}

/// Polyline approximation of the function across the visible x range.
/// Returns the number of segments pushed.
fn push_curve(
    lines: &mut Vec<DrawLine>,
    viewport: &Viewport,
    visible: &VisibleRegion,
    width: f32,
    height: f32,
    config: &PlotConfig,
) -> usize {
    let (x_min, x_max) = visible.x;
    let resolution = config.sample_resolution;
    let span = x_max - x_min;
    if !span.is_finite() || span <= 0.0 || resolution <= 0.0 {
        return 0;
    }

    let segments = (span / resolution).floor() as usize;
    let f = config.function;
    let to_px = |x: f32| conceptual_to_pixel(viewport, Point::new(x, f(x)), width, height);

    let mut prev = to_px(x_min);
    for i in 1..=segments {
        let next = to_px(x_min + i as f32 * resolution);
        lines.push(DrawLine {
            segment: Segment::new(prev, next),
            color: config.curve_color,
        });
        prev = next;
    }
    segments
}
