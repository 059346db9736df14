use crate::geometry::WindowSize;
use crate::renderer::Scene;
use iced::widget::canvas;
use iced::{Point, Rectangle, Renderer, Size, Theme, Vector, mouse};
use tracing::trace;

/// Line width of every stroke, in pixels.
const STROKE_WIDTH: f32 = 1.0;

/// Canvas program that replays a [`Scene`]: clear, then one stroke per line.
#[derive(Debug)]
pub struct SceneCanvas {
    pub scene: Scene,
}

impl<Message> canvas::Program<Message> for SceneCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.scene.background);

        // The plotter picks up a resize on its next frame; until then the
        // scene is stretched over the canvas.
        if let Some(scale) = stretch(self.scene.window, bounds.size()) {
            trace!(?scale, window = ?self.scene.window, "stale scene size");
            frame.scale_nonuniform(scale);
        }

        for line in &self.scene.lines {
            let path = canvas::Path::line(line.segment.v0.into(), line.segment.v1.into());
            frame.stroke(
                &path,
                canvas::Stroke::default()
                    .with_color(line.color)
                    .with_width(STROKE_WIDTH),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Scale mapping a scene laid out for `window` onto `bounds`, or `None`
/// when the two already agree.
fn stretch(window: WindowSize, bounds: Size) -> Option<Vector> {
    if !window.is_drawable() || WindowSize::from_logical(bounds) == window {
        return None;
    }
    let (width, height) = window.as_f32();
    Some(Vector::new(bounds.width / width, bounds.height / height))
}
