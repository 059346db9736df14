use std::time::Instant;

use tracing::{debug, trace};

use crate::animation::ViewportAnimation;
use crate::config::PlotConfig;
use crate::geometry::WindowSize;
use crate::input::{Action, Controls, InputEvent, InputPolicy};
use crate::renderer::{Scene, render};
use crate::viewport::Viewport;

// ================================================================================
// Utility Types
// ================================================================================

/// Result of stepping one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    /// Draw this viewport.
    Draw(Viewport),
    /// A quit action was seen; nothing more is drawn.
    Quit,
}

// ================================================================================
// Plotter
// ================================================================================

/// Application state owned by the main loop: window size, logical viewport,
/// animation, and modifier state.
///
/// Each call to [`Plotter::frame`] performs one loop iteration in a fixed
/// order: sample the animation, drain the input batch, detect a viewport
/// change (re-anchoring the animation if there was one).
#[derive(Debug)]
pub struct Plotter {
    config: PlotConfig,
    window: WindowSize,
    viewport: Viewport,
    animation: ViewportAnimation,
    controls: Controls,
    rendered: Viewport,
}

// ================================================================================
// Public Methods
// ================================================================================

impl Plotter {
    pub fn new(config: PlotConfig) -> Self {
        let viewport = Viewport::default();
        Self {
            window: config.initial_window,
            animation: ViewportAnimation::new(viewport, config.animation_duration),
            viewport,
            controls: Controls::default(),
            rendered: viewport,
            config,
        }
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn window(&self) -> WindowSize {
        self.window
    }

    /// The logical (target) viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The viewport chosen for drawing by the last frame.
    pub fn rendered(&self) -> Viewport {
        self.rendered
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation.is_animating(now)
    }

    /// Runs one frame over the events collected since the previous one.
    pub fn frame(
        &mut self,
        now: Instant,
        events: impl IntoIterator<Item = InputEvent>,
    ) -> FrameOutcome {
        let animating = self.animation.is_animating(now);
        self.animation.settle(now);
        self.rendered = self.animation.sample(now);

        let before = self.viewport;
        for event in events {
            if let InputEvent::Resize { width, height } = event {
                self.window = WindowSize::new(width, height);
                trace!(width, height, "window resized");
                continue;
            }
            let Some(action) = self.controls.action_for(event) else {
                continue;
            };
            match action {
                Action::Quit => {
                    debug!("quit requested");
                    return FrameOutcome::Quit;
                }
                _ if action.is_viewport_change() && animating && self.drops_input() => {
                    trace!(?action, "dropped while animating");
                }
                _ => self.viewport.apply(action, self.config.steps()),
            }
        }

        if self.viewport != before {
            self.animation.retarget(self.viewport, now);
            self.rendered = self.animation.sample(now);
            debug!(
                offset_x = self.viewport.offset.x,
                offset_y = self.viewport.offset.y,
                scale_x = self.viewport.scale.x,
                scale_y = self.viewport.scale.y,
                "viewport changed"
            );
            let target = self.target_scene();
            if let Some(visible) = target.visible {
                debug!(
                    x = ?visible.x,
                    y = ?visible.y,
                    curve_segments = target.curve_segments,
                    "visible range at target"
                );
            }
        }

        FrameOutcome::Draw(self.rendered)
    }

    /// Draw list for the viewport chosen by the last frame.
    pub fn scene(&self) -> Scene {
        render(&self.rendered, self.window, &self.config)
    }
}

// ================================================================================
// Private Methods
// ================================================================================

impl Plotter {
    fn drops_input(&self) -> bool {
        self.config.input_policy == InputPolicy::DropWhileAnimating
    }

    /// Draw list for the logical viewport, where a transition will end up.
    fn target_scene(&self) -> Scene {
        render(&self.viewport, self.window, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::geometry::Point;
    use crate::input::Key;

    fn shift_left() -> [InputEvent; 3] {
        [
            InputEvent::KeyDown(Key::Shift),
            InputEvent::KeyDown(Key::Left),
            InputEvent::KeyUp(Key::Shift),
        ]
    }

    #[test]
    fn idle_frame_draws_logical_viewport() {
        let mut plotter = Plotter::new(PlotConfig::default());
        let outcome = plotter.frame(Instant::now(), []);
        assert_eq!(outcome, FrameOutcome::Draw(Viewport::default()));
    }

    #[test]
    fn quit_stops_the_batch() {
        let mut plotter = Plotter::new(PlotConfig::default());
        let outcome = plotter.frame(
            Instant::now(),
            [
                InputEvent::KeyDown(Key::Escape),
                InputEvent::KeyDown(Key::Right),
            ],
        );
        assert_eq!(outcome, FrameOutcome::Quit);
        assert_eq!(plotter.viewport(), Viewport::default());
    }

    #[test]
    fn shift_arrow_zooms() {
        let mut plotter = Plotter::new(PlotConfig::default());
        plotter.frame(Instant::now(), shift_left());
        assert!((plotter.viewport().scale.x - 0.96).abs() < 1e-6);
        assert_eq!(plotter.viewport().offset, Point::ORIGIN);
    }

    #[test]
    fn drop_policy_ignores_input_mid_animation() {
        let t0 = Instant::now();
        let mut plotter = Plotter::new(PlotConfig::default());
        plotter.frame(t0, [InputEvent::KeyDown(Key::Right)]);

        let t1 = t0 + Duration::from_millis(20);
        plotter.frame(t1, [InputEvent::KeyDown(Key::Right)]);
        assert_eq!(plotter.viewport().offset, Point::new(0.16, 0.0));
    }

    #[test]
    fn drop_policy_still_quits_mid_animation() {
        let t0 = Instant::now();
        let mut plotter = Plotter::new(PlotConfig::default());
        plotter.frame(t0, [InputEvent::KeyDown(Key::Right)]);

        let t1 = t0 + Duration::from_millis(20);
        assert!(plotter.is_animating(t1));
        assert_eq!(plotter.frame(t1, [InputEvent::Quit]), FrameOutcome::Quit);

        let mut plotter = Plotter::new(PlotConfig::default());
        plotter.frame(t0, [InputEvent::KeyDown(Key::Right)]);
        assert_eq!(
            plotter.frame(t1, [InputEvent::KeyDown(Key::Escape)]),
            FrameOutcome::Quit
        );
    }

    #[test]
    fn target_scene_follows_the_logical_viewport() {
        let t0 = Instant::now();
        let mut plotter = Plotter::new(PlotConfig::default());
        plotter.frame(t0, [InputEvent::KeyDown(Key::Right)]);

        let target = plotter.target_scene();
        let (x_min, x_max) = target.visible.unwrap().x;
        assert!((x_min - -0.84).abs() < 1e-5);
        assert!((x_max - 1.16).abs() < 1e-5);
        let expected = ((x_max - x_min) / plotter.config().sample_resolution).floor() as usize;
        assert!(target.curve_segments > 0);
        assert_eq!(target.curve_segments, expected);

        // Still drawing the start of the transition.
        assert_eq!(plotter.scene().visible.unwrap().x, (-1.0, 1.0));
    }

    #[test]
    fn drop_policy_still_tracks_resize_and_shift() {
        let t0 = Instant::now();
        let mut plotter = Plotter::new(PlotConfig::default());
        plotter.frame(t0, [InputEvent::KeyDown(Key::Right)]);

        let t1 = t0 + Duration::from_millis(20);
        plotter.frame(
            t1,
            [
                InputEvent::Resize {
                    width: 640,
                    height: 480,
                },
                InputEvent::KeyDown(Key::Shift),
            ],
        );
        assert_eq!(plotter.window(), WindowSize::new(640, 480));

        let t2 = t0 + Duration::from_millis(200);
        plotter.frame(t2, [InputEvent::KeyDown(Key::Up)]);
        assert!((plotter.viewport().scale.y - 1.04).abs() < 1e-6);
    }

    #[test]
    fn accept_policy_reanchors_mid_animation() {
        let config = PlotConfig::builder()
            .input_policy(InputPolicy::Accept)
            .build();
        let t0 = Instant::now();
        let mut plotter = Plotter::new(config);
        plotter.frame(t0, [InputEvent::KeyDown(Key::Right)]);

        let t1 = t0 + Duration::from_millis(40);
        let mid = plotter.animation.sample(t1);
        let outcome = plotter.frame(t1, [InputEvent::KeyDown(Key::Right)]);

        assert!((plotter.viewport().offset.x - 0.32).abs() < 1e-6);
        assert_eq!(outcome, FrameOutcome::Draw(mid));
        assert!(plotter.is_animating(t1));
    }

    #[test]
    fn reset_at_default_is_a_no_op() {
        let t0 = Instant::now();
        let mut plotter = Plotter::new(PlotConfig::default());
        plotter.frame(t0, [InputEvent::KeyDown(Key::Reset)]);
        assert_eq!(plotter.viewport(), Viewport::default());
        assert!(!plotter.is_animating(t0));
    }

    #[test]
    fn reset_animates_back_to_default() {
        let t0 = Instant::now();
        let mut plotter = Plotter::new(PlotConfig::default());
        plotter.frame(t0, [InputEvent::KeyDown(Key::Up)]);

        let t1 = t0 + Duration::from_millis(100);
        let outcome = plotter.frame(t1, [InputEvent::KeyDown(Key::Reset)]);
        assert_eq!(
            outcome,
            FrameOutcome::Draw(Viewport::new(Point::new(0.0, 0.16), Point::new(1.0, 1.0)))
        );
        assert!(plotter.is_animating(t1));

        let t2 = t1 + Duration::from_millis(80);
        assert_eq!(plotter.frame(t2, []), FrameOutcome::Draw(Viewport::default()));
    }

    #[test]
    fn disabled_animation_tracks_logical_viewport() {
        let config = PlotConfig::builder()
            .animation_duration(Duration::ZERO)
            .build();
        let t0 = Instant::now();
        let mut plotter = Plotter::new(config);
        let outcome = plotter.frame(t0, [InputEvent::KeyDown(Key::Right)]);
        assert_eq!(outcome, FrameOutcome::Draw(plotter.viewport()));
        assert!(!plotter.is_animating(t0));
    }

    #[test]
    fn zero_sized_window_renders_blank_scene() {
        let mut plotter = Plotter::new(PlotConfig::default());
        plotter.frame(
            Instant::now(),
            [InputEvent::Resize {
                width: 0,
                height: 0,
            }],
        );
        assert!(plotter.scene().lines.is_empty());
    }
}
