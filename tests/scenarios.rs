use std::time::{Duration, Instant};

use iced_plane::PlotConfig;
use iced_plane::geometry::{Point, Segment, WindowSize};
use iced_plane::input::{InputEvent, Key};
use iced_plane::plotter::{FrameOutcome, Plotter};
use iced_plane::renderer::render;
use iced_plane::viewport::Viewport;
use proptest::prelude::*;

const DURATION: Duration = Duration::from_millis(80);

fn default_viewport_at(offset_x: f32) -> Viewport {
    Viewport::new(Point::new(offset_x, 0.0), Point::new(1.0, 1.0))
}

#[test]
fn pan_right_animates_from_old_to_new() {
    let t0 = Instant::now();
    let mut plotter = Plotter::new(PlotConfig::default());

    let outcome = plotter.frame(t0, [InputEvent::KeyDown(Key::Right)]);
    assert_eq!(plotter.viewport(), default_viewport_at(0.16));
    assert_eq!(outcome, FrameOutcome::Draw(default_viewport_at(0.0)));

    let mid = plotter.frame(t0 + Duration::from_millis(40), []);
    let FrameOutcome::Draw(mid) = mid else {
        panic!("unexpected quit");
    };
    assert!(mid.offset.x > 0.0 && mid.offset.x < 0.16);

    let end = plotter.frame(t0 + DURATION, []);
    assert_eq!(end, FrameOutcome::Draw(default_viewport_at(0.16)));
    let later = plotter.frame(t0 + Duration::from_secs(1), []);
    assert_eq!(later, FrameOutcome::Draw(default_viewport_at(0.16)));
}

#[test]
fn default_viewport_visible_range_is_unit() {
    let scene = render(
        &Viewport::default(),
        WindowSize::new(1200, 800),
        &PlotConfig::default(),
    );
    let visible = scene.visible.expect("window is drawable");
    assert_eq!(visible.x, (-1.0, 1.0));
}

#[test]
fn resize_recomputes_axes_next_frame() {
    let t0 = Instant::now();
    let mut plotter = Plotter::new(PlotConfig::default());
    plotter.frame(t0, []);
    let before = plotter.scene();
    assert_eq!(
        before.lines[0].segment,
        Segment::new(Point::new(0.0, 400.0), Point::new(1200.0, 400.0))
    );

    plotter.frame(
        t0 + Duration::from_millis(16),
        [InputEvent::Resize {
            width: 800,
            height: 600,
        }],
    );
    let after = plotter.scene();
    assert_eq!(
        after.lines[0].segment,
        Segment::new(Point::new(0.0, 300.0), Point::new(800.0, 300.0))
    );
    assert_eq!(
        after.lines[1].segment,
        Segment::new(Point::new(400.0, 0.0), Point::new(400.0, 600.0))
    );
}

#[test]
fn ten_zoom_outs_reach_point_six() {
    let config = PlotConfig::builder()
        .animation_duration(Duration::ZERO)
        .build();
    let t0 = Instant::now();
    let mut plotter = Plotter::new(config);
    for i in 0..10 {
        plotter.frame(
            t0 + Duration::from_millis(i),
            [
                InputEvent::KeyDown(Key::Shift),
                InputEvent::KeyDown(Key::Down),
                InputEvent::KeyUp(Key::Shift),
            ],
        );
    }
    assert!((plotter.viewport().scale.y - 0.6).abs() < 1e-5);
}

#[test]
fn reset_when_at_default_does_not_animate() {
    let t0 = Instant::now();
    let mut plotter = Plotter::new(PlotConfig::default());
    let outcome = plotter.frame(t0, [InputEvent::KeyDown(Key::Reset)]);
    assert_eq!(outcome, FrameOutcome::Draw(Viewport::default()));
    assert!(!plotter.is_animating(t0));
}

#[test]
fn window_close_quits_without_drawing() {
    let mut plotter = Plotter::new(PlotConfig::default());
    assert_eq!(
        plotter.frame(Instant::now(), [InputEvent::Quit]),
        FrameOutcome::Quit
    );
}

proptest! {
    #[test]
    fn zoom_out_never_crosses_the_floor(presses in 1usize..200, vertical in any::<bool>()) {
        let config = PlotConfig::builder()
            .animation_duration(Duration::ZERO)
            .build();
        let key = if vertical { Key::Down } else { Key::Left };
        let t0 = Instant::now();
        let mut plotter = Plotter::new(config);
        plotter.frame(t0, [InputEvent::KeyDown(Key::Shift)]);
        for _ in 0..presses {
            plotter.frame(t0, [InputEvent::KeyDown(key)]);
        }
        let scale = plotter.viewport().scale;
        prop_assert!(scale.x >= 0.01 && scale.y >= 0.01);
    }

    #[test]
    fn animation_converges_exactly(
        presses in proptest::collection::vec(0u8..5, 1..8),
        shift in any::<bool>(),
    ) {
        let t0 = Instant::now();
        let mut plotter = Plotter::new(PlotConfig::default());
        let before = plotter.viewport();
        let mut events = Vec::new();
        if shift {
            events.push(InputEvent::KeyDown(Key::Shift));
        }
        events.extend(presses.iter().map(|p| {
            InputEvent::KeyDown(match *p {
                0 => Key::Up,
                1 => Key::Down,
                2 => Key::Left,
                3 => Key::Right,
                _ => Key::Reset,
            })
        }));

        let start = plotter.frame(t0, events);
        prop_assert_eq!(start, FrameOutcome::Draw(before));
        let end = plotter.frame(t0 + DURATION, []);
        prop_assert_eq!(end, FrameOutcome::Draw(plotter.viewport()));
    }
}
