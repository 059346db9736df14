use std::time::{Duration, Instant};

use crate::viewport::Viewport;

/// Ease-out cubic: decelerating to zero velocity.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// The viewport to render `elapsed` into a transition of length `duration`.
///
/// Returns `previous` exactly at zero elapsed time and `target` exactly once
/// `elapsed >= duration`.
pub fn interpolate(
    previous: Viewport,
    target: Viewport,
    elapsed: Duration,
    duration: Duration,
) -> Viewport {
    if elapsed >= duration {
        return target;
    }
    let t = elapsed.as_secs_f32() / duration.as_secs_f32();
    previous.lerp(target, ease_out_cubic(t))
}

/// Whether a transition is in flight, and how far along it is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    /// Linear progress in `[0, 1)`, before easing.
    Animating { progress: f32 },
}

/// Animation state: where the transition started, where it is heading, and
/// when it began.
#[derive(Clone, Debug)]
pub struct ViewportAnimation {
    previous: Viewport,
    target: Viewport,
    started: Option<Instant>,
    duration: Duration,
}

impl ViewportAnimation {
    /// Starts idle, resting on `viewport`.
    pub fn new(viewport: Viewport, duration: Duration) -> Self {
        Self {
            previous: viewport,
            target: viewport,
            started: None,
            duration,
        }
    }

    pub fn phase(&self, now: Instant) -> Phase {
        match self.started {
            Some(started) => {
                let elapsed = now.saturating_duration_since(started);
                if elapsed >= self.duration {
                    Phase::Idle
                } else {
                    Phase::Animating {
                        progress: elapsed.as_secs_f32() / self.duration.as_secs_f32(),
                    }
                }
            }
            None => Phase::Idle,
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        matches!(self.phase(now), Phase::Animating { .. })
    }

    /// The viewport to draw at `now`.
    pub fn sample(&self, now: Instant) -> Viewport {
        match self.started {
            Some(started) => interpolate(
                self.previous,
                self.target,
                now.saturating_duration_since(started),
                self.duration,
            ),
            None => self.target,
        }
    }

    /// Heads for a new target, starting from whatever is rendered at `now`.
    ///
    /// Interrupting an in-flight transition continues from the interpolated
    /// position rather than jumping back to the old start.
    pub fn retarget(&mut self, target: Viewport, now: Instant) {
        self.previous = self.sample(now);
        self.target = target;
        self.started = if self.duration.is_zero() {
            None
        } else {
            Some(now)
        };
    }

    /// Drops back to idle once the transition has finished.
    pub fn settle(&mut self, now: Instant) {
        if self.started.is_some() && self.phase(now) == Phase::Idle {
            self.previous = self.target;
            self.started = None;
        }
    }
}
