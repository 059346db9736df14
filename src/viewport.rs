use crate::geometry::Point;
use crate::input::{Action, Direction};

/// Offset and per-axis scale of the plane transform.
///
/// A conceptual point `c` maps to normalized device space as
/// `c * scale - offset`. Both scale components stay strictly positive: zoom
/// out is clamped to a floor when applied through [`Viewport::apply`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub offset: Point,
    pub scale: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: Point::ORIGIN,
            scale: Point::new(1.0, 1.0),
        }
    }
}

/// Step sizes used when applying an [`Action`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Steps {
    pub offset: f32,
    pub scale: f32,
    pub scale_floor: f32,
}

impl Viewport {
    pub const fn new(offset: Point, scale: Point) -> Self {
        Self { offset, scale }
    }

    /// Interpolates offset and scale independently.
    pub fn lerp(self, other: Viewport, t: f32) -> Viewport {
        Viewport {
            offset: self.offset.lerp(other.offset, t),
            scale: self.scale.lerp(other.scale, t),
        }
    }

    /// Applies a viewport-changing action. `Quit` is a no-op here.
    pub fn apply(&mut self, action: Action, steps: Steps) {
        match action {
            Action::Pan(direction) => match direction {
                Direction::Up => self.offset.y += steps.offset,
                Direction::Down => self.offset.y -= steps.offset,
                Direction::Right => self.offset.x += steps.offset,
                Direction::Left => self.offset.x -= steps.offset,
            },
            Action::Zoom(direction) => match direction {
                Direction::Up => self.scale.y += steps.scale,
                Direction::Down => {
                    self.scale.y = (self.scale.y - steps.scale).max(steps.scale_floor);
                }
                Direction::Right => self.scale.x += steps.scale,
                Direction::Left => {
                    self.scale.x = (self.scale.x - steps.scale).max(steps.scale_floor);
                }
            },
            Action::Reset => *self = Viewport::default(),
            Action::Quit => {}
        }
    }

    pub fn has_positive_scale(&self) -> bool {
        self.scale.x > 0.0 && self.scale.y > 0.0
    }
}
