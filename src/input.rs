/// Key codes the plotter distinguishes. Everything else is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Shift,
    /// `R`
    Reset,
    /// `Escape`
    Escape,
    Other,
}

/// Events produced by the windowing collaborator, drained once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    Resize { width: u32, height: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A logical action, independent of the key that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Pan(Direction),
    Zoom(Direction),
    Reset,
    Quit,
}

impl Action {
    /// Whether applying this action can change the logical viewport.
    pub fn is_viewport_change(self) -> bool {
        !matches!(self, Action::Quit)
    }
}

/// What to do with viewport actions that arrive while an animation is
/// in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputPolicy {
    /// Read and discard them. Holding a key down then steps once per
    /// animation instead of once per key repeat.
    #[default]
    DropWhileAnimating,
    /// Apply them immediately and re-anchor the animation.
    Accept,
}

/// Modifier state carried across frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct Controls {
    shift_down: bool,
}

impl Controls {
    /// Updates modifier state and maps a key event to an action.
    ///
    /// Resize events carry no action; the caller handles them directly.
    pub fn action_for(&mut self, event: InputEvent) -> Option<Action> {
        match event {
            InputEvent::Quit => Some(Action::Quit),
            InputEvent::KeyUp(Key::Shift) => {
                self.shift_down = false;
                None
            }
            InputEvent::KeyUp(_) | InputEvent::Resize { .. } => None,
            InputEvent::KeyDown(key) => {
                let direction = match key {
                    Key::Shift => {
                        self.shift_down = true;
                        return None;
                    }
                    Key::Reset => return Some(Action::Reset),
                    Key::Escape => return Some(Action::Quit),
                    Key::Other => return None,
                    Key::Up => Direction::Up,
                    Key::Down => Direction::Down,
                    Key::Left => Direction::Left,
                    Key::Right => Direction::Right,
                };
                if self.shift_down {
                    Some(Action::Zoom(direction))
                } else {
                    Some(Action::Pan(direction))
                }
            }
        }
    }
}
