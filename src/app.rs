use std::mem;
use std::time::Instant;

use iced::keyboard::{self, key::Named};
use iced::widget::canvas;
use iced::{Element, Event, Length, Subscription, Task, event, window};
use tracing::{info, trace};

use crate::canvas::SceneCanvas;
use crate::config::PlotConfig;
use crate::error::PlotterResult;
use crate::geometry::WindowSize;
use crate::input::{InputEvent, Key};
use crate::plotter::{FrameOutcome, Plotter};

#[derive(Debug, Clone)]
pub enum Message {
    /// An input event, queued until the next frame.
    Input(InputEvent),
    /// A display frame is due.
    Frame(Instant),
}

/// Wraps the [`Plotter`] state machine for the iced runtime.
///
/// Input messages are only queued; the queue is drained as one batch on the
/// next frame tick, so a frame always sees every event since the previous
/// one. Frame ticks are only subscribed to while there is queued input or a
/// transition in flight.
#[derive(Debug)]
pub struct PlotterApp {
    plotter: Plotter,
    pending: Vec<InputEvent>,
    animating: bool,
}

impl PlotterApp {
    pub fn new(config: PlotConfig) -> Self {
        Self {
            plotter: Plotter::new(config),
            pending: Vec::new(),
            animating: false,
        }
    }

    pub fn plotter(&self) -> &Plotter {
        &self.plotter
    }

    pub fn title(&self) -> String {
        self.plotter.config().title.clone()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Input(event) => {
                self.pending.push(event);
                Task::none()
            }
            Message::Frame(now) => {
                let events = mem::take(&mut self.pending);
                match self.plotter.frame(now, events) {
                    FrameOutcome::Quit => {
                        info!("quitting");
                        iced::exit()
                    }
                    FrameOutcome::Draw(viewport) => {
                        self.animating = self.plotter.is_animating(now);
                        trace!(?viewport, animating = self.animating, "frame");
                        Task::none()
                    }
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        canvas(SceneCanvas {
            scene: self.plotter.scene(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let input = event::listen_with(translate_event);
        if self.wants_frames() {
            Subscription::batch([input, window::frames().map(Message::Frame)])
        } else {
            input
        }
    }

    /// Whether a frame tick is needed before the app goes quiet again.
    pub fn wants_frames(&self) -> bool {
        self.animating || !self.pending.is_empty()
    }
}

// ================================================================================
// Event translation
// ================================================================================

fn translate_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    let input = match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            InputEvent::KeyDown(key_code(&key))
        }
        Event::Keyboard(keyboard::Event::KeyReleased { key, .. }) => {
            InputEvent::KeyUp(key_code(&key))
        }
        Event::Window(window::Event::Resized(size)) => {
            let size = WindowSize::from_logical(size);
            InputEvent::Resize {
                width: size.width,
                height: size.height,
            }
        }
        Event::Window(window::Event::CloseRequested) => InputEvent::Quit,
        _ => return None,
    };
    Some(Message::Input(input))
}

fn key_code(key: &keyboard::Key) -> Key {
    match key.as_ref() {
        keyboard::Key::Named(Named::ArrowUp) => Key::Up,
        keyboard::Key::Named(Named::ArrowDown) => Key::Down,
        keyboard::Key::Named(Named::ArrowLeft) => Key::Left,
        keyboard::Key::Named(Named::ArrowRight) => Key::Right,
        keyboard::Key::Named(Named::Shift) => Key::Shift,
        keyboard::Key::Named(Named::Escape) => Key::Escape,
        keyboard::Key::Character("r" | "R") => Key::Reset,
        _ => Key::Other,
    }
}

// ================================================================================
// Entry point
// ================================================================================

/// Validates `config`, opens the window and runs until quit.
pub fn run(config: PlotConfig) -> PlotterResult<()> {
    config.validate()?;

    let window = config.initial_window;
    info!(
        width = window.width,
        height = window.height,
        policy = ?config.input_policy,
        "starting plotter"
    );

    iced::application(
        move || PlotterApp::new(config.clone()),
        PlotterApp::update,
        PlotterApp::view,
    )
    .title(PlotterApp::title)
    .subscription(PlotterApp::subscription)
    .window_size(iced::Size::from(window))
    .resizable(true)
    .run()?;

    info!("plotter closed");
    Ok(())
}
