//! Animated pan/zoom plotter for a single function `y = f(x)`.
//!
//! The core is windowing-agnostic: [`transform`] maps between conceptual,
//! normalized device and pixel space, [`plotter::Plotter`] steps the viewport
//! state machine one frame at a time, and [`renderer::render`] turns the
//! rendered viewport into a list of line draw calls. [`app`] and [`canvas`]
//! run all of that on iced.

pub mod animation;
pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod plotter;
pub mod renderer;
pub mod ticks;
pub mod transform;
pub mod viewport;

pub use config::PlotConfig;
pub use error::{PlotterError, PlotterResult};
