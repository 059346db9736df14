use std::time::Duration;

use bon::Builder;
use iced::Color;

use crate::error::{PlotterError, PlotterResult};
use crate::geometry::WindowSize;
use crate::input::InputPolicy;
use crate::viewport::Steps;

/// Everything tunable about the plotter. All fields have defaults; use
/// [`PlotConfig::builder`] to override some of them.
///
/// ```
/// use iced_plane::config::PlotConfig;
///
/// let config = PlotConfig::builder()
///     .function(f32::cos)
///     .ruler_step(0.5)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Builder)]
pub struct PlotConfig {
    /// The plotted function `y = f(x)` in conceptual space.
    #[builder(default = f32::sin as fn(f32) -> f32)]
    pub function: fn(f32) -> f32,
    /// Conceptual distance between ruler ticks.
    #[builder(default = 0.1)]
    pub ruler_step: f32,
    /// Conceptual distance between curve samples.
    #[builder(default = 0.1)]
    pub sample_resolution: f32,
    /// Offset change per pan action.
    #[builder(default = 0.16)]
    pub offset_step: f32,
    /// Scale change per zoom action.
    #[builder(default = 0.04)]
    pub scale_step: f32,
    /// Zoom out never takes either scale component below this.
    #[builder(default = 0.01)]
    pub scale_floor: f32,
    /// Length of a viewport transition. Zero disables animation.
    #[builder(default = Duration::from_millis(80))]
    pub animation_duration: Duration,
    #[builder(default)]
    pub input_policy: InputPolicy,
    #[builder(default = Color::from_rgb8(234, 234, 234))]
    pub background: Color,
    #[builder(default = Color::from_rgb8(21, 21, 21))]
    pub axis_color: Color,
    #[builder(default = Color::from_rgb8(21, 21, 234))]
    pub curve_color: Color,
    #[builder(default)]
    pub initial_window: WindowSize,
    #[builder(default = String::from("plane"), into)]
    pub title: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PlotConfig {
    pub fn steps(&self) -> Steps {
        Steps {
            offset: self.offset_step,
            scale: self.scale_step,
            scale_floor: self.scale_floor,
        }
    }

    /// Rejects values that would stall the renderer's sampling loops or
    /// break the positive-scale invariant.
    pub fn validate(&self) -> PlotterResult<()> {
        let positive = [
            ("ruler_step", self.ruler_step),
            ("sample_resolution", self.sample_resolution),
            ("scale_floor", self.scale_floor),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(PlotterError::InvalidConfig {
                    field,
                    reason: "must be finite and greater than zero",
                });
            }
        }

        let non_negative = [
            ("offset_step", self.offset_step),
            ("scale_step", self.scale_step),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(PlotterError::InvalidConfig {
                    field,
                    reason: "must be finite and not negative",
                });
            }
        }

        Ok(())
    }
}
