// ================================================================================
// Error Type
// ================================================================================

/// Errors that stop the plotter before or while starting its window.
#[derive(Debug)]
pub enum PlotterError {
    /// A configuration value is out of range.
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    /// The window or renderer could not be initialised.
    Window(iced::Error),
}

pub type PlotterResult<T> = Result<T, PlotterError>;

impl std::fmt::Display for PlotterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotterError::InvalidConfig { field, reason } => {
                write!(f, "invalid configuration: `{field}` {reason}")
            }
            PlotterError::Window(e) => write!(f, "failed to initialise window: {e}"),
        }
    }
}

impl std::error::Error for PlotterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotterError::Window(e) => Some(e),
            PlotterError::InvalidConfig { .. } => None,
        }
    }
}

impl From<iced::Error> for PlotterError {
    fn from(e: iced::Error) -> Self {
        PlotterError::Window(e)
    }
}
