use std::env;
use std::process::ExitCode;

use iced_plane::{PlotConfig, app};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // when using the default wgpu backend, artifacts from the canvas are left
    // behind when resizing quickly.
    if env::var_os("ICED_BACKEND").is_none() {
        // SAFETY: no other threads exist yet.
        unsafe {
            env::set_var("ICED_BACKEND", "tiny_skia");
        }
    }

    match app::run(PlotConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
