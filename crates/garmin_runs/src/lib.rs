//! Pace charts and GPS track export for recent Garmin Connect activities.
//!
//! Two argument-less binaries share these modules: `pace-charts` renders a
//! bar chart per recent run, `export-tracks` regenerates the data module
//! the website front-end imports.

pub mod chart;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod pace;
pub mod pipeline;
pub mod track;

/// Configure logging from `GARMIN_LOG_LEVEL` (or fallback to `RUST_LOG`,
/// default `info`).
pub fn init_tracing() {
    let log_env = std::env::var("GARMIN_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}
