use garmin_connect_client::{config::Config, session::ensure_session};
use garmin_runs::pipeline::run_pace_charts;
use std::path::PathBuf;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    garmin_runs::init_tracing();

    let cfg = Config::from_env()?;
    let client = ensure_session(&cfg).await?;

    let out_dir = std::env::var("GARMIN_CHART_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));
    run_pace_charts(&client, &out_dir).await?;
    Ok(())
}
