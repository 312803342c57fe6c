use garmin_connect_client::{config::Config, session::ensure_session};
use garmin_runs::pipeline::run_track_export;
use std::path::PathBuf;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    garmin_runs::init_tracing();

    let cfg = Config::from_env()?;
    let client = ensure_session(&cfg).await?;

    let out_file = std::env::var("GARMIN_EXPORT_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("private-site/src/data/activities.ts"));
    run_track_export(&client, &out_file).await?;
    Ok(())
}
