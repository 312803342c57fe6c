//! The two single-shot pipelines: pace charts and track export.
//!
//! Both run strictly sequentially: fetch, then one activity at a time.
//! A failure on one activity's detail fetch or transform is logged and the
//! loop moves on; only session and search failures abort the run.

use crate::chart::render_pace_chart;
use crate::error::RunResult;
use crate::export::write_activities_file;
use crate::fetcher::{SEARCH_LIMIT, WINDOW_DAYS, fetch_recent};
use crate::pace::pace_per_km;
use crate::track::format_track;
use garmin_connect_client::GarminConnect;
use std::path::Path;
use tracing::{info, warn};

pub const RUNNING_TYPE_KEY: &str = "running";

/// Chart filename for one activity; its existence doubles as the
/// already-processed marker across runs.
pub fn chart_path(out_dir: &Path, activity_id: u64) -> std::path::PathBuf {
    out_dir.join(format!("activity_{activity_id}.png"))
}

/// Chart mode: one pace PNG per not-yet-charted running activity.
pub async fn run_pace_charts(client: &impl GarminConnect, out_dir: &Path) -> RunResult<()> {
    let activities =
        fetch_recent(client, WINDOW_DAYS, SEARCH_LIMIT, Some(RUNNING_TYPE_KEY)).await?;
    if activities.is_empty() {
        info!("no running activities found in the last {WINDOW_DAYS} days");
        return Ok(());
    }
    info!(
        "found {} running activities in the last {WINDOW_DAYS} days",
        activities.len()
    );

    for activity in &activities {
        let id = activity.activity_id;
        let path = chart_path(out_dir, id);
        if path.exists() {
            info!("chart {} already exists, skipping", path.display());
            continue;
        }
        info!(
            "processing new activity {id} from {}",
            activity.start_time_label()
        );

        let laps = match client.activity_splits(id).await {
            Ok(Some(laps)) => laps,
            Ok(None) => {
                info!("could not retrieve laps for activity {id}, skipping");
                continue;
            }
            Err(e) => {
                warn!("failed to fetch splits for activity {id}: {e}");
                continue;
            }
        };

        let pace = pace_per_km(&laps);
        if pace.is_empty() {
            info!("no 1 km lap data found for activity {id}, skipping");
            continue;
        }

        match render_pace_chart(&pace, &path, activity.start_time_label()) {
            Ok(()) => info!("saved chart {}", path.display()),
            Err(e) => warn!("failed to render chart for activity {id}: {e}"),
        }
    }
    Ok(())
}

/// Export mode: regenerate the website's activities module from every
/// activity with usable GPS telemetry in the recent window.
pub async fn run_track_export(client: &impl GarminConnect, out_file: &Path) -> RunResult<()> {
    let activities = fetch_recent(client, WINDOW_DAYS, SEARCH_LIMIT, None).await?;
    if activities.is_empty() {
        info!("no activities found in the last {WINDOW_DAYS} days, nothing to export");
        return Ok(());
    }

    let mut tracks = Vec::new();
    for activity in &activities {
        let id = activity.activity_id;
        let frame = match client.activity_details(id).await {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                info!("no telemetry for activity {id}, skipping");
                continue;
            }
            Err(e) => {
                warn!("failed to fetch details for activity {id}: {e}");
                continue;
            }
        };
        match format_track(&frame, activity) {
            Some(track) => tracks.push(track),
            None => info!("no usable GPS samples for activity {id}, skipping"),
        }
    }

    write_activities_file(&tracks, out_file)?;
    info!("exported {} tracks to {}", tracks.len(), out_file.display());
    Ok(())
}
