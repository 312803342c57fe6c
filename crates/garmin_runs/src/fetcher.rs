//! Recent-activity fetch and type filtering.

use garmin_connect_client::{ActivitySummary, GarminConnect, GarminError};
use tracing::debug;

/// How far back the search window reaches.
pub const WINDOW_DAYS: u32 = 90;
/// Cap on results per run.
pub const SEARCH_LIMIT: u32 = 20;

/// Fetch activities for the recent window, optionally filtered by type.
///
/// The type filter is passed server-side and re-applied client-side on the
/// exact `typeKey`; the server-side filter is not trusted. Activities
/// without a type key are dropped when a filter is in effect. An empty
/// result is not an error.
pub async fn fetch_recent(
    client: &impl GarminConnect,
    window_days: u32,
    limit: u32,
    type_filter: Option<&str>,
) -> Result<Vec<ActivitySummary>, GarminError> {
    let activities = client
        .search_activities(window_days, limit, type_filter)
        .await?;
    let total = activities.len();

    let matching: Vec<ActivitySummary> = match type_filter {
        Some(kind) => activities
            .into_iter()
            .filter(|a| a.type_key() == Some(kind))
            .collect(),
        None => activities,
    };
    if matching.len() < total {
        debug!(
            "dropped {} of {total} activities not matching the type filter",
            total - matching.len()
        );
    }
    Ok(matching)
}
