//! Minimal `GarminConnect` trait and reqwest-based Garmin Connect client.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub mod config;
pub mod http_client;
pub mod session;

#[derive(Debug, Error)]
pub enum GarminError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("authentication error: {0}")]
    Auth(String),
    #[error("fetch failed with status {status}: {body}")]
    Fetch { status: u16, body: String },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// One workout record from the activity search endpoint.
///
/// Summaries are immutable once fetched; everything beyond the id is
/// optional because the search payload varies by activity type.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    pub activity_id: u64,
    #[serde(default)]
    pub activity_name: Option<String>,
    #[serde(default)]
    pub activity_type: Option<ActivityType>,
    #[serde(default)]
    pub start_time_local: Option<String>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub duration: Option<f64>,
}

impl ActivitySummary {
    /// The lowercase type key (`"running"`, `"cycling"`, ...), if the
    /// summary carried one.
    pub fn type_key(&self) -> Option<&str> {
        self.activity_type.as_ref().map(|t| t.type_key.as_str())
    }

    /// Local start time for log lines and chart titles.
    pub fn start_time_label(&self) -> &str {
        self.start_time_local.as_deref().unwrap_or("unknown time")
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityType {
    pub type_key: String,
}

/// One distance segment within an activity, from the splits endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lap {
    /// Meters.
    #[serde(default)]
    pub distance: f64,
    /// Seconds.
    #[serde(default)]
    pub duration: f64,
}

/// Positional telemetry from the details endpoint.
///
/// Samples are plain arrays; `metric_descriptors` maps metric names to
/// positions and must be consulted before reading any sample value.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailFrame {
    pub metric_descriptors: Vec<MetricDescriptor>,
    pub activity_detail_metrics: Vec<MetricSample>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricDescriptor {
    pub metrics_index: usize,
    pub key: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MetricSample {
    pub metrics: Vec<Option<f64>>,
}

/// The slice of the social profile we care about when validating a
/// restored session.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfile {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// The activity-fetch seam.
///
/// The pipelines in `garmin_runs` only depend on this trait, so they can be
/// exercised against stub clients without a network.
#[async_trait]
pub trait GarminConnect: Send + Sync {
    /// Activities starting within `window_days` of today, capped at
    /// `limit`, optionally filtered server-side by type key.
    async fn search_activities(
        &self,
        window_days: u32,
        limit: u32,
        activity_type: Option<&str>,
    ) -> Result<Vec<ActivitySummary>, GarminError>;

    /// Lap splits for one activity. `Ok(None)` means the response had no
    /// `lapDTOs` key, which callers treat as "skip this activity".
    async fn activity_splits(&self, activity_id: u64) -> Result<Option<Vec<Lap>>, GarminError>;

    /// Telemetry frame for one activity. `Ok(None)` means the response was
    /// missing descriptors or samples.
    async fn activity_details(&self, activity_id: u64)
    -> Result<Option<DetailFrame>, GarminError>;
}
