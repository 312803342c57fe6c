//! Normalizing positional telemetry frames into exportable GPS tracks.

use garmin_connect_client::{ActivitySummary, DetailFrame, MetricDescriptor};
use serde::Serialize;

pub const LATITUDE_KEY: &str = "directLatitude";
pub const LONGITUDE_KEY: &str = "directLongitude";
pub const TIMESTAMP_KEY: &str = "directTimestamp";

/// Named positions of the three track metrics, resolved once per frame
/// instead of re-scanning the descriptor table at every sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackIndices {
    pub latitude: usize,
    pub longitude: usize,
    pub timestamp: usize,
}

impl TrackIndices {
    /// `None` when any of the three descriptors is missing, which makes the
    /// whole frame unusable for export.
    pub fn from_descriptors(descriptors: &[MetricDescriptor]) -> Option<Self> {
        let find = |key: &str| {
            descriptors
                .iter()
                .find(|d| d.key == key)
                .map(|d| d.metrics_index)
        };
        Some(Self {
            latitude: find(LATITUDE_KEY)?,
            longitude: find(LONGITUDE_KEY)?,
            timestamp: find(TIMESTAMP_KEY)?,
        })
    }
}

/// One exported activity in the shape the website's `Activity` type expects.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TrackExport {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub coordinates: Vec<[f64; 2]>,
    pub timestamps: Vec<f64>,
}

/// Re-index a telemetry frame into parallel coordinate/timestamp sequences.
///
/// A sample survives only if its positional array covers all three metric
/// indices and none of the three values is null; the site consumes the two
/// sequences zipped, so they stay index-aligned by construction. Returns
/// `None` when a descriptor is missing or no sample survives.
pub fn format_track(frame: &DetailFrame, summary: &ActivitySummary) -> Option<TrackExport> {
    let idx = TrackIndices::from_descriptors(&frame.metric_descriptors)?;
    let needed = idx.latitude.max(idx.longitude).max(idx.timestamp) + 1;

    let mut coordinates = Vec::new();
    let mut timestamps = Vec::new();
    for sample in &frame.activity_detail_metrics {
        if sample.metrics.len() < needed {
            continue;
        }
        let (Some(lat), Some(lon)) = (sample.metrics[idx.latitude], sample.metrics[idx.longitude])
        else {
            continue;
        };
        let Some(ts) = sample.metrics[idx.timestamp] else {
            continue;
        };
        coordinates.push([lat, lon]);
        timestamps.push(ts);
    }
    if coordinates.is_empty() {
        return None;
    }

    Some(TrackExport {
        activity_type: capitalize(summary.type_key().unwrap_or("unknown")),
        coordinates,
        timestamps,
    })
}

/// Capitalize the first character of a type key ("running" -> "Running").
fn capitalize(s: &str) -> String {
    let mut chrs = s.chars();
    match chrs.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chrs.as_str()),
        None => String::new(),
    }
}
