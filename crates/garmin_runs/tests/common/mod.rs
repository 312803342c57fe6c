#![allow(dead_code)]

use async_trait::async_trait;
use garmin_connect_client::{ActivitySummary, DetailFrame, GarminConnect, GarminError, Lap};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

/// Canned per-activity outcome for a detail endpoint.
pub enum DetailOutcome<T> {
    Value(T),
    Absent,
    Error,
}

/// In-memory `GarminConnect` with canned responses and call counters.
pub struct StubClient {
    pub activities: Vec<ActivitySummary>,
    pub splits: HashMap<u64, DetailOutcome<Vec<Lap>>>,
    pub details: HashMap<u64, DetailOutcome<DetailFrame>>,
    pub splits_calls: AtomicU32,
    pub details_calls: AtomicU32,
}

impl StubClient {
    pub fn new(activities: Vec<ActivitySummary>) -> Self {
        Self {
            activities,
            splits: HashMap::new(),
            details: HashMap::new(),
            splits_calls: AtomicU32::new(0),
            details_calls: AtomicU32::new(0),
        }
    }
}

fn stub_error() -> GarminError {
    GarminError::Fetch {
        status: 500,
        body: "stub failure".into(),
    }
}

#[async_trait]
impl GarminConnect for StubClient {
    async fn search_activities(
        &self,
        _window_days: u32,
        _limit: u32,
        _activity_type: Option<&str>,
    ) -> Result<Vec<ActivitySummary>, GarminError> {
        Ok(self.activities.clone())
    }

    async fn activity_splits(&self, activity_id: u64) -> Result<Option<Vec<Lap>>, GarminError> {
        self.splits_calls.fetch_add(1, Ordering::SeqCst);
        match self.splits.get(&activity_id) {
            Some(DetailOutcome::Value(laps)) => Ok(Some(laps.clone())),
            Some(DetailOutcome::Error) => Err(stub_error()),
            Some(DetailOutcome::Absent) | None => Ok(None),
        }
    }

    async fn activity_details(
        &self,
        activity_id: u64,
    ) -> Result<Option<DetailFrame>, GarminError> {
        self.details_calls.fetch_add(1, Ordering::SeqCst);
        match self.details.get(&activity_id) {
            Some(DetailOutcome::Value(frame)) => Ok(Some(frame.clone())),
            Some(DetailOutcome::Error) => Err(stub_error()),
            Some(DetailOutcome::Absent) | None => Ok(None),
        }
    }
}

pub fn activity(id: u64, type_key: &str) -> ActivitySummary {
    serde_json::from_value(serde_json::json!({
        "activityId": id,
        "activityType": {"typeKey": type_key},
        "startTimeLocal": "2026-08-12 07:31:05"
    }))
    .expect("activity summary")
}

pub fn untyped_activity(id: u64) -> ActivitySummary {
    serde_json::from_value(serde_json::json!({"activityId": id})).expect("activity summary")
}

pub fn lap(distance: f64, duration: f64) -> Lap {
    Lap { distance, duration }
}

pub fn gps_frame(samples: serde_json::Value) -> DetailFrame {
    serde_json::from_value(serde_json::json!({
        "metricDescriptors": [
            {"metricsIndex": 0, "key": "directLatitude"},
            {"metricsIndex": 1, "key": "directLongitude"},
            {"metricsIndex": 2, "key": "directTimestamp"}
        ],
        "activityDetailMetrics": samples
    }))
    .expect("detail frame")
}
