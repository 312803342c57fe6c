mod common;

use common::{DetailOutcome, StubClient, activity, gps_frame, lap, untyped_activity};
use garmin_runs::fetcher::fetch_recent;
use garmin_runs::pipeline::{chart_path, run_pace_charts, run_track_export};
use std::sync::atomic::Ordering;

#[tokio::test]
async fn empty_window_completes_with_no_artifacts() {
    let client = StubClient::new(vec![]);
    let dir = tempfile::tempdir().expect("tempdir");

    run_pace_charts(&client, dir.path()).await.expect("charts");
    assert_eq!(std::fs::read_dir(dir.path()).expect("read_dir").count(), 0);

    let out_file = dir.path().join("activities.ts");
    run_track_export(&client, &out_file).await.expect("export");
    assert!(!out_file.exists());
}

#[tokio::test]
async fn type_filter_is_reapplied_client_side() {
    let client = StubClient::new(vec![
        activity(1, "running"),
        activity(2, "cycling"),
        untyped_activity(3),
        activity(4, "running"),
    ]);
    // The stub ignores the server-side filter entirely, like a server we
    // do not trust.
    let matching = fetch_recent(&client, 90, 20, Some("running"))
        .await
        .expect("fetch");
    let ids: Vec<u64> = matching.iter().map(|a| a.activity_id).collect();
    assert_eq!(ids, vec![1, 4]);

    let all = fetch_recent(&client, 90, 20, None).await.expect("fetch");
    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn existing_chart_skips_activity_without_fetching() {
    let mut client = StubClient::new(vec![activity(1, "running")]);
    // A splits call would blow up the run if the skip marker were ignored.
    client.splits.insert(1, DetailOutcome::Error);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = chart_path(dir.path(), 1);
    std::fs::write(&path, b"previous chart bytes").expect("seed chart");

    run_pace_charts(&client, dir.path()).await.expect("charts");

    assert_eq!(client.splits_calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        std::fs::read(&path).expect("read chart"),
        b"previous chart bytes"
    );
}

#[tokio::test]
async fn one_failing_activity_does_not_abort_the_batch() {
    let mut client = StubClient::new(vec![
        activity(1, "running"),
        activity(2, "running"),
        activity(3, "running"),
    ]);
    client.splits.insert(1, DetailOutcome::Error);
    // Activity 2 has no lapDTOs at all; activity 3 charts normally.
    client.splits.insert(2, DetailOutcome::Absent);
    client.splits.insert(
        3,
        DetailOutcome::Value(vec![lap(1000.0, 300.0), lap(1000.0, 330.0), lap(50.0, 10.0)]),
    );

    let dir = tempfile::tempdir().expect("tempdir");
    run_pace_charts(&client, dir.path()).await.expect("charts");

    assert_eq!(client.splits_calls.load(Ordering::SeqCst), 3);
    assert!(!chart_path(dir.path(), 1).exists());
    assert!(!chart_path(dir.path(), 2).exists());
    assert!(chart_path(dir.path(), 3).exists());
}

#[tokio::test]
async fn export_collects_tracks_and_overwrites_prior_artifact() {
    let mut client = StubClient::new(vec![
        activity(1, "running"),
        activity(2, "hiking"),
        activity(3, "cycling"),
    ]);
    client.details.insert(
        1,
        DetailOutcome::Value(gps_frame(serde_json::json!([
            {"metrics": [51.5, -0.1, 100.0]},
            {"metrics": [null, -0.1, 101.0]}
        ]))),
    );
    client.details.insert(2, DetailOutcome::Absent);
    client.details.insert(3, DetailOutcome::Error);

    let dir = tempfile::tempdir().expect("tempdir");
    let out_file = dir.path().join("activities.ts");
    std::fs::write(&out_file, "stale artifact from a previous run").expect("seed");

    run_track_export(&client, &out_file).await.expect("export");

    let contents = std::fs::read_to_string(&out_file).expect("read");
    assert!(contents.starts_with("import { Activity } from '../types/activity';"));
    assert!(!contents.contains("stale artifact"));
    assert!(contents.contains("\"type\": \"Running\""));
    // The failing and telemetry-less activities are simply not in the array.
    assert!(!contents.contains("Hiking"));
    assert!(!contents.contains("Cycling"));
    assert_eq!(client.details_calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn export_with_no_surviving_tracks_writes_empty_array() {
    let mut client = StubClient::new(vec![activity(1, "running")]);
    client.details.insert(
        1,
        DetailOutcome::Value(gps_frame(serde_json::json!([
            {"metrics": [null, -0.1, 100.0]}
        ]))),
    );

    let dir = tempfile::tempdir().expect("tempdir");
    let out_file = dir.path().join("activities.ts");
    run_track_export(&client, &out_file).await.expect("export");

    let contents = std::fs::read_to_string(&out_file).expect("read");
    assert!(contents.contains("export const activities: Activity[] = []"));
}
