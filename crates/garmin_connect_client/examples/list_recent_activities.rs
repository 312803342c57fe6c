use garmin_connect_client::{GarminConnect, config::Config, session::ensure_session};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::from_env()?;
    let client = ensure_session(&cfg).await?;

    let limit = std::env::var("GARMIN_LIMIT")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(20);

    let activities = client
        .search_activities(90, limit, None)
        .await
        .map_err(|e| format!("failed to fetch activities: {}", e))?;

    if activities.is_empty() {
        println!("No activities found in the last 90 days");
        return Ok(());
    }

    println!("Recent activities (limit {}):", limit);
    for a in activities {
        let kind = a.type_key().unwrap_or("unknown").to_string();
        println!("- {} [{}] {}", a.activity_id, kind, a.start_time_label());
    }

    Ok(())
}
