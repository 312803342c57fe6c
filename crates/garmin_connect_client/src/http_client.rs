//! HTTP client implementation for the Garmin Connect API.
//!
//! Thin bearer-authenticated wrapper over the handful of Connect endpoints
//! the pipelines need. Request/response schemas are owned by the remote
//! service; the models here only name the fields we consume.

use crate::session::SessionCredential;
use crate::{
    ActivitySummary, DetailFrame, GarminConnect, GarminError, Lap, MetricDescriptor,
    MetricSample, SocialProfile,
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use secrecy::{ExposeSecret, SecretString};

/// Client for the Garmin Connect API using reqwest.
#[derive(Clone, Debug)]
pub struct GarminClient {
    base_url: String,
    credential: SessionCredential,
    client: reqwest::Client,
}

impl GarminClient {
    /// Wrap an already-established credential bundle.
    pub fn new(base_url: &str, credential: SessionCredential) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
            client,
        }
    }

    /// Perform the interactive login and return an authenticated client.
    ///
    /// This is a single thin call; the SSO protocol behind it (including
    /// any out-of-band MFA confirmation) belongs to the remote service.
    /// Any rejection is a fatal [`GarminError::Auth`].
    pub async fn login(
        base_url: &str,
        username: &str,
        password: &SecretString,
    ) -> Result<Self, GarminError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        let url = format!("{base_url}/auth/login");
        let body = serde_json::json!({
            "username": username,
            "password": password.expose_secret(),
        });
        let resp = client.post(&url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let snippet: String = resp.text().await.unwrap_or_default().chars().take(256).collect();
            return Err(GarminError::Auth(format!(
                "login rejected ({}): {snippet}",
                status.as_u16()
            )));
        }
        let credential: SessionCredential = resp.json().await?;
        Ok(Self {
            base_url,
            credential,
            client,
        })
    }

    /// The credential bundle backing this client, for persistence.
    pub fn credential(&self) -> &SessionCredential {
        &self.credential
    }

    /// Build an authenticated GET request.
    fn get_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .bearer_auth(&self.credential.access_token)
    }

    /// Execute a request and expect a JSON response.
    async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, GarminError> {
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(self.error_from_response(resp).await);
        }
        Ok(resp.json::<T>().await?)
    }

    /// Extract error information from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> GarminError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body_snippet: String = body.chars().take(256).collect();

        match status {
            401 | 403 => GarminError::Auth(body_snippet),
            _ => GarminError::Fetch {
                status,
                body: body_snippet,
            },
        }
    }

    /// Fetch the social profile; used to validate a restored session.
    pub async fn social_profile(&self) -> Result<SocialProfile, GarminError> {
        let url = format!("{}/userprofile-service/socialProfile", self.base_url);
        self.execute_json(self.get_request(&url)).await
    }
}

#[async_trait]
impl GarminConnect for GarminClient {
    async fn search_activities(
        &self,
        window_days: u32,
        limit: u32,
        activity_type: Option<&str>,
    ) -> Result<Vec<ActivitySummary>, GarminError> {
        let url = format!(
            "{}/activitylist-service/activities/search/activities",
            self.base_url
        );
        let start_date = Utc::now().date_naive() - Duration::days(i64::from(window_days));

        let mut pairs: Vec<(&str, String)> = vec![
            ("limit", limit.to_string()),
            ("startDate", start_date.to_string()),
        ];
        if let Some(kind) = activity_type {
            pairs.push(("activityType", kind.to_string()));
        }
        let qp: Vec<(&str, &str)> = pairs.iter().map(|(k, v)| (*k, v.as_str())).collect();

        self.execute_json(self.get_request(&url).query(&qp)).await
    }

    async fn activity_splits(&self, activity_id: u64) -> Result<Option<Vec<Lap>>, GarminError> {
        let url = format!(
            "{}/activity-service/activity/{activity_id}/splits",
            self.base_url
        );

        #[derive(serde::Deserialize)]
        struct SplitsPayload {
            #[serde(default, rename = "lapDTOs")]
            lap_dtos: Option<Vec<Lap>>,
        }

        let payload: SplitsPayload = self.execute_json(self.get_request(&url)).await?;
        Ok(payload.lap_dtos)
    }

    async fn activity_details(
        &self,
        activity_id: u64,
    ) -> Result<Option<DetailFrame>, GarminError> {
        let url = format!(
            "{}/activity-service/activity/{activity_id}/details",
            self.base_url
        );

        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct DetailsPayload {
            #[serde(default)]
            metric_descriptors: Option<Vec<MetricDescriptor>>,
            #[serde(default)]
            activity_detail_metrics: Option<Vec<MetricSample>>,
        }

        let payload: DetailsPayload = self.execute_json(self.get_request(&url)).await?;
        match (payload.metric_descriptors, payload.activity_detail_metrics) {
            (Some(metric_descriptors), Some(activity_detail_metrics)) => Ok(Some(DetailFrame {
                metric_descriptors,
                activity_detail_metrics,
            })),
            _ => Ok(None),
        }
    }
}
