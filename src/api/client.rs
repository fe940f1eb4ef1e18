//! Learning Platform Client
//!
//! A JSON client for the platform's REST endpoints used by the dashboard and
//! the command-line actions.

use crate::api::error::ApiError;
use crate::api::{PlatformApi, endpoints};
use crate::consts::cli_consts::network;
use crate::environment::Environment;
use crate::models::{
    Acknowledgement, Activities, EnrollmentRequest, LessonCompletion, NotificationCheck, Stats,
};
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

// Build timestamp in milliseconds since epoch
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP", "Build timestamp not available");

// User-Agent string with client version
const USER_AGENT: &str = concat!("academy-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(network::connect_timeout())
            .timeout(network::request_timeout())
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .header("X-Build-Timestamp", BUILD_TIMESTAMP)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn post_request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        log::debug!("POST {}", url);
        let mut request = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .header("X-Build-Timestamp", BUILD_TIMESTAMP);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl PlatformApi for ApiClient {
    async fn user_stats(&self) -> Result<Stats, ApiError> {
        self.get_request(endpoints::USER_STATS).await
    }

    async fn recent_activities(&self) -> Result<Activities, ApiError> {
        self.get_request(endpoints::RECENT_ACTIVITIES).await
    }

    async fn check_notifications(&self) -> Result<NotificationCheck, ApiError> {
        self.get_request(endpoints::NOTIFICATIONS_CHECK).await
    }

    async fn submit_enrollment(
        &self,
        request: &EnrollmentRequest,
    ) -> Result<Acknowledgement, ApiError> {
        let ack: Acknowledgement = self
            .post_request(endpoints::ENROLL_REQUEST, Some(request))
            .await?;
        if !ack.success {
            return Err(ApiError::Rejected(ack.message.unwrap_or_default()));
        }
        Ok(ack)
    }

    async fn complete_lesson(&self, lesson_id: u64) -> Result<LessonCompletion, ApiError> {
        let completion: LessonCompletion = self
            .post_request::<(), _>(&endpoints::lesson_complete(lesson_id), None)
            .await?;
        if !completion.success {
            return Err(ApiError::Rejected(completion.message));
        }
        Ok(completion)
    }
}
