use reqwest::Client;

use crate::{api::types::ApiError, pages::applications::types::Application};

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub async fn fetch_applications(&self, url: &str) -> Result<Vec<Application>, ApiError> {
        log::debug!("fetching applications from {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::request_failed(format!(
                "Request failed with status {}",
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        decode_applications(&body)
    }
}

pub fn decode_applications(body: &str) -> Result<Vec<Application>, ApiError> {
    serde_json::from_str(body)
        .map_err(|e| ApiError::decode(format!("Failed to parse applications: {}", e)))
}
