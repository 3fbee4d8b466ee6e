//! REST client for the vehicle service.

use crate::config::TuiConfig;
use fleet_core::{validate_fleet, FleetError, Vehicle};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
    #[error("Invalid vehicle list: {0}")]
    InvalidFleet(#[from] FleetError),
}

#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        Self::with_base_url(&config.api_base_url, config.request_timeout())
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, ApiClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/vehicles`
    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>, ApiClientError> {
        let url = format!("{}/api/vehicles", self.base_url);
        let response = self.client.get(url).send().await?;
        self.parse_fleet(response).await
    }

    /// `POST /api/vehicles/simulate`, no request body.
    pub async fn simulate_vehicles(&self) -> Result<Vec<Vehicle>, ApiClientError> {
        let url = format!("{}/api/vehicles/simulate", self.base_url);
        let response = self.client.post(url).send().await?;
        self.parse_fleet(response).await
    }

    async fn parse_fleet(&self, response: reqwest::Response) -> Result<Vec<Vehicle>, ApiClientError> {
        let vehicles: Vec<Vehicle> = self.parse_response(response).await?;
        validate_fleet(&vehicles)?;
        Ok(vehicles)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            Ok(serde_json::from_str::<T>(&text)?)
        } else {
            Err(ApiClientError::InvalidResponse(format!(
                "HTTP {}: {}",
                status.as_u16(),
                text
            )))
        }
    }
}
