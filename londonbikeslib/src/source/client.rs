//! TfL BikePoint API client.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use tracing::{debug, warn};

use super::config::SourceConfig;
use super::StationSource;
use crate::data::station::Station;
use crate::error::LondonBikesError;
use crate::Result;

/// Blocking client for the BikePoint endpoints.
#[derive(Debug, Clone)]
pub struct BikePointClient {
    http: Client,
    config: SourceConfig,
}

impl BikePointClient {
    /// Create a client. No request is made until a fetch.
    pub fn new(config: SourceConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// URL of one station's record.
    pub fn station_url(&self, id: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), id)
    }

    fn get(&self, url: &str) -> Result<Response> {
        debug!(url, "GET");
        let response = self
            .http
            .get(url)
            .query(&self.config.credential_params())
            .send()?;
        debug!(url, status = response.status().as_u16(), "response");
        Ok(response)
    }
}

/// Turn a non-success status into [`LondonBikesError::Upstream`].
fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = error_body(response.text());
    warn!(
        status = status.as_u16(),
        "station registry returned an error"
    );
    Err(LondonBikesError::Upstream {
        status: status.as_u16(),
        message: upstream_message(status, &body),
    })
}

/// Text of an error response. A body that cannot be read counts as empty.
fn error_body(text: reqwest::Result<String>) -> String {
    text.unwrap_or_else(|e| {
        debug!(error = %e, "could not read error response body");
        String::new()
    })
}

fn upstream_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_string()
    } else {
        body.to_string()
    }
}

impl StationSource for BikePointClient {
    fn fetch_all(&self) -> Result<Vec<Station>> {
        let response = ensure_success(self.get(&self.config.base_url)?)?;
        let stations: Vec<Station> = serde_json::from_str(&response.text()?)?;
        debug!(count = stations.len(), "fetched stations");
        Ok(stations)
    }

    fn fetch_station(&self, id: &str) -> Result<Option<Station>> {
        let response = self.get(&self.station_url(id))?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(id, "station not found");
            return Ok(None);
        }
        let response = ensure_success(response)?;
        let station: Station = serde_json::from_str(&response.text()?)?;
        Ok(Some(station))
    }
}
