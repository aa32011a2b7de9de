//! Routes dataset HTTP client.

use tracing::info;

use crate::domain::RouteIndex;

use super::error::FetchError;
use super::{SourceFormat, decode};

/// Default dataset URL: the structured per-airport JSON source.
const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/Jonty/airline-route-data/main/airline_routes.json";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the dataset client.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// URL serving the routes dataset
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Explicit encoding; `None` sniffs the payload
    pub format: Option<SourceFormat>,
}

impl DatasetConfig {
    /// Create a config pointing at the default structured dataset.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            format: None,
        }
    }

    /// Set a custom dataset URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Force a specific encoding instead of sniffing.
    pub fn with_format(mut self, format: SourceFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for fetching the routes dataset.
#[derive(Debug, Clone)]
pub struct DatasetClient {
    http: reqwest::Client,
    url: String,
    format: Option<SourceFormat>,
}

impl DatasetClient {
    /// Create a new dataset client with the given configuration.
    pub fn new(config: DatasetConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
            format: config.format,
        })
    }

    /// Fetch the dataset and build a fresh route index.
    ///
    /// Performs a single GET; any transport error, non-success status, or
    /// undecodable payload is returned as a [`FetchError`].
    pub async fn fetch(&self) -> Result<RouteIndex, FetchError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let bytes = response.bytes().await?;
        let payload = std::str::from_utf8(&bytes).map_err(|e| FetchError::Parse {
            message: format!("payload is not valid UTF-8: {e}"),
        })?;

        let index = decode(payload, self.format)?;

        info!(
            airports = index.len(),
            routes = index.route_count(),
            "loaded routes dataset"
        );

        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = DatasetConfig::new();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.format, None);
    }

    #[test]
    fn config_builder() {
        let config = DatasetConfig::new()
            .with_url("http://localhost:8080/routes.dat")
            .with_timeout(5)
            .with_format(SourceFormat::Flat);

        assert_eq!(config.url, "http://localhost:8080/routes.dat");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.format, Some(SourceFormat::Flat));
    }

    #[test]
    fn client_creation() {
        let client = DatasetClient::new(DatasetConfig::new());
        assert!(client.is_ok());
    }
}
