use crate::config::toml_config::{ApiConfig, EndpointConfig};
use crate::core::{ContactInfo, ContentApi, ServiceItem, TeamMember};
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// `ContentApi` backed by the site's JSON endpoints.
#[derive(Debug, Clone)]
pub struct HttpContentApi {
    client: Client,
    base_url: Url,
    endpoints: EndpointConfig,
}

impl HttpContentApi {
    /// Client for `base_url` with the default endpoints and request timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::from_config(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
    }

    /// Client built from the `[api]` section; every request is bounded by
    /// `timeout_seconds`.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: Url::parse(&config.base_url)?,
            endpoints: config.endpoints.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base_url.join(path)?;

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let status = response.status();
        if !status.is_success() {
            return Err(SiteError::StatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ContentApi for HttpContentApi {
    async fn fetch_services(&self) -> Result<Vec<ServiceItem>> {
        self.get_json(&self.endpoints.services).await
    }

    async fn fetch_team(&self) -> Result<Vec<TeamMember>> {
        self.get_json(&self.endpoints.team).await
    }

    async fn fetch_contact(&self) -> Result<ContactInfo> {
        self.get_json(&self.endpoints.contact).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_services_decodes_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/services");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"id": 9, "title": "Audits", "description": "Model audits", "icon": "🔍"}
                ]));
        });

        let api = HttpContentApi::new(&server.base_url()).unwrap();
        let services = api.fetch_services().await.unwrap();

        api_mock.assert();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].id, 9);
        assert_eq!(services[0].icon, "🔍");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/team");
            then.status(404);
        });

        let api = HttpContentApi::new(&server.base_url()).unwrap();
        let err = api.fetch_team().await.unwrap_err();

        api_mock.assert();
        match err {
            SiteError::StatusError { status, url } => {
                assert_eq!(status, 404);
                assert!(url.ends_with("/api/team"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/contact");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("{\"email\": ");
        });

        let api = HttpContentApi::new(&server.base_url()).unwrap();
        let err = api.fetch_contact().await.unwrap_err();

        assert!(err.is_network_failure());
    }

    #[tokio::test]
    async fn test_custom_endpoints_from_config() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/v2/people");
            then.status(200).json_body(serde_json::json!([]));
        });

        let config = ApiConfig {
            base_url: server.base_url(),
            timeout_seconds: 5,
            endpoints: EndpointConfig {
                team: "/v2/people".to_string(),
                ..EndpointConfig::default()
            },
        };

        let api = HttpContentApi::from_config(&config).unwrap();
        let team = api.fetch_team().await.unwrap();

        api_mock.assert();
        assert!(team.is_empty());
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpContentApi::new("not a url"),
            Err(SiteError::UrlError(_))
        ));
    }
}
