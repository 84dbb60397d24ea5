use async_trait::async_trait;
use log::{debug, trace, warn};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::{fmt::Debug, time::Duration};
use tokio::time::Instant;

use crate::{
    error::{Error, Result},
    model::{Forecast, Observation, ObservationForecastHours, ObservationOneMin, Pollen, RiseSet},
    resource::{Entity, Resource},
};

/// Default root of the MetService public JSON API.
pub const BASE_URL: &str = "https://www.metservice.com/publicData/";

/// HTTP client for the MetService public data feeds.
///
/// Cloning is cheap and the client holds no mutable state, so one instance
/// can serve any number of concurrent callers. Dropping a pending request
/// future aborts the request.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Client with the default transport and [`BASE_URL`].
    pub fn new() -> Self {
        Self::with_http(reqwest::Client::new(), BASE_URL)
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Use an existing transport. Paths are appended to `base_url` as-is,
    /// so it normally ends with `/`.
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, resource: Resource, location: &str) -> String {
        format!("{}{}", self.base_url, resource.path(location))
    }

    pub async fn fetch<E: Entity>(&self, location: &str) -> Result<E> {
        self.get(self.url_for(E::RESOURCE, location)).await
    }

    /// Like [`Client::fetch`], but gives up once `deadline` has passed.
    pub async fn fetch_before<E: Entity>(&self, location: &str, deadline: Instant) -> Result<E> {
        tokio::time::timeout_at(deadline, self.fetch(location))
            .await
            .map_err(|_| Error::DeadlineExceeded)?
    }

    /// GET `base_url + path` and decode the body into `T`.
    ///
    /// Any status other than 200 is returned as [`Error::UpstreamStatus`]
    /// without reading the body.
    pub async fn fetch_path<T: DeserializeOwned + Default>(&self, path: &str) -> Result<T> {
        self.get(format!("{}{path}", self.base_url)).await
    }

    async fn get<T: DeserializeOwned + Default>(&self, url: String) -> Result<T> {
        debug!("Calling MetService: {url}");

        let res = self.http.get(&url).send().await?;

        let status = res.status();
        if status != StatusCode::OK {
            warn!("MetService returned {status} for {url}");
            return Err(Error::UpstreamStatus {
                code: status.as_u16(),
            });
        }

        let body = res.bytes().await?;
        debug!("MetService returned {} bytes for {url}", body.len());

        decode(&body)
    }
}

/// Decode a response body. A blank body or a bare `null` yields the
/// all-absent value.
pub fn decode<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        trace!("empty response body, using defaults");
        return Ok(T::default());
    }

    let mut de = serde_json::Deserializer::from_slice(body);
    let result = serde_path_to_error::deserialize(&mut de);
    let value: Option<T> = result.map_err(Error::from_decode)?;
    de.end().map_err(|e| Error::SchemaMismatch {
        field: ".".to_owned(),
        message: e.to_string(),
    })?;

    Ok(value.unwrap_or_default())
}

#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Upper bound for each request, from connect to the end of the body.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut http = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            http = http.user_agent(user_agent);
        }

        let base_url = self.base_url.unwrap_or_else(|| BASE_URL.to_owned());
        Ok(Client::with_http(http.build()?, base_url))
    }
}

/// One call per MetService feed. The location must match MetService's
/// town/city naming, e.g. `Dunedin`.
#[async_trait]
pub trait MetServiceApi: Send + Sync + Debug {
    async fn forecast(&self, location: &str) -> Result<Forecast>;

    async fn observation(&self, location: &str) -> Result<Observation>;

    async fn observation_one_min(&self, location: &str) -> Result<ObservationOneMin>;

    async fn observation_forecast_hours(&self, location: &str) -> Result<ObservationForecastHours>;

    async fn pollen(&self, location: &str) -> Result<Pollen>;

    async fn rise_set(&self, location: &str) -> Result<RiseSet>;
}

#[async_trait]
impl MetServiceApi for Client {
    async fn forecast(&self, location: &str) -> Result<Forecast> {
        self.fetch(location).await
    }

    async fn observation(&self, location: &str) -> Result<Observation> {
        self.fetch(location).await
    }

    async fn observation_one_min(&self, location: &str) -> Result<ObservationOneMin> {
        self.fetch(location).await
    }

    async fn observation_forecast_hours(&self, location: &str) -> Result<ObservationForecastHours> {
        self.fetch(location).await
    }

    async fn pollen(&self, location: &str) -> Result<Pollen> {
        self.fetch(location).await
    }

    async fn rise_set(&self, location: &str) -> Result<RiseSet> {
        self.fetch(location).await
    }
}
