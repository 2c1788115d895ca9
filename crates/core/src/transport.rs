use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use crate::error::{Result, TimedTextError};

/// Outcome of a GET against the timed-text endpoint. A 404 is an expected
/// answer ("nothing here"), not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    Found(Vec<u8>),
    NotFound,
}

impl Fetched {
    pub fn into_found(self) -> Option<Vec<u8>> {
        match self {
            Fetched::Found(body) => Some(body),
            Fetched::NotFound => None,
        }
    }
}

pub trait Fetch {
    async fn get(&self, url: &Url) -> Result<Fetched>;
}

/// Plain reqwest-backed fetcher. No retries, no explicit timeout.
#[derive(Clone, Debug, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    async fn get(&self, url: &Url) -> Result<Fetched> {
        debug!(%url, "GET");
        let request_failed = |source| TimedTextError::RequestFailed {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(request_failed)?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(%url, "not found");
            return Ok(Fetched::NotFound);
        }

        let body = response
            .error_for_status()
            .map_err(request_failed)?
            .bytes()
            .await
            .map_err(request_failed)?;

        debug!(%url, bytes = body.len(), "fetched");
        Ok(Fetched::Found(body.to_vec()))
    }
}
