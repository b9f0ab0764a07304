//! # Movie Client
//!
//! [`MovieApi`] is the seam between the details screen and the network.
//! [`TmdbClient`] implements it over HTTP; [`MockMovieApi`](crate::clients::MockMovieApi)
//! implements it from a queue of expectations.

use crate::config::TmdbConfig;
use crate::error::ApiError;
use crate::model::MovieDetails;
use async_resource::AsyncResource;
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode, Url};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

fn is_loopback(base_url: &str) -> bool {
    let Ok(url) = Url::parse(base_url) else {
        return false;
    };
    match url.host_str() {
        Some("localhost") => true,
        Some(host) => host
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<std::net::IpAddr>()
            .is_ok_and(|ip| ip.is_loopback()),
        None => false,
    }
}

/// Looks up movie details by identifier.
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// Fetch the full record for one movie.
    async fn fetch_movie_details(&self, id: &str) -> Result<MovieDetails, ApiError>;
}

/// HTTP client for a TMDB-compatible API.
#[derive(Clone, Debug)]
pub struct TmdbClient {
    config: TmdbConfig,
    client: Client,
}

impl TmdbClient {
    /// Create a client with the given configuration.
    pub fn new(config: TmdbConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        // Local servers are reached directly, whatever the proxy environment says.
        if is_loopback(&config.base_url) {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &TmdbConfig {
        &self.config
    }

    /// `{base_url}/movie/{id}`, with the id percent-encoded as one path segment.
    fn url_for_movie(&self, id: &str) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL {:?}: {e}", self.config.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Config(format!("base URL {:?} cannot have a path", self.config.base_url)))?
            .pop_if_empty()
            .push("movie")
            .push(id);
        Ok(url)
    }

    /// Add the JSON accept header and, if configured, bearer authentication.
    fn build_request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder.header(header::ACCEPT, "application/json");
        match &self.config.api_key {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

#[async_trait]
impl MovieApi for TmdbClient {
    #[instrument(skip(self))]
    async fn fetch_movie_details(&self, id: &str) -> Result<MovieDetails, ApiError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ApiError::InvalidId);
        }

        let url = self.url_for_movie(id)?;
        debug!(%url, "Sending request");
        let response = self.build_request(self.client.get(url)).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!("Not found");
            return Err(ApiError::NotFound(id.to_string()));
        }
        if status == StatusCode::UNAUTHORIZED {
            warn!("Unauthorized");
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            warn!(status = status.as_u16(), "Request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        let movie: MovieDetails =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        debug!(title = %movie.title, "Received");
        Ok(movie)
    }
}

/// Builds the auto-started resource a details screen consumes.
///
/// The first fetch is spawned immediately; call `run()` on the returned resource
/// to fetch again.
pub fn movie_resource<A>(api: Arc<A>, id: impl Into<String>) -> AsyncResource<MovieDetails>
where
    A: MovieApi + ?Sized + 'static,
{
    let id: Arc<str> = Arc::from(id.into());
    AsyncResource::new(move || {
        let api = Arc::clone(&api);
        let id = Arc::clone(&id);
        async move { api.fetch_movie_details(&id).await }
    })
}
