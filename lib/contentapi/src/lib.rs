//! Async client for the Guardian Content API.
//!
//! Queries are plain values; a [`GuardianContentClient`] resolves them over
//! a pooled hyper/rustls transport into typed responses.
//!
//! # Example
//!
//! ```no_run
//! use contentapi::prelude::*;
//!
//! # async fn run() -> contentapi::Result<()> {
//! let client = contentapi::client("my-api-key")?;
//!
//! let query = client
//!     .search()
//!     .q("climate change")
//!     .section("environment")
//!     .order_by(OrderBy::Newest)
//!     .page_size(10);
//! let page = client.get(&query).await?;
//! for content in &page.results {
//!     println!("{}", content.web_title);
//! }
//! if let Some(next) = page.next_page() {
//!     let _more = client.get(&query.page(next)).await?;
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod connector;
pub mod middleware;
pub mod prelude;

pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{ClientConfig, ClientConfigBuilder};

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use contentapi_core::{
    AcceptedStatuses, Classification, ContentApiClient, ContentApiConfig, ContentApiConfigBuilder,
    DEFAULT_BASE_URL, DEFAULT_USER_AGENT, Error, HttpClient, HttpClientExt, Json, ParameterValue,
    Parameters, PayloadFormat, Request, RequestBuilder, Response, Result, StatusCode, build_url,
    from_json, header, model, params, query, redact_api_key,
};

/// Content API client over the default hyper transport.
pub type GuardianContentClient = ContentApiClient<HyperClient>;

/// Client for `api_key` against the public endpoint, with default transport
/// settings.
///
/// # Errors
///
/// Returns [`Error::Validation`] if `api_key` is blank.
pub fn client(api_key: impl Into<String>) -> Result<GuardianContentClient> {
    Ok(ContentApiClient::new(
        HyperClient::new(),
        ContentApiConfig::new(api_key)?,
    ))
}

/// Client configured from `CONTENT_API_KEY` and `CONTENT_API_URL`.
///
/// # Errors
///
/// See [`ContentApiConfig::from_env`].
pub fn from_env() -> Result<GuardianContentClient> {
    Ok(ContentApiClient::new(
        HyperClient::new(),
        ContentApiConfig::from_env()?,
    ))
}
