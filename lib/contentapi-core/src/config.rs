//! Resolver configuration: credentials, base URL and accepted statuses.

use std::fmt;

use crate::status::AcceptedStatuses;
use crate::{Error, Result};

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://content.guardianapis.com";

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("contentapi-rust/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "CONTENT_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_VAR: &str = "CONTENT_API_URL";

/// Settings shared by every request a [`crate::ContentApiClient`] sends.
#[derive(Clone, PartialEq, Eq)]
pub struct ContentApiConfig {
    api_key: String,
    base_url: String,
    user_agent: String,
    accepted_statuses: AcceptedStatuses,
}

impl ContentApiConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> ContentApiConfigBuilder {
        ContentApiConfigBuilder::new(api_key)
    }

    /// Configuration with the default base URL and the strict status set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `api_key` is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Read `CONTENT_API_KEY` and, when set, `CONTENT_API_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the key is unset or blank, and
    /// [`Error::InvalidUrl`] if the URL does not parse.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_VAR)
            .ok_or_else(|| Error::validation(format!("{API_KEY_VAR} is not set")))?;
        let mut builder = Self::builder(api_key);
        if let Some(base_url) = lookup(BASE_URL_VAR) {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    /// The API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The base URL, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Statuses whose body is decoded.
    #[must_use]
    pub const fn accepted_statuses(&self) -> &AcceptedStatuses {
        &self.accepted_statuses
    }
}

impl fmt::Debug for ContentApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentApiConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("accepted_statuses", &self.accepted_statuses)
            .finish()
    }
}

/// Builder for [`ContentApiConfig`].
#[derive(Clone)]
pub struct ContentApiConfigBuilder {
    api_key: String,
    base_url: Option<String>,
    user_agent: Option<String>,
    accepted_statuses: Option<AcceptedStatuses>,
}

impl ContentApiConfigBuilder {
    /// Start from an API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            user_agent: None,
            accepted_statuses: None,
        }
    }

    /// Set the base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the accepted statuses.
    #[must_use]
    pub fn accepted_statuses(mut self, statuses: AcceptedStatuses) -> Self {
        self.accepted_statuses = Some(statuses);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the API key is blank or the base URL
    /// carries a query string, and [`Error::InvalidUrl`] if the base URL does
    /// not parse.
    pub fn build(self) -> Result<ContentApiConfig> {
        if self.api_key.trim().is_empty() {
            return Err(Error::validation("API key must not be blank"));
        }

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        url::Url::parse(&base_url)?;
        if base_url.contains('?') {
            return Err(Error::validation(format!(
                "base URL `{base_url}` must not contain '?'"
            )));
        }

        Ok(ContentApiConfig {
            api_key: self.api_key,
            base_url,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            accepted_statuses: self.accepted_statuses.unwrap_or_default(),
        })
    }
}

impl fmt::Debug for ContentApiConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentApiConfigBuilder")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("accepted_statuses", &self.accepted_statuses)
            .finish()
    }
}
