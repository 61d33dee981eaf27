//! Outgoing requests handed to the transport.
//!
//! The Content API is read-only, so every request is a `GET` made of a URL
//! and a header map.
//!
//! # Example
//!
//! ```
//! use contentapi_core::Request;
//!
//! let request = Request::builder("https://content.guardianapis.com/search".parse().unwrap())
//!     .header("Accept", "application/json")
//!     .build();
//! assert_eq!(request.header("Accept"), Some("application/json"));
//! ```

use std::collections::HashMap;

/// An HTTP `GET` request.
#[derive(Debug, Clone)]
pub struct Request {
    url: url::Url,
    headers: HashMap<String, String>,
}

impl Request {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(url: url::Url) -> RequestBuilder {
        RequestBuilder::new(url)
    }

    /// HTTP method, always `GET`.
    #[must_use]
    pub fn method(&self) -> http::Method {
        http::Method::GET
    }

    /// Request URL.
    #[must_use]
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Consume into (url, headers).
    #[must_use]
    pub fn into_parts(self) -> (url::Url, HashMap<String, String>) {
        (self.url, self.headers)
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: url::Url,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(url: url::Url) -> Self {
        Self {
            url,
            headers: HashMap::new(),
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets multiple headers.
    #[must_use]
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request {
        Request {
            url: self.url,
            headers: self.headers,
        }
    }
}
