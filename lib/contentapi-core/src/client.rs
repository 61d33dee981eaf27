//! The transport port.
//!
//! [`HttpClient`] is the only capability the core needs from the outside
//! world: perform a `GET` and hand back status, headers and body. The
//! `contentapi` crate ships a hyper-based implementation; tests use
//! in-memory stubs.

use std::collections::HashMap;
use std::future::Future;

use bytes::Bytes;

use crate::{Request, Response, Result};

/// Core HTTP client trait.
///
/// Implementations must not retry, and must return non-2xx outcomes as
/// ordinary [`Response`] values: classifying them is the resolver's job.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures:
    /// - [`crate::Error::Connection`] (DNS, connection refused, broken body)
    /// - [`crate::Error::Tls`]
    /// - [`crate::Error::Timeout`]
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

/// Extension trait for [`HttpClient`] with convenience methods.
pub trait HttpClientExt: HttpClient {
    /// Execute a GET request against `url` with the given headers.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or the request fails.
    fn get(
        &self,
        url: &str,
        headers: HashMap<String, String>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        let request = url::Url::parse(url)
            .map(|url| Request::builder(url).headers(headers).build());
        async move { self.execute(request?).await }
    }
}

// Blanket implementation for all HttpClient implementors
impl<T: HttpClient> HttpClientExt for T {}

impl<T: HttpClient> HttpClient for &T {
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        (**self).execute(request)
    }
}

impl<T: HttpClient> HttpClient for std::sync::Arc<T> {
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        (**self).execute(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl HttpClient for Echo {
        async fn execute(&self, request: Request) -> Result<Response<Bytes>> {
            let body = Bytes::from(request.url().to_string());
            Ok(Response::new(200, request.headers().clone(), body))
        }
    }

    #[tokio::test]
    async fn get_builds_request() {
        let headers = HashMap::from([("Accept".to_string(), "application/json".to_string())]);
        let response = Echo
            .get("https://content.guardianapis.com/sections", headers)
            .await
            .expect("response");

        assert_eq!(response.status(), 200);
        assert_eq!(response.header("Accept"), Some("application/json"));
        assert_eq!(
            response.body().as_ref(),
            b"https://content.guardianapis.com/sections"
        );
    }

    #[tokio::test]
    async fn get_rejects_unparseable_url() {
        let err = Echo
            .get("not a url", HashMap::new())
            .await
            .expect_err("invalid url");
        assert!(matches!(err, crate::Error::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn shared_clients_are_clients() {
        let shared = std::sync::Arc::new(Echo);
        let response = shared
            .get("https://content.guardianapis.com/", HashMap::new())
            .await
            .expect("response");
        assert!(response.is_success());
    }
}
