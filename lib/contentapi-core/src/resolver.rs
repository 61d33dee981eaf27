//! Turning a query into a typed response with one round trip.
//!
//! [`ContentApiClient`] owns the transport and the configuration. A call
//! builds the URL, performs exactly one `execute`, classifies the status and
//! decodes the body into the response type tied to the query kind.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use tracing::{Instrument, debug, info, info_span, warn};

use crate::config::ContentApiConfig;
use crate::format::{Json, PayloadFormat};
use crate::model::ApiResponse;
use crate::params::{API_KEY, FORMAT, Parameters, redact_api_key};
use crate::query::{
    AtomKind, AtomQuery, AtomUsageQuery, AtomsQuery, CollectionQuery, ContentApiQuery,
    EditionsQuery, ItemQuery, Query, RemovedContentQuery, SearchQuery, SectionsQuery,
    StoriesQuery, TagsQuery, VideoStatsQuery,
};
use crate::status::Classification;
use crate::{Error, HttpClient, Request, Result};

/// Content API client over any [`HttpClient`] and [`PayloadFormat`].
///
/// # Example
///
/// ```no_run
/// # async fn run<C: contentapi_core::HttpClient>(http: C) -> contentapi_core::Result<()> {
/// use contentapi_core::{ContentApiClient, ContentApiConfig};
/// use contentapi_core::query::ShowParameters;
///
/// let client = ContentApiClient::new(http, ContentApiConfig::new("my-key")?);
/// let query = client.item("world/2024/jan/01/example").show_fields("body");
/// let response = client.get(&query).await?;
/// println!("{:?}", response.content.map(|c| c.web_title));
/// # Ok(())
/// # }
/// ```
pub struct ContentApiClient<C, F = Json> {
    http: C,
    config: Arc<ContentApiConfig>,
    injected: Arc<Parameters>,
    format: PhantomData<fn() -> F>,
}

impl<C: Clone, F> Clone for ContentApiClient<C, F> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            config: Arc::clone(&self.config),
            injected: Arc::clone(&self.injected),
            format: PhantomData,
        }
    }
}

impl<C, F> std::fmt::Debug for ContentApiClient<C, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<C: HttpClient> ContentApiClient<C> {
    /// JSON client over `http`.
    #[must_use]
    pub fn new(http: C, config: ContentApiConfig) -> Self {
        Self::with_format(http, config)
    }
}

impl<C: HttpClient, F: PayloadFormat> ContentApiClient<C, F> {
    /// Client decoding payloads with the format `F`.
    #[must_use]
    pub fn with_format(http: C, config: ContentApiConfig) -> Self {
        let injected = Parameters::new()
            .with(API_KEY, config.api_key())
            .with(FORMAT, F::FORMAT);
        Self {
            http,
            config: Arc::new(config),
            injected: Arc::new(injected),
            format: PhantomData,
        }
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &ContentApiConfig {
        &self.config
    }

    /// The base URL queries are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// The underlying transport.
    #[must_use]
    pub const fn http(&self) -> &C {
        &self.http
    }

    /// Item query addressed by id (`base_url/id`).
    #[must_use]
    pub fn item(&self, id: &str) -> ItemQuery {
        ItemQuery::new(self.base_url()).by_id(id)
    }

    /// Item query addressed by full API URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `url` is not under the base URL.
    pub fn item_by_url(&self, url: &str) -> Result<ItemQuery> {
        ItemQuery::new(self.base_url()).by_full_url(url)
    }

    /// Collection query addressed by id (`base_url/collections/id`).
    #[must_use]
    pub fn collection(&self, id: &str) -> CollectionQuery {
        CollectionQuery::new(self.base_url()).by_id(id)
    }

    /// Collection query addressed by full API URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `url` is not under the base URL.
    pub fn collection_by_url(&self, url: &str) -> Result<CollectionQuery> {
        CollectionQuery::new(self.base_url()).by_full_url(url)
    }

    /// Empty content search.
    #[must_use]
    pub fn search(&self) -> SearchQuery {
        SearchQuery::new()
    }

    /// Empty tag search.
    #[must_use]
    pub fn tags(&self) -> TagsQuery {
        TagsQuery::new()
    }

    /// Section listing.
    #[must_use]
    pub fn sections(&self) -> SectionsQuery {
        SectionsQuery::new()
    }

    /// Edition listing.
    #[must_use]
    pub fn editions(&self) -> EditionsQuery {
        EditionsQuery::new()
    }

    /// Removed content listing.
    #[must_use]
    pub fn removed_content(&self) -> RemovedContentQuery {
        RemovedContentQuery::new()
    }

    /// Empty atom search.
    #[must_use]
    pub fn atoms(&self) -> AtomsQuery {
        AtomsQuery::new()
    }

    /// Single atom.
    #[must_use]
    pub fn atom(&self, kind: AtomKind, id: &str) -> AtomQuery {
        AtomQuery::new(kind, id)
    }

    /// Content embedding an atom.
    #[must_use]
    pub fn atom_usage(&self, kind: AtomKind, id: &str) -> AtomUsageQuery {
        AtomUsageQuery::new(kind, id)
    }

    /// Story listing.
    #[must_use]
    pub fn stories(&self) -> StoriesQuery {
        StoriesQuery::new()
    }

    /// Most viewed videos.
    #[must_use]
    pub fn video_stats(&self) -> VideoStatsQuery {
        VideoStatsQuery::new()
    }

    /// The exact URL [`Self::get`] would fetch for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the query has no location or the
    /// location carries a query string.
    pub fn url<Q: ContentApiQuery>(&self, query: &Q) -> Result<String> {
        query.url(self.base_url(), &self.injected)
    }

    /// Fetch `query` and decode the response type tied to its kind.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] before any request for malformed queries,
    /// - transport errors unchanged,
    /// - [`Error::Api`] when the status is not accepted,
    /// - [`Error::Decode`] when an accepted body does not decode.
    pub async fn get<Q: ContentApiQuery>(&self, query: &Q) -> Result<Q::Response> {
        let url = self.url(query)?;
        let span = info_span!(
            "content_api_request",
            kind = %Q::KIND,
            url = %redact_api_key(&url),
        );
        self.fetch(&url).instrument(span).await
    }

    /// Fetch any query, yielding the matching [`ApiResponse`] variant.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn resolve(&self, query: &Query) -> Result<ApiResponse> {
        match query {
            Query::Item(q) => self.get(q).await.map(ApiResponse::from),
            Query::Search(q) => self.get(q).await.map(ApiResponse::from),
            Query::Tags(q) => self.get(q).await.map(ApiResponse::from),
            Query::Sections(q) => self.get(q).await.map(ApiResponse::from),
            Query::Editions(q) => self.get(q).await.map(ApiResponse::from),
            Query::RemovedContent(q) => self.get(q).await.map(ApiResponse::from),
            Query::Atoms(q) => self.get(q).await.map(ApiResponse::from),
            Query::Atom(q) => self.get(q).await.map(ApiResponse::from),
            Query::AtomUsage(q) => self.get(q).await.map(ApiResponse::from),
            Query::Stories(q) => self.get(q).await.map(ApiResponse::from),
            Query::VideoStats(q) => self.get(q).await.map(ApiResponse::from),
            Query::Collection(q) => self.get(q).await.map(ApiResponse::from),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let request = Request::builder(url::Url::parse(url)?)
            .header("User-Agent", self.config.user_agent())
            .header("Accept", F::ACCEPT)
            .build();

        debug!("sending request");
        let start = Instant::now();
        let result = self.http.execute(request).await;
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, elapsed_ms, "transport failure");
                return Err(err);
            }
        };

        let status = response.status();
        match self.config.accepted_statuses().classify(status) {
            Classification::Accept => {
                info!(status, elapsed_ms, "response accepted");
                F::decode(response.body()).inspect_err(|err| {
                    if let Error::Decode { path, message } = err {
                        warn!(path = %path, message = %message, "response body did not decode");
                    }
                })
            }
            Classification::Reject => {
                warn!(status, elapsed_ms, "response rejected");
                let message = response.status_text().to_string();
                Err(Error::api_with_body(status, message, response.into_body()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use assert2::{check, let_assert};
    use bytes::Bytes;

    use super::*;
    use crate::Response;
    use crate::query::{PaginationParameters, Parameterized, ShowParameters};
    use crate::status::AcceptedStatuses;

    const BASE: &str = "https://content.guardianapis.com";

    type Reply = fn() -> Result<Response<Bytes>>;

    /// Records every request and answers with a canned reply.
    struct Recorder {
        reply: Reply,
        requests: Mutex<Vec<Request>>,
    }

    impl Recorder {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<Request> {
            self.requests.lock().expect("lock").clone()
        }
    }

    impl HttpClient for Recorder {
        async fn execute(&self, request: Request) -> Result<Response<Bytes>> {
            self.requests.lock().expect("lock").push(request);
            (self.reply)()
        }
    }

    fn reply(status: u16, body: &'static str) -> Result<Response<Bytes>> {
        Ok(Response::new(status, HashMap::new(), Bytes::from(body)))
    }

    const ITEM_BODY: &str = r#"{"response":{"status":"ok","userTier":"developer","total":1,
        "content":{"id":"world/2024/jan/01/example","type":"article",
        "webTitle":"An example","webUrl":"https://www.theguardian.com/world/2024/jan/01/example",
        "apiUrl":"https://content.guardianapis.com/world/2024/jan/01/example",
        "fields":{"body":"<p>Hello</p>"}}}}"#;

    const SECTIONS_BODY: &str = r#"{"response":{"status":"ok","total":1,"results":[
        {"id":"culture","webTitle":"Culture","webUrl":"https://www.theguardian.com/culture",
         "apiUrl":"https://content.guardianapis.com/culture"}]}}"#;

    fn client(reply: Reply) -> ContentApiClient<Recorder> {
        ContentApiClient::new(
            Recorder::new(reply),
            ContentApiConfig::new("test-key").expect("config"),
        )
    }

    fn permissive_client(reply: Reply) -> ContentApiClient<Recorder> {
        let config = ContentApiConfig::builder("test-key")
            .accepted_statuses(AcceptedStatuses::permissive())
            .build()
            .expect("config");
        ContentApiClient::new(Recorder::new(reply), config)
    }

    #[test]
    fn url_injects_key_and_format() {
        let client = client(|| reply(200, "{}"));
        let query = client.item("world/2024/jan/01/example").show_fields("body");
        insta::assert_snapshot!(
            client.url(&query).expect("url"),
            @"https://content.guardianapis.com/world/2024/jan/01/example?api-key=test-key&format=json&show-fields=body"
        );
    }

    #[test]
    fn injected_parameters_win() {
        let client = client(|| reply(200, "{}"));
        let query = client
            .search()
            .with_parameter("api-key", "other")
            .with_parameter("format", "xml");
        assert_eq!(
            client.url(&query).expect("url"),
            format!("{BASE}/search?api-key=test-key&format=json")
        );
    }

    #[tokio::test]
    async fn accepted_item_is_decoded() {
        let client = client(|| reply(200, ITEM_BODY));
        let query = client.item("world/2024/jan/01/example").show_fields("body");

        let response = client.get(&query).await.expect("response");
        let_assert!(Some(content) = response.content);
        check!(content.web_title == "An example");
        let_assert!(Some(fields) = content.fields);
        check!(fields.body.as_deref() == Some("<p>Hello</p>"));
    }

    #[tokio::test]
    async fn exactly_one_request_with_headers() {
        let client = client(|| reply(200, SECTIONS_BODY));
        client.get(&client.sections()).await.expect("response");

        let requests = client.http().requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method(), http::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://content.guardianapis.com/sections?api-key=test-key&format=json"
        );
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert!(
            request
                .header("User-Agent")
                .is_some_and(|ua| ua.starts_with("contentapi-rust/"))
        );
    }

    #[tokio::test]
    async fn not_found_is_an_api_error() {
        let client = client(|| {
            reply(
                404,
                r#"{"response":{"status":"error","message":"The requested resource could not be found."}}"#,
            )
        });

        let err = client
            .get(&client.item("no/such/item"))
            .await
            .expect_err("404");
        let_assert!(Error::Api { status, message, .. } = &err);
        check!(*status == 404);
        check!(message == "Not Found");
        let_assert!(Some(payload) = err.api_error_body());
        check!(payload.message == "The requested resource could not be found.");
    }

    #[tokio::test]
    async fn redirect_status_depends_on_accepted_set() {
        let strict = client(|| reply(302, SECTIONS_BODY));
        let err = strict.get(&strict.sections()).await.expect_err("strict");
        check!(err.status() == Some(302));

        let permissive = permissive_client(|| reply(302, SECTIONS_BODY));
        let response = permissive
            .get(&permissive.sections())
            .await
            .expect("permissive");
        check!(response.results[0].id == "culture");
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let client = client(|| reply(200, r#"{"response":{"status":"ok","results":[{"id":1}]}}"#));
        let err = client.get(&client.sections()).await.expect_err("decode");
        check!(err.is_decode());
        check!(err.status().is_none());
    }

    #[tokio::test]
    async fn transport_errors_pass_through() {
        let client = client(|| Err(Error::Timeout));
        let err = client.get(&client.search()).await.expect_err("timeout");
        check!(err.is_timeout());
        check!(client.http().requests().len() == 1);
    }

    #[tokio::test]
    async fn missing_location_fails_before_any_request() {
        let client = client(|| reply(200, ITEM_BODY));
        let query = ItemQuery::new(client.base_url()).show_fields("body");

        let err = client.get(&query).await.expect_err("no location");
        check!(err.is_validation());
        check!(client.http().requests().is_empty());
    }

    #[tokio::test]
    async fn resolve_dispatches_on_query_kind() {
        let client = client(|| reply(200, SECTIONS_BODY));
        let query = Query::from(client.sections());

        let response = client.resolve(&query).await.expect("response");
        check!(response.kind() == query.kind());
        let_assert!(ApiResponse::Sections(sections) = response);
        check!(sections.total == 1);
    }

    #[tokio::test]
    async fn resolve_uses_the_query_schema() {
        let client = client(|| {
            reply(
                200,
                r#"{"response":{"status":"ok","total":2,"startIndex":1,"pageSize":2,
                "currentPage":1,"pages":5,"results":["a/1","b/2"]}}"#,
            )
        });
        let query = Query::from(client.removed_content().page_size(2));

        let_assert!(Ok(ApiResponse::RemovedContent(removed)) = client.resolve(&query).await);
        check!(removed.results == ["a/1", "b/2"]);
    }

    #[test]
    fn debug_hides_api_key() {
        let client = client(|| reply(200, "{}"));
        let debug = format!("{client:?}");
        check!(!debug.contains("test-key"));
    }
}
