//! Queries against fixed endpoints.

use super::{
    ContentApiQuery, FilterExtendedParameters, FilterParameters, FilterSearchParameters,
    FilterTagParameters, OrderByParameter, PaginationParameters, Parameterized, QueryKind,
    ShowParameters, parameterized,
};
use crate::Result;
use crate::model::{
    EditionsResponse, RemovedContentResponse, SearchResponse, SectionsResponse, StoriesResponse,
    TagsResponse, VideoStatsResponse,
};
use crate::params::{ParameterValue, Parameters};

/// Declares a query type bound to a fixed endpoint path.
macro_rules! endpoint_query {
    ($(#[$meta:meta])* $name:ident, $path:literal, $kind:ident, $response:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            parameters: Parameters,
        }

        impl $name {
            #[doc = concat!("An empty query against `", $path, "`.")]
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }
        }

        parameterized!($name);

        impl ContentApiQuery for $name {
            type Response = $response;
            const KIND: QueryKind = QueryKind::$kind;

            fn location(&self, base_url: &str) -> Result<String> {
                Ok(format!("{}{}", base_url.trim_end_matches('/'), $path))
            }
        }
    };
}

endpoint_query!(
    /// Content search (`/search`).
    SearchQuery,
    "/search",
    Search,
    SearchResponse
);

impl ShowParameters for SearchQuery {}
impl PaginationParameters for SearchQuery {}
impl OrderByParameter for SearchQuery {}
impl FilterParameters for SearchQuery {}
impl FilterExtendedParameters for SearchQuery {}
impl FilterSearchParameters for SearchQuery {}

endpoint_query!(
    /// Tag search (`/tags`).
    TagsQuery,
    "/tags",
    Tags,
    TagsResponse
);

impl ShowParameters for TagsQuery {}
impl PaginationParameters for TagsQuery {}
impl FilterParameters for TagsQuery {}
impl FilterSearchParameters for TagsQuery {}
impl FilterTagParameters for TagsQuery {}

endpoint_query!(
    /// Section listing (`/sections`).
    SectionsQuery,
    "/sections",
    Sections,
    SectionsResponse
);

impl FilterSearchParameters for SectionsQuery {}
impl FilterTagParameters for SectionsQuery {}

endpoint_query!(
    /// Edition listing (`/editions`).
    EditionsQuery,
    "/editions",
    Editions,
    EditionsResponse
);

impl FilterSearchParameters for EditionsQuery {}

endpoint_query!(
    /// Ids of content taken down or expired (`/content/removed`).
    RemovedContentQuery,
    "/content/removed",
    RemovedContent,
    RemovedContentResponse
);

impl RemovedContentQuery {
    /// Why content was removed (`expired`, `taken-down`, `unpublished`).
    #[must_use]
    pub fn reason(self, reason: impl Into<ParameterValue>) -> Self {
        self.with_parameter("reason", reason)
    }
}

impl PaginationParameters for RemovedContentQuery {}
impl OrderByParameter for RemovedContentQuery {}
impl FilterExtendedParameters for RemovedContentQuery {}

endpoint_query!(
    /// Story listing (`/stories`).
    StoriesQuery,
    "/stories",
    Stories,
    StoriesResponse
);

impl ShowParameters for StoriesQuery {}
impl PaginationParameters for StoriesQuery {}
impl OrderByParameter for StoriesQuery {}

/// Most viewed videos (`/stats/videos[/edition][/section]`).
///
/// Edition and section narrow the statistics and are sent as path segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoStatsQuery {
    edition: Option<String>,
    section: Option<String>,
    parameters: Parameters,
}

impl VideoStatsQuery {
    /// Statistics across all editions and sections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrow to an edition (`uk`, `us`, `au`).
    #[must_use]
    pub fn edition(self, edition: impl Into<String>) -> Self {
        Self {
            edition: Some(edition.into()),
            ..self
        }
    }

    /// Narrow to a section (`film`, `world` ...).
    #[must_use]
    pub fn section(self, section: impl Into<String>) -> Self {
        Self {
            section: Some(section.into()),
            ..self
        }
    }
}

parameterized!(VideoStatsQuery);

impl ContentApiQuery for VideoStatsQuery {
    type Response = VideoStatsResponse;
    const KIND: QueryKind = QueryKind::VideoStats;

    fn location(&self, base_url: &str) -> Result<String> {
        let mut location = format!("{}/stats/videos", base_url.trim_end_matches('/'));
        for segment in [&self.edition, &self.section].into_iter().flatten() {
            location.push('/');
            location.push_str(segment);
        }
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::OrderBy;

    const BASE: &str = "https://content.guardianapis.com";

    #[test]
    fn fixed_endpoint_locations() {
        assert_eq!(SearchQuery::new().location(BASE).expect("ok"), format!("{BASE}/search"));
        assert_eq!(TagsQuery::new().location(BASE).expect("ok"), format!("{BASE}/tags"));
        assert_eq!(
            SectionsQuery::new().location(BASE).expect("ok"),
            format!("{BASE}/sections")
        );
        assert_eq!(
            EditionsQuery::new().location(BASE).expect("ok"),
            format!("{BASE}/editions")
        );
        assert_eq!(
            RemovedContentQuery::new().location(BASE).expect("ok"),
            format!("{BASE}/content/removed")
        );
        assert_eq!(
            StoriesQuery::new().location(&format!("{BASE}/")).expect("ok"),
            format!("{BASE}/stories")
        );
    }

    #[test]
    fn search_url() {
        let query = SearchQuery::new()
            .q("climate change")
            .section("environment")
            .order_by(OrderBy::Newest)
            .page_size(10);
        let injected = Parameters::new().with("api-key", "test").with("format", "json");

        assert_eq!(
            query.url(BASE, &injected).expect("url"),
            "https://content.guardianapis.com/search?api-key=test&format=json&order-by=newest&page-size=10&q=climate%20change&section=environment"
        );
    }

    #[test]
    fn tags_type_filter() {
        let query = TagsQuery::new().q("green").tag_type("keyword").page(2);
        assert_eq!(
            query.parameters().to_query_string(),
            "page=2&q=green&type=keyword"
        );
    }

    #[test]
    fn removed_content_reason() {
        let query = RemovedContentQuery::new().reason("expired").page_size(100);
        assert_eq!(
            query.parameters().to_query_string(),
            "page-size=100&reason=expired"
        );
    }

    #[test]
    fn video_stats_path_segments() {
        assert_eq!(
            VideoStatsQuery::new().location(BASE).expect("ok"),
            format!("{BASE}/stats/videos")
        );
        assert_eq!(
            VideoStatsQuery::new().edition("uk").location(BASE).expect("ok"),
            format!("{BASE}/stats/videos/uk")
        );
        assert_eq!(
            VideoStatsQuery::new()
                .edition("uk")
                .section("film")
                .location(BASE)
                .expect("ok"),
            format!("{BASE}/stats/videos/uk/film")
        );
        assert_eq!(
            VideoStatsQuery::new().section("film").location(BASE).expect("ok"),
            format!("{BASE}/stats/videos/film")
        );
    }

    #[test]
    fn generic_parameter_overwrites() {
        let query = SectionsQuery::new()
            .with_parameter("q", "business")
            .with_parameter("q", "money");
        assert_eq!(query.parameters().to_query_string(), "q=money");
    }
}
