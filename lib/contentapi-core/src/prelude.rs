//! Prelude module for convenient imports.
//!
//! Brings the client, the query types and every parameter family into
//! scope:
//!
//! ```
//! use contentapi_core::prelude::*;
//!
//! let query = SearchQuery::new().q("football").order_by(OrderBy::Newest).page(2);
//! assert_eq!(query.parameters().len(), 3);
//! ```

pub use crate::model::{ApiResponse, Paginated};
pub use crate::query::{
    AtomKind, AtomQuery, AtomUsageQuery, AtomsQuery, CollectionQuery, ContentApiQuery,
    EditionsQuery, FilterExtendedParameters, FilterParameters, FilterSearchParameters,
    FilterTagParameters, ItemQuery, OrderBy, OrderByParameter, OrderDate, PaginationParameters,
    Parameterized, Query, QueryKind, RemovedContentQuery, SearchQuery, SectionsQuery,
    ShowExtendedParameters, ShowParameters, StoriesQuery, TagsQuery, UseDate, VideoStatsQuery,
};
pub use crate::{
    AcceptedStatuses, ContentApiClient, ContentApiConfig, Error, HttpClient, HttpClientExt, Json,
    PayloadFormat, Request, Response, Result,
};
