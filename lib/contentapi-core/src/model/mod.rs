//! Typed responses, one per query kind, and the entities they carry.
//!
//! Field names follow the API's camelCase JSON; instants decode into
//! `chrono::DateTime<Utc>`.

mod entities;
mod responses;

use derive_more::From;

pub use entities::{
    ApiErrorBody, Asset, Atom, Collection, Content, ContentFields, Edition, Element,
    MostViewedVideo, Reference, Section, Story, Tag,
};
pub use responses::{
    AtomResponse, AtomUsageResponse, AtomsResponse, CollectionResponse, EditionsResponse,
    ItemResponse, RemovedContentResponse, SearchResponse, SectionsResponse, StoriesResponse,
    TagsResponse, VideoStatsResponse,
};

use crate::query::QueryKind;

/// Paging metadata of a list response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Total number of results.
    pub total: u64,
    /// Index of the first result on this page.
    pub start_index: u64,
    /// Results per page.
    pub page_size: u32,
    /// 1-based current page.
    pub current_page: u32,
    /// Number of pages.
    pub pages: u32,
}

/// A response split into pages.
pub trait Paginated {
    /// Paging metadata.
    fn pagination(&self) -> Pagination;

    /// Whether a page follows this one.
    fn has_next_page(&self) -> bool {
        let pagination = self.pagination();
        pagination.current_page < pagination.pages
    }

    /// Number of the following page, if any; feed it to `page(..)` on the
    /// same query.
    fn next_page(&self) -> Option<u32> {
        self.has_next_page()
            .then(|| self.pagination().current_page + 1)
    }
}

/// Any response, as produced by resolving a [`crate::query::Query`].
#[derive(Debug, Clone, PartialEq, From)]
pub enum ApiResponse {
    /// See [`ItemResponse`].
    Item(ItemResponse),
    /// See [`SearchResponse`].
    Search(SearchResponse),
    /// See [`TagsResponse`].
    Tags(TagsResponse),
    /// See [`SectionsResponse`].
    Sections(SectionsResponse),
    /// See [`EditionsResponse`].
    Editions(EditionsResponse),
    /// See [`RemovedContentResponse`].
    RemovedContent(RemovedContentResponse),
    /// See [`AtomsResponse`].
    Atoms(AtomsResponse),
    /// See [`AtomResponse`].
    Atom(AtomResponse),
    /// See [`AtomUsageResponse`].
    AtomUsage(AtomUsageResponse),
    /// See [`StoriesResponse`].
    Stories(StoriesResponse),
    /// See [`VideoStatsResponse`].
    VideoStats(VideoStatsResponse),
    /// See [`CollectionResponse`].
    Collection(CollectionResponse),
}

impl ApiResponse {
    /// Kind of the query this response answers.
    #[must_use]
    pub const fn kind(&self) -> QueryKind {
        match self {
            Self::Item(_) => QueryKind::Item,
            Self::Search(_) => QueryKind::Search,
            Self::Tags(_) => QueryKind::Tags,
            Self::Sections(_) => QueryKind::Sections,
            Self::Editions(_) => QueryKind::Editions,
            Self::RemovedContent(_) => QueryKind::RemovedContent,
            Self::Atoms(_) => QueryKind::Atoms,
            Self::Atom(_) => QueryKind::Atom,
            Self::AtomUsage(_) => QueryKind::AtomUsage,
            Self::Stories(_) => QueryKind::Stories,
            Self::VideoStats(_) => QueryKind::VideoStats,
            Self::Collection(_) => QueryKind::Collection,
        }
    }
}
