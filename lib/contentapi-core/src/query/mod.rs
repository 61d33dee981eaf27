//! Immutable query values, one type per endpoint.
//!
//! Every setter consumes the query and returns the updated value, so a query
//! can be cloned and refined as a template:
//!
//! ```
//! use contentapi_core::query::{PaginationParameters, SearchQuery, ShowParameters};
//!
//! let template = SearchQuery::new().show_fields("headline").page_size(20);
//! let first = template.clone().page(1);
//! let second = template.page(2);
//! assert_ne!(first, second);
//! ```

mod atoms;
mod endpoints;
mod families;
mod item;

use derive_more::{Display, From};
use serde::de::DeserializeOwned;

pub use atoms::{AtomKind, AtomQuery, AtomUsageQuery, AtomsQuery};
pub use endpoints::{
    EditionsQuery, RemovedContentQuery, SearchQuery, SectionsQuery, StoriesQuery, TagsQuery,
    VideoStatsQuery,
};
pub use families::{
    FilterExtendedParameters, FilterParameters, FilterSearchParameters, FilterTagParameters,
    OrderBy, OrderByParameter, OrderDate, PaginationParameters, ShowExtendedParameters,
    ShowParameters, UseDate,
};
pub use item::{CollectionQuery, ItemQuery};

use crate::params::{ParameterValue, Parameters, build_url};
use crate::Result;

/// A query that carries a set of named parameters.
pub trait Parameterized: Sized {
    /// The parameters set so far.
    fn parameters(&self) -> &Parameters;

    /// Return the query with `name` bound to `value`, replacing any earlier
    /// value for the same name.
    #[must_use]
    fn with_parameter(self, name: impl Into<String>, value: impl Into<ParameterValue>) -> Self;
}

/// A query the resolver knows how to fetch.
pub trait ContentApiQuery: Parameterized + Send + Sync {
    /// Response type the payload decodes into.
    type Response: DeserializeOwned + Send;

    /// Tag naming this query kind.
    const KIND: QueryKind;

    /// Absolute location (without query string) of the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] if the query has no location yet.
    fn location(&self, base_url: &str) -> Result<String>;

    /// Canonical URL for this query, including `injected` parameters.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] if the location is missing or
    /// carries a query string.
    fn url(&self, base_url: &str, injected: &Parameters) -> Result<String> {
        build_url(&self.location(base_url)?, self.parameters(), injected)
    }
}

/// Implements [`Parameterized`] for query structs with a `parameters` field.
macro_rules! parameterized {
    ($($query:ty),+ $(,)?) => {
        $(
            impl $crate::query::Parameterized for $query {
                fn parameters(&self) -> &$crate::params::Parameters {
                    &self.parameters
                }

                fn with_parameter(
                    mut self,
                    name: impl Into<String>,
                    value: impl Into<$crate::params::ParameterValue>,
                ) -> Self {
                    self.parameters = self.parameters.with(name, value);
                    self
                }
            }
        )+
    };
}
pub(crate) use parameterized;

/// The kind of a query, used for dispatch and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum QueryKind {
    /// Single item (content, tag, section or edition page).
    #[display("item")]
    Item,
    /// Content search.
    #[display("search")]
    Search,
    /// Tag search.
    #[display("tags")]
    Tags,
    /// Section listing.
    #[display("sections")]
    Sections,
    /// Edition listing.
    #[display("editions")]
    Editions,
    /// Removed content listing.
    #[display("removed_content")]
    RemovedContent,
    /// Atom search.
    #[display("atoms")]
    Atoms,
    /// Single atom.
    #[display("atom")]
    Atom,
    /// Content using an atom.
    #[display("atom_usage")]
    AtomUsage,
    /// Story listing.
    #[display("stories")]
    Stories,
    /// Most viewed videos.
    #[display("video_stats")]
    VideoStats,
    /// Front collection.
    #[display("collection")]
    Collection,
}

/// Any query, for callers that pick the endpoint at runtime.
///
/// Resolving a [`Query`] yields the [`crate::model::ApiResponse`] variant matching
/// the query's kind.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum Query {
    /// See [`ItemQuery`].
    Item(ItemQuery),
    /// See [`SearchQuery`].
    Search(SearchQuery),
    /// See [`TagsQuery`].
    Tags(TagsQuery),
    /// See [`SectionsQuery`].
    Sections(SectionsQuery),
    /// See [`EditionsQuery`].
    Editions(EditionsQuery),
    /// See [`RemovedContentQuery`].
    RemovedContent(RemovedContentQuery),
    /// See [`AtomsQuery`].
    Atoms(AtomsQuery),
    /// See [`AtomQuery`].
    Atom(AtomQuery),
    /// See [`AtomUsageQuery`].
    AtomUsage(AtomUsageQuery),
    /// See [`StoriesQuery`].
    Stories(StoriesQuery),
    /// See [`VideoStatsQuery`].
    VideoStats(VideoStatsQuery),
    /// See [`CollectionQuery`].
    Collection(CollectionQuery),
}

impl Query {
    /// The kind of the wrapped query.
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

    /// Parameters of the wrapped query.
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        match self {
            Self::Item(q) => q.parameters(),
            Self::Search(q) => q.parameters(),
            Self::Tags(q) => q.parameters(),
            Self::Sections(q) => q.parameters(),
            Self::Editions(q) => q.parameters(),
            Self::RemovedContent(q) => q.parameters(),
            Self::Atoms(q) => q.parameters(),
            Self::Atom(q) => q.parameters(),
            Self::AtomUsage(q) => q.parameters(),
            Self::Stories(q) => q.parameters(),
            Self::VideoStats(q) => q.parameters(),
            Self::Collection(q) => q.parameters(),
        }
    }

    /// Canonical URL of the wrapped query.
    ///
    /// # Errors
    ///
    /// See [`ContentApiQuery::url`].
    pub fn url(&self, base_url: &str, injected: &Parameters) -> Result<String> {
        match self {
            Self::Item(q) => q.url(base_url, injected),
            Self::Search(q) => q.url(base_url, injected),
            Self::Tags(q) => q.url(base_url, injected),
            Self::Sections(q) => q.url(base_url, injected),
            Self::Editions(q) => q.url(base_url, injected),
            Self::RemovedContent(q) => q.url(base_url, injected),
            Self::Atoms(q) => q.url(base_url, injected),
            Self::Atom(q) => q.url(base_url, injected),
            Self::AtomUsage(q) => q.url(base_url, injected),
            Self::Stories(q) => q.url(base_url, injected),
            Self::VideoStats(q) => q.url(base_url, injected),
            Self::Collection(q) => q.url(base_url, injected),
        }
    }
}
