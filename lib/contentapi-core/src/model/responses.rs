//! One response type per query kind.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::{
    Atom, Collection, Content, Edition, MostViewedVideo, Pagination, Section, Story, Tag,
};

/// Implements [`super::Paginated`] for responses carrying paging fields.
macro_rules! paginated {
    ($($response:ty),+ $(,)?) => {
        $(
            impl super::Paginated for $response {
                fn pagination(&self) -> Pagination {
                    Pagination {
                        total: self.total,
                        start_index: self.start_index,
                        page_size: self.page_size,
                        current_page: self.current_page,
                        pages: self.pages,
                    }
                }
            }
        )+
    };
}

/// Response to an [`crate::query::ItemQuery`].
///
/// Exactly one of `content`, `tag`, `section` or `edition` is set,
/// depending on what the location names. Fronts (tag, section, edition)
/// also list `results`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    /// `ok` on success.
    pub status: String,
    /// Access tier of the API key.
    #[serde(default)]
    pub user_tier: Option<String>,
    /// Total number of results.
    #[serde(default)]
    pub total: u64,
    /// Index of the first result on this page.
    #[serde(default)]
    pub start_index: u64,
    /// Results per page.
    #[serde(default)]
    pub page_size: u32,
    /// 1-based current page.
    #[serde(default)]
    pub current_page: u32,
    /// Number of pages.
    #[serde(default)]
    pub pages: u32,
    /// The content, when the location names a piece of content.
    #[serde(default)]
    pub content: Option<Content>,
    /// The tag, when the location names a tag.
    #[serde(default)]
    pub tag: Option<Tag>,
    /// The section, when the location names a section.
    #[serde(default)]
    pub section: Option<Section>,
    /// The edition, when the location names an edition.
    #[serde(default)]
    pub edition: Option<Edition>,
    /// Content listed on the front.
    #[serde(default)]
    pub results: Vec<Content>,
    /// Leading content of the front.
    #[serde(default)]
    pub lead_content: Vec<Content>,
    /// Editors' picks (`show-editors-picks`).
    #[serde(default)]
    pub editors_picks: Vec<Content>,
    /// Most viewed content (`show-most-viewed`).
    #[serde(default)]
    pub most_viewed: Vec<Content>,
    /// Related content (`show-related`).
    #[serde(default)]
    pub related_content: Vec<Content>,
    /// Story package (`show-story-package`).
    #[serde(default)]
    pub story_package: Vec<Content>,
}

/// Response to a [`crate::query::SearchQuery`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// `ok` on success.
    pub status: String,
    /// Access tier of the API key.
    #[serde(default)]
    pub user_tier: Option<String>,
    /// Total number of results.
    #[serde(default)]
    pub total: u64,
    /// Index of the first result on this page.
    #[serde(default)]
    pub start_index: u64,
    /// Results per page.
    #[serde(default)]
    pub page_size: u32,
    /// 1-based current page.
    #[serde(default)]
    pub current_page: u32,
    /// Number of pages.
    #[serde(default)]
    pub pages: u32,
    /// Effective ordering.
    #[serde(default)]
    pub order_by: Option<String>,
    /// Matching content.
    #[serde(default)]
    pub results: Vec<Content>,
}

/// Response to a [`crate::query::TagsQuery`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagsResponse {
    /// `ok` on success.
    pub status: String,
    /// Access tier of the API key.
    #[serde(default)]
    pub user_tier: Option<String>,
    /// Total number of results.
    #[serde(default)]
    pub total: u64,
    /// Index of the first result on this page.
    #[serde(default)]
    pub start_index: u64,
    /// Results per page.
    #[serde(default)]
    pub page_size: u32,
    /// 1-based current page.
    #[serde(default)]
    pub current_page: u32,
    /// Number of pages.
    #[serde(default)]
    pub pages: u32,
    /// Matching tags.
    #[serde(default)]
    pub results: Vec<Tag>,
}

/// Response to a [`crate::query::SectionsQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionsResponse {
    /// `ok` on success.
    pub status: String,
    /// Access tier of the API key.
    #[serde(default)]
    pub user_tier: Option<String>,
    /// Number of sections.
    #[serde(default)]
    pub total: u64,
    /// Matching sections.
    #[serde(default)]
    pub results: Vec<Section>,
}

/// Response to an [`crate::query::EditionsQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditionsResponse {
    /// `ok` on success.
    pub status: String,
    /// Access tier of the API key.
    #[serde(default)]
    pub user_tier: Option<String>,
    /// Number of editions.
    #[serde(default)]
    pub total: u64,
    /// Matching editions.
    #[serde(default)]
    pub results: Vec<Edition>,
}

/// Response to a [`crate::query::RemovedContentQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovedContentResponse {
    /// `ok` on success.
    pub status: String,
    /// Access tier of the API key.
    #[serde(default)]
    pub user_tier: Option<String>,
    /// Total number of results.
    #[serde(default)]
    pub total: u64,
    /// Index of the first result on this page.
    #[serde(default)]
    pub start_index: u64,
    /// Results per page.
    #[serde(default)]
    pub page_size: u32,
    /// 1-based current page.
    #[serde(default)]
    pub current_page: u32,
    /// Number of pages.
    #[serde(default)]
    pub pages: u32,
    /// Ids of removed content.
    #[serde(default)]
    pub results: Vec<String>,
}

/// Response to an [`crate::query::AtomsQuery`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomsResponse {
    /// `ok` on success.
    pub status: String,
    /// Access tier of the API key.
    #[serde(default)]
    pub user_tier: Option<String>,
    /// Total number of results.
    #[serde(default)]
    pub total: u64,
    /// Index of the first result on this page.
    #[serde(default)]
    pub start_index: u64,
    /// Results per page.
    #[serde(default)]
    pub page_size: u32,
    /// 1-based current page.
    #[serde(default)]
    pub current_page: u32,
    /// Number of pages.
    #[serde(default)]
    pub pages: u32,
    /// Matching atoms.
    #[serde(default)]
    pub results: Vec<Atom>,
}

/// Response to an [`crate::query::AtomQuery`].
///
/// The API keys the atom by its type (`{"quiz": {...}}`); the entry holding
/// an `atomType` is picked whatever its key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawAtomResponse")]
pub struct AtomResponse {
    /// `ok` on success.
    pub status: String,
    /// Access tier of the API key.
    pub user_tier: Option<String>,
    /// Key the atom was found under.
    pub key: String,
    /// The atom.
    pub atom: Atom,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAtomResponse {
    status: String,
    #[serde(default)]
    user_tier: Option<String>,
    #[serde(flatten)]
    entries: BTreeMap<String, Value>,
}

impl TryFrom<RawAtomResponse> for AtomResponse {
    type Error = String;

    fn try_from(raw: RawAtomResponse) -> Result<Self, Self::Error> {
        let (key, value) = raw
            .entries
            .into_iter()
            .find(|(_, value)| value.get("atomType").is_some())
            .ok_or_else(|| "no atom entry (object with `atomType`) in response".to_string())?;
        let atom = serde_json::from_value(value).map_err(|e| format!("{key}: {e}"))?;
        Ok(Self {
            status: raw.status,
            user_tier: raw.user_tier,
            key,
            atom,
        })
    }
}

/// Response to an [`crate::query::AtomUsageQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomUsageResponse {
    /// `ok` on success.
    pub status: String,
    /// Access tier of the API key.
    #[serde(default)]
    pub user_tier: Option<String>,
    /// Total number of results.
    #[serde(default)]
    pub total: u64,
    /// Index of the first result on this page.
    #[serde(default)]
    pub start_index: u64,
    /// Results per page.
    #[serde(default)]
    pub page_size: u32,
    /// 1-based current page.
    #[serde(default)]
    pub current_page: u32,
    /// Number of pages.
    #[serde(default)]
    pub pages: u32,
    /// Ids of content embedding the atom.
    #[serde(default)]
    pub results: Vec<String>,
}

/// Response to a [`crate::query::StoriesQuery`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoriesResponse {
    /// `ok` on success.
    pub status: String,
    /// Access tier of the API key.
    #[serde(default)]
    pub user_tier: Option<String>,
    /// Total number of results.
    #[serde(default)]
    pub total: u64,
    /// Index of the first result on this page.
    #[serde(default)]
    pub start_index: u64,
    /// Results per page.
    #[serde(default)]
    pub page_size: u32,
    /// 1-based current page.
    #[serde(default)]
    pub current_page: u32,
    /// Number of pages.
    #[serde(default)]
    pub pages: u32,
    /// Matching stories.
    #[serde(default)]
    pub results: Vec<Story>,
}

/// Response to a [`crate::query::VideoStatsQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatsResponse {
    /// `ok` on success.
    pub status: String,
    /// Access tier of the API key.
    #[serde(default)]
    pub user_tier: Option<String>,
    /// Videos ordered by view count.
    #[serde(default)]
    pub most_viewed: Vec<MostViewedVideo>,
}

/// Response to a [`crate::query::CollectionQuery`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResponse {
    /// `ok` on success.
    pub status: String,
    /// Access tier of the API key.
    #[serde(default)]
    pub user_tier: Option<String>,
    /// The collection.
    pub collection: Collection,
}

paginated!(
    ItemResponse,
    SearchResponse,
    TagsResponse,
    RemovedContentResponse,
    AtomsResponse,
    AtomUsageResponse,
    StoriesResponse,
);
