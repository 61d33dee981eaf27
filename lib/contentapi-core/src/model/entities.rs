//! Entities embedded in responses.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// A piece of content (article, liveblog, gallery, video ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Path of the content, e.g. `world/2024/jan/01/example`.
    pub id: String,
    /// Content type (`article`, `liveblog`, `gallery` ...).
    #[serde(rename = "type")]
    pub content_type: String,
    /// Id of the owning section.
    #[serde(default)]
    pub section_id: Option<String>,
    /// Display name of the owning section.
    #[serde(default)]
    pub section_name: Option<String>,
    /// Web publication instant.
    #[serde(default)]
    pub web_publication_date: Option<DateTime<Utc>>,
    /// Title on the website.
    pub web_title: String,
    /// Website URL.
    pub web_url: String,
    /// API URL of this item.
    pub api_url: String,
    /// Fields requested with `show-fields`.
    #[serde(default)]
    pub fields: Option<ContentFields>,
    /// Tags requested with `show-tags`.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Elements requested with `show-elements`.
    #[serde(default)]
    pub elements: Vec<Element>,
    /// References requested with `show-references`.
    #[serde(default)]
    pub references: Vec<Reference>,
    /// Body and main blocks requested with `show-blocks`.
    #[serde(default)]
    pub blocks: Option<Value>,
    /// Atoms requested with `show-atoms`, grouped by atom type.
    #[serde(default)]
    pub atoms: Option<Value>,
    /// Syndication rights requested with `show-rights`.
    #[serde(default)]
    pub rights: Option<Value>,
    /// Owning section requested with `show-section`.
    #[serde(default)]
    pub section: Option<Section>,
    /// Whether this is hosted (paid) content.
    #[serde(default)]
    pub is_hosted: bool,
    /// Pillar id (`pillar/news` ...).
    #[serde(default)]
    pub pillar_id: Option<String>,
    /// Pillar name (`News` ...).
    #[serde(default)]
    pub pillar_name: Option<String>,
}

/// Optional fields of a [`Content`].
///
/// The API sends every field as a string; well-known ones have a slot,
/// anything else lands in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFields {
    /// Headline.
    #[serde(default)]
    pub headline: Option<String>,
    /// Standfirst (HTML).
    #[serde(default)]
    pub standfirst: Option<String>,
    /// Trail text (HTML).
    #[serde(default)]
    pub trail_text: Option<String>,
    /// Byline.
    #[serde(default)]
    pub byline: Option<String>,
    /// Body (HTML).
    #[serde(default)]
    pub body: Option<String>,
    /// Main media block (HTML).
    #[serde(default)]
    pub main: Option<String>,
    /// Word count.
    #[serde(default)]
    pub wordcount: Option<String>,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Short URL.
    #[serde(default)]
    pub short_url: Option<String>,
    /// Last modification instant.
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    /// Fields without a dedicated slot.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A tag: keyword, contributor, series, tone ...
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Tag id, e.g. `politics/eu-referendum`.
    pub id: String,
    /// Tag type (`keyword`, `contributor` ...).
    #[serde(rename = "type")]
    pub tag_type: String,
    /// Owning section id.
    #[serde(default)]
    pub section_id: Option<String>,
    /// Owning section name.
    #[serde(default)]
    pub section_name: Option<String>,
    /// Title on the website.
    pub web_title: String,
    /// Website URL.
    pub web_url: String,
    /// API URL.
    pub api_url: String,
    /// Description (HTML).
    #[serde(default)]
    pub description: Option<String>,
    /// Contributor bio (HTML).
    #[serde(default)]
    pub bio: Option<String>,
    /// Contributor picture.
    #[serde(default)]
    pub byline_image_url: Option<String>,
    /// Contributor first name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Contributor last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Contributor twitter handle.
    #[serde(default)]
    pub twitter_handle: Option<String>,
    /// External references.
    #[serde(default)]
    pub references: Vec<Reference>,
}

/// A section of the website.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Section id, e.g. `culture`.
    pub id: String,
    /// Title on the website.
    pub web_title: String,
    /// Website URL.
    pub web_url: String,
    /// API URL.
    pub api_url: String,
    /// Per-edition variants of the section front.
    #[serde(default)]
    pub editions: Vec<Edition>,
}

/// An edition, either top-level (`uk`, `us` ...) or a section variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edition {
    /// Edition id.
    pub id: String,
    /// Title on the website.
    pub web_title: String,
    /// Website URL.
    pub web_url: String,
    /// API URL.
    pub api_url: String,
    /// Edition code on section variants (`default`, `uk` ...).
    #[serde(default)]
    pub code: Option<String>,
    /// Path of a top-level edition.
    #[serde(default)]
    pub path: Option<String>,
    /// Display name of a top-level edition (`UK`, `US` ...).
    #[serde(default)]
    pub edition: Option<String>,
}

/// Media element attached to content.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Element id.
    pub id: String,
    /// Relation to the content (`main`, `thumbnail`, `body` ...).
    pub relation: String,
    /// Element type (`image`, `video` ...).
    #[serde(rename = "type")]
    pub element_type: String,
    /// Position within a gallery.
    #[serde(default)]
    pub gallery_index: Option<u32>,
    /// Renditions of the element.
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// One rendition of an [`Element`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Asset type (`image`, `video` ...).
    #[serde(rename = "type")]
    pub asset_type: String,
    /// MIME type.
    #[serde(default)]
    pub mime_type: Option<String>,
    /// File URL.
    #[serde(default)]
    pub file: Option<String>,
    /// Type-specific metadata (width, height, caption ...).
    #[serde(default)]
    pub type_data: BTreeMap<String, Value>,
}

/// External reference (ISBN, MusicBrainz id ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reference {
    /// Reference id, e.g. `isbn/9780718178949`.
    pub id: String,
    /// Reference type.
    #[serde(rename = "type")]
    pub reference_type: String,
}

/// A structured, reusable piece of content (quiz, explainer, media ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Atom {
    /// Atom id.
    pub id: String,
    /// Atom type (`quiz`, `media` ...).
    pub atom_type: String,
    /// Editorial labels.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Rendered HTML, when the atom type supports it.
    #[serde(default)]
    pub default_html: Option<String>,
    /// Type-specific payload.
    #[serde(default)]
    pub data: Value,
}

/// An editorial story grouping related content.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Story id.
    pub id: String,
    /// Title.
    #[serde(default)]
    pub title: Option<String>,
    /// Summary.
    #[serde(default)]
    pub description: Option<String>,
    /// Last modification instant.
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    /// Remaining story attributes.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// View count of a video.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MostViewedVideo {
    /// Content id of the video.
    pub id: String,
    /// Number of views.
    pub count: u64,
}

/// A curated front collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Collection id.
    pub id: String,
    /// Collection type (`fixed/small/slow-IV` ...).
    #[serde(rename = "type", default)]
    pub collection_type: Option<String>,
    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Editorial link target.
    #[serde(default)]
    pub href: Option<String>,
    /// Last modification instant.
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    /// Items picked by editors.
    #[serde(default)]
    pub curated: Vec<Content>,
    /// Items filled in automatically.
    #[serde(default)]
    pub backfill: Vec<Content>,
}

/// Error payload sent alongside rejected statuses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// Always `error`.
    pub status: String,
    /// Human-readable reason.
    pub message: String,
}
