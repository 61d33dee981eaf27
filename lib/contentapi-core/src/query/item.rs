//! Queries addressed by location: single items and front collections.

use super::{
    ContentApiQuery, FilterExtendedParameters, FilterParameters, FilterSearchParameters,
    OrderByParameter, PaginationParameters, QueryKind, ShowExtendedParameters, ShowParameters,
    parameterized,
};
use crate::model::{CollectionResponse, ItemResponse};
use crate::params::Parameters;
use crate::{Error, Result};

/// Location of an item-like query, validated against a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Location {
    base_url: String,
    resolved: Option<String>,
}

impl Location {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            resolved: None,
        }
    }

    fn by_full_url(self, url: &str) -> Result<Self> {
        // The base must end on a path boundary, not inside a host name
        let under_base = url
            .strip_prefix(&self.base_url)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));
        if !under_base {
            return Err(Error::validation(format!(
                "`{url}` is not under the API base URL `{}`; use `by_id` to address an item by id",
                self.base_url
            )));
        }
        Ok(Self {
            resolved: Some(url.to_string()),
            ..self
        })
    }

    fn by_path(self, prefix: &str, id: &str) -> Self {
        let resolved = format!("{}{prefix}/{}", self.base_url, id.trim_start_matches('/'));
        Self {
            resolved: Some(resolved),
            ..self
        }
    }

    fn resolved(&self, kind: QueryKind) -> Result<String> {
        self.resolved.clone().ok_or_else(|| {
            Error::validation(format!(
                "missing location: set one with `by_id` or `by_full_url` before resolving a {kind} query"
            ))
        })
    }
}

/// A single item: a piece of content, or the front of a tag, section or
/// edition.
///
/// ```
/// use contentapi_core::query::{ItemQuery, ShowParameters};
///
/// let query = ItemQuery::new("https://content.guardianapis.com")
///     .by_id("world/2024/jan/01/example")
///     .show_fields("body");
/// assert_eq!(
///     query.resolved_location(),
///     Some("https://content.guardianapis.com/world/2024/jan/01/example")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemQuery {
    location: Location,
    parameters: Parameters,
}

impl ItemQuery {
    /// A query with no location yet, bound to `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            location: Location::new(base_url),
            parameters: Parameters::new(),
        }
    }

    /// Address the item by its full API URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `url` does not start with the base URL.
    pub fn by_full_url(self, url: &str) -> Result<Self> {
        Ok(Self {
            location: self.location.by_full_url(url)?,
            ..self
        })
    }

    /// Address the item by id; resolves to `base_url/id`.
    #[must_use]
    pub fn by_id(self, id: &str) -> Self {
        Self {
            location: self.location.by_path("", id),
            ..self
        }
    }

    /// The resolved location, once set.
    #[must_use]
    pub fn resolved_location(&self) -> Option<&str> {
        self.location.resolved.as_deref()
    }
}

parameterized!(ItemQuery);

impl ShowParameters for ItemQuery {}
impl ShowExtendedParameters for ItemQuery {}
impl PaginationParameters for ItemQuery {}
impl OrderByParameter for ItemQuery {}
impl FilterParameters for ItemQuery {}
impl FilterExtendedParameters for ItemQuery {}
impl FilterSearchParameters for ItemQuery {}

impl ContentApiQuery for ItemQuery {
    type Response = ItemResponse;
    const KIND: QueryKind = QueryKind::Item;

    fn location(&self, _base_url: &str) -> Result<String> {
        self.location.resolved(Self::KIND)
    }
}

/// A front collection, addressed as `base_url/collections/id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionQuery {
    location: Location,
    parameters: Parameters,
}

impl CollectionQuery {
    /// A query with no location yet, bound to `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            location: Location::new(base_url),
            parameters: Parameters::new(),
        }
    }

    /// Address the collection by its full API URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `url` does not start with the base URL.
    pub fn by_full_url(self, url: &str) -> Result<Self> {
        Ok(Self {
            location: self.location.by_full_url(url)?,
            ..self
        })
    }

    /// Address the collection by id; resolves to `base_url/collections/id`.
    #[must_use]
    pub fn by_id(self, id: &str) -> Self {
        Self {
            location: self.location.by_path("/collections", id),
            ..self
        }
    }

    /// The resolved location, once set.
    #[must_use]
    pub fn resolved_location(&self) -> Option<&str> {
        self.location.resolved.as_deref()
    }
}

parameterized!(CollectionQuery);

impl ShowParameters for CollectionQuery {}

impl ContentApiQuery for CollectionQuery {
    type Response = CollectionResponse;
    const KIND: QueryKind = QueryKind::Collection;

    fn location(&self, _base_url: &str) -> Result<String> {
        self.location.resolved(Self::KIND)
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;
    use crate::query::Parameterized;

    const BASE: &str = "https://content.guardianapis.com";

    #[test]
    fn by_id_expands_against_base() {
        let query = ItemQuery::new(BASE).by_id("world/2024/jan/01/example");
        assert_eq!(
            query.location(BASE).expect("location"),
            "https://content.guardianapis.com/world/2024/jan/01/example"
        );
    }

    #[test]
    fn by_id_matches_by_full_url() {
        let by_id = ItemQuery::new(BASE).by_id("abc123");
        let by_url = ItemQuery::new(BASE)
            .by_full_url(&format!("{BASE}/abc123"))
            .expect("url under base");
        assert_eq!(by_id, by_url);
        assert_eq!(by_id.resolved_location(), by_url.resolved_location());
    }

    #[test]
    fn by_id_tolerates_leading_slash_and_trailing_base_slash() {
        let query = ItemQuery::new(format!("{BASE}/")).by_id("/uk");
        assert_eq!(
            query.resolved_location(),
            Some("https://content.guardianapis.com/uk")
        );
    }

    #[test]
    fn by_full_url_rejects_foreign_prefix() {
        let result = ItemQuery::new(BASE).by_full_url("https://www.theguardian.com/uk");
        let_assert!(Err(Error::Validation(message)) = result);
        check!(message.contains("by_id"));

        let result = CollectionQuery::new(BASE).by_full_url("http://content.guardianapis.com/x");
        check!(result.is_err());
    }

    #[test]
    fn by_full_url_rejects_lookalike_host() {
        let result =
            ItemQuery::new(BASE).by_full_url("https://content.guardianapis.com.evil.example/x");
        let_assert!(Err(Error::Validation(_)) = result);

        let result = ItemQuery::new(BASE).by_full_url("https://content.guardianapis.comx/uk");
        check!(result.is_err());

        let query = ItemQuery::new(BASE).by_full_url(BASE).expect("base itself");
        let url = query.url(BASE, &Parameters::new()).expect("url");
        check!(url == BASE);
    }

    #[test]
    fn missing_location_is_a_validation_error() {
        let err = ItemQuery::new(BASE)
            .show_fields("body")
            .url(BASE, &Parameters::new())
            .expect_err("no location");
        assert!(err.is_validation());
        assert!(err.to_string().contains("missing location"), "{err}");

        let err = CollectionQuery::new(BASE)
            .location(BASE)
            .expect_err("no location");
        assert!(err.to_string().contains("collection"), "{err}");
    }

    #[test]
    fn location_with_query_string_fails_before_fetch() {
        let query = ItemQuery::new(BASE).by_id("search?q=brexit");
        let err = query.url(BASE, &Parameters::new()).expect_err("has '?'");
        assert!(err.is_validation());
    }

    #[test]
    fn collection_by_id_uses_collections_segment() {
        let query = CollectionQuery::new(BASE).by_id("uk-alpha/news/regular-stories");
        assert_eq!(
            query.resolved_location(),
            Some("https://content.guardianapis.com/collections/uk-alpha/news/regular-stories")
        );
    }

    #[test]
    fn item_url_with_show_fields() {
        let query = ItemQuery::new(BASE)
            .by_id("world/2024/jan/01/example")
            .show_fields("body");
        let injected = Parameters::new()
            .with("api-key", "test")
            .with("format", "json");

        assert_eq!(
            query.url(BASE, &injected).expect("url"),
            "https://content.guardianapis.com/world/2024/jan/01/example?api-key=test&format=json&show-fields=body"
        );
    }

    #[test]
    fn queries_are_reusable_templates() {
        let template = ItemQuery::new(BASE).show_fields("headline");
        let uk = template.clone().by_id("uk");
        let us = template.clone().by_id("us");

        assert_eq!(template.resolved_location(), None);
        assert_eq!(uk.parameters(), us.parameters());
        assert_ne!(uk.resolved_location(), us.resolved_location());
    }
}
