//! Parameter families shared by several query kinds.
//!
//! Each family is a trait with provided methods over [`Parameterized`]; a
//! query kind opts into the families its endpoint understands.

use chrono::{DateTime, Utc};
use derive_more::Display;

use super::Parameterized;
use crate::params::ParameterValue;

/// Sort order of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum OrderBy {
    /// Most recent first.
    #[display("newest")]
    Newest,
    /// Oldest first.
    #[display("oldest")]
    Oldest,
    /// Best match first.
    #[display("relevance")]
    Relevance,
}

/// Which date [`OrderBy`] sorts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum OrderDate {
    /// Web publication date.
    #[display("published")]
    Published,
    /// Print edition date.
    #[display("newspaper-edition")]
    NewspaperEdition,
    /// Last modification date.
    #[display("last-modified")]
    LastModified,
}

/// Which date the `from-date` / `to-date` filters apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum UseDate {
    /// Web publication date.
    #[display("published")]
    Published,
    /// First publication date.
    #[display("first-publication")]
    FirstPublication,
    /// Print edition date.
    #[display("newspaper-edition")]
    NewspaperEdition,
    /// Last modification date.
    #[display("last-modified")]
    LastModified,
}

macro_rules! wire_value {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for ParameterValue {
                fn from(value: $ty) -> Self {
                    Self::Str(value.to_string())
                }
            }
        )+
    };
}

wire_value!(OrderBy, OrderDate, UseDate);

/// `show-*` parameters selecting optional parts of each result.
pub trait ShowParameters: Parameterized {
    /// Fields to include (`headline`, `body`, `all` ...).
    #[must_use]
    fn show_fields(self, fields: impl Into<ParameterValue>) -> Self {
        self.with_parameter("show-fields", fields)
    }

    /// Tag types to include (`keyword`, `contributor`, `all` ...).
    #[must_use]
    fn show_tags(self, tags: impl Into<ParameterValue>) -> Self {
        self.with_parameter("show-tags", tags)
    }

    /// Element types to include (`image`, `video`, `all` ...).
    #[must_use]
    fn show_elements(self, elements: impl Into<ParameterValue>) -> Self {
        self.with_parameter("show-elements", elements)
    }

    /// Reference types to include (`isbn`, `author`, `all` ...).
    #[must_use]
    fn show_references(self, references: impl Into<ParameterValue>) -> Self {
        self.with_parameter("show-references", references)
    }

    /// Blocks to include (`main`, `body`, `all` ...).
    #[must_use]
    fn show_blocks(self, blocks: impl Into<ParameterValue>) -> Self {
        self.with_parameter("show-blocks", blocks)
    }

    /// Atom types to include (`quiz`, `media`, `all` ...).
    #[must_use]
    fn show_atoms(self, atoms: impl Into<ParameterValue>) -> Self {
        self.with_parameter("show-atoms", atoms)
    }

    /// Rights to include (`syndicatable`, `subscription-databases`).
    #[must_use]
    fn show_rights(self, rights: impl Into<ParameterValue>) -> Self {
        self.with_parameter("show-rights", rights)
    }

    /// Whether to include each result's section.
    #[must_use]
    fn show_section(self, show: bool) -> Self {
        self.with_parameter("show-section", show)
    }
}

/// Extra `show-*` parameters only understood by the item endpoint.
pub trait ShowExtendedParameters: Parameterized {
    /// Include the story package the item belongs to.
    #[must_use]
    fn show_story_package(self, show: bool) -> Self {
        self.with_parameter("show-story-package", show)
    }

    /// Include related content.
    #[must_use]
    fn show_related(self, show: bool) -> Self {
        self.with_parameter("show-related", show)
    }

    /// Include the most viewed content of a section or edition.
    #[must_use]
    fn show_most_viewed(self, show: bool) -> Self {
        self.with_parameter("show-most-viewed", show)
    }

    /// Include editors' picks of a section or edition.
    #[must_use]
    fn show_editors_picks(self, show: bool) -> Self {
        self.with_parameter("show-editors-picks", show)
    }
}

/// Page selection.
pub trait PaginationParameters: Parameterized {
    /// 1-based page number.
    #[must_use]
    fn page(self, page: u32) -> Self {
        self.with_parameter("page", page)
    }

    /// Number of results per page.
    #[must_use]
    fn page_size(self, page_size: u32) -> Self {
        self.with_parameter("page-size", page_size)
    }
}

/// Result ordering.
pub trait OrderByParameter: Parameterized {
    /// Sort order.
    #[must_use]
    fn order_by(self, order: OrderBy) -> Self {
        self.with_parameter("order-by", order)
    }

    /// Date used for sorting.
    #[must_use]
    fn order_date(self, date: OrderDate) -> Self {
        self.with_parameter("order-date", date)
    }
}

/// Common result filters.
pub trait FilterParameters: Parameterized {
    /// Restrict to a section id (`football`, `politics|world` ...).
    #[must_use]
    fn section(self, section: impl Into<ParameterValue>) -> Self {
        self.with_parameter("section", section)
    }

    /// Restrict to content with a reference (`isbn/9780718178949`).
    #[must_use]
    fn reference(self, reference: impl Into<ParameterValue>) -> Self {
        self.with_parameter("reference", reference)
    }

    /// Restrict to content with a reference of the given type.
    #[must_use]
    fn reference_type(self, reference_type: impl Into<ParameterValue>) -> Self {
        self.with_parameter("reference-type", reference_type)
    }

    /// Restrict to a tag expression (`politics/politics,-world/world`).
    #[must_use]
    fn tag(self, tag: impl Into<ParameterValue>) -> Self {
        self.with_parameter("tag", tag)
    }

    /// Restrict to the given content ids.
    #[must_use]
    fn ids(self, ids: impl Into<ParameterValue>) -> Self {
        self.with_parameter("ids", ids)
    }

    /// Restrict to a production office (`uk`, `us`, `aus`).
    #[must_use]
    fn production_office(self, office: impl Into<ParameterValue>) -> Self {
        self.with_parameter("production-office", office)
    }

    /// Restrict to a language (ISO 639-1 code).
    #[must_use]
    fn lang(self, lang: impl Into<ParameterValue>) -> Self {
        self.with_parameter("lang", lang)
    }

    /// Restrict reviews to a star rating (1 to 5).
    #[must_use]
    fn star_rating(self, rating: u32) -> Self {
        self.with_parameter("star-rating", rating)
    }

    /// Edition used to resolve section fronts (`uk`, `us`, `au`).
    #[must_use]
    fn edition(self, edition: impl Into<ParameterValue>) -> Self {
        self.with_parameter("edition", edition)
    }
}

/// Date range filters.
pub trait FilterExtendedParameters: Parameterized {
    /// Only results on or after this instant.
    #[must_use]
    fn from_date(self, date: DateTime<Utc>) -> Self {
        self.with_parameter("from-date", date)
    }

    /// Only results on or before this instant.
    #[must_use]
    fn to_date(self, date: DateTime<Utc>) -> Self {
        self.with_parameter("to-date", date)
    }

    /// Which date the range applies to.
    #[must_use]
    fn use_date(self, date: UseDate) -> Self {
        self.with_parameter("use-date", date)
    }
}

/// Free text search.
pub trait FilterSearchParameters: Parameterized {
    /// Search terms; supports `AND`, `OR`, `NOT` and quoted phrases.
    #[must_use]
    fn q(self, q: impl Into<ParameterValue>) -> Self {
        self.with_parameter("q", q)
    }

    /// Fields the search terms are matched against.
    #[must_use]
    fn query_fields(self, fields: impl Into<ParameterValue>) -> Self {
        self.with_parameter("query-fields", fields)
    }
}

/// Tag-specific filters.
pub trait FilterTagParameters: Parameterized {
    /// Tag type (`keyword`, `series`, `contributor` ...), sent as `type`.
    #[must_use]
    fn tag_type(self, tag_type: impl Into<ParameterValue>) -> Self {
        self.with_parameter("type", tag_type)
    }

    /// Sponsorship type (`sponsored`, `paid-content` ...).
    #[must_use]
    fn sponsorship_type(self, sponsorship: impl Into<ParameterValue>) -> Self {
        self.with_parameter("sponsorship-type", sponsorship)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::params::Parameters;

    #[derive(Debug, Default)]
    struct Probe {
        parameters: Parameters,
    }

    crate::query::parameterized!(Probe);

    impl ShowParameters for Probe {}
    impl ShowExtendedParameters for Probe {}
    impl PaginationParameters for Probe {}
    impl OrderByParameter for Probe {}
    impl FilterParameters for Probe {}
    impl FilterExtendedParameters for Probe {}
    impl FilterSearchParameters for Probe {}
    impl FilterTagParameters for Probe {}

    #[test]
    fn enum_wire_values() {
        assert_eq!(OrderBy::Newest.to_string(), "newest");
        assert_eq!(OrderBy::Relevance.to_string(), "relevance");
        assert_eq!(OrderDate::NewspaperEdition.to_string(), "newspaper-edition");
        assert_eq!(UseDate::FirstPublication.to_string(), "first-publication");
        assert_eq!(
            ParameterValue::from(UseDate::LastModified),
            ParameterValue::Str("last-modified".to_string())
        );
    }

    #[test]
    fn families_write_api_names() {
        let date = Utc
            .with_ymd_and_hms(2014, 2, 16, 0, 0, 0)
            .single()
            .expect("valid date");

        let probe = Probe::default()
            .show_fields(["headline", "body"])
            .show_tags("contributor")
            .show_elements("image")
            .show_references("isbn")
            .show_blocks("main")
            .show_atoms("all")
            .show_rights("syndicatable")
            .show_section(true)
            .show_story_package(true)
            .show_related(false)
            .show_most_viewed(true)
            .show_editors_picks(true)
            .page(2)
            .page_size(50)
            .order_by(OrderBy::Oldest)
            .order_date(OrderDate::LastModified)
            .section("football")
            .reference("isbn/9780718178949")
            .reference_type("isbn")
            .tag("sport/sport")
            .ids("world/2024/jan/01/example")
            .production_office("aus")
            .lang("en")
            .star_rating(4)
            .edition("uk")
            .from_date(date)
            .to_date(date)
            .use_date(UseDate::Published)
            .q("\"world cup\"")
            .query_fields("headline")
            .tag_type("contributor")
            .sponsorship_type("sponsored");

        insta::assert_snapshot!(probe.parameters.to_query_string(), @"edition=uk&from-date=2014-02-16T00%3A00%3A00Z&ids=world%2F2024%2Fjan%2F01%2Fexample&lang=en&order-by=oldest&order-date=last-modified&page=2&page-size=50&production-office=aus&q=%22world%20cup%22&query-fields=headline&reference=isbn%2F9780718178949&reference-type=isbn&section=football&show-atoms=all&show-blocks=main&show-editors-picks=true&show-elements=image&show-fields=headline%2Cbody&show-most-viewed=true&show-references=isbn&show-related=false&show-rights=syndicatable&show-section=true&show-story-package=true&show-tags=contributor&sponsorship-type=sponsored&star-rating=4&tag=sport%2Fsport&to-date=2014-02-16T00%3A00%3A00Z&type=contributor&use-date=published");
    }
}
