//! Atom queries: search across atoms, a single atom, and the content
//! embedding an atom.

use derive_more::Display;

use super::{
    ContentApiQuery, FilterExtendedParameters, FilterSearchParameters, OrderByParameter,
    PaginationParameters, Parameterized, QueryKind, ShowParameters, parameterized,
};
use crate::Result;
use crate::model::{AtomResponse, AtomUsageResponse, AtomsResponse};
use crate::params::{ParameterValue, Parameters};

/// Kind of atom, as named in atom paths and the `types` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum AtomKind {
    /// Quiz.
    #[display("quiz")]
    Quiz,
    /// Video or audio media.
    #[display("media")]
    Media,
    /// Explainer.
    #[display("explainer")]
    Explainer,
    /// Call to action.
    #[display("cta")]
    Cta,
    /// Interactive.
    #[display("interactive")]
    Interactive,
    /// Review.
    #[display("review")]
    Review,
    /// Recipe.
    #[display("recipe")]
    Recipe,
    /// Reader questions on a story.
    #[display("storyquestions")]
    StoryQuestions,
    /// Q&A.
    #[display("qanda")]
    Qanda,
    /// Guide.
    #[display("guide")]
    Guide,
    /// Profile.
    #[display("profile")]
    Profile,
    /// Timeline.
    #[display("timeline")]
    Timeline,
    /// Commons division (parliamentary vote).
    #[display("commonsdivision")]
    CommonsDivision,
    /// Chart.
    #[display("chart")]
    Chart,
    /// Audio.
    #[display("audio")]
    Audio,
    /// Newsletter sign-up.
    #[display("emailsignup")]
    EmailSignup,
}

impl From<AtomKind> for ParameterValue {
    fn from(kind: AtomKind) -> Self {
        Self::Str(kind.to_string())
    }
}

/// Search across atoms (`/atoms`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomsQuery {
    parameters: Parameters,
}

impl AtomsQuery {
    /// An empty atom search.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to atoms of the given kinds.
    #[must_use]
    pub fn types(self, kinds: impl IntoIterator<Item = AtomKind>) -> Self {
        let kinds: Vec<String> = kinds.into_iter().map(|kind| kind.to_string()).collect();
        self.with_parameter("types", kinds)
    }

    /// Fields the `q` terms are matched against.
    #[must_use]
    pub fn search_fields(self, fields: impl Into<ParameterValue>) -> Self {
        self.with_parameter("searchFields", fields)
    }
}

parameterized!(AtomsQuery);

impl PaginationParameters for AtomsQuery {}
impl OrderByParameter for AtomsQuery {}
impl FilterSearchParameters for AtomsQuery {}
impl FilterExtendedParameters for AtomsQuery {}

impl ContentApiQuery for AtomsQuery {
    type Response = AtomsResponse;
    const KIND: QueryKind = QueryKind::Atoms;

    fn location(&self, base_url: &str) -> Result<String> {
        Ok(format!("{}/atoms", base_url.trim_end_matches('/')))
    }
}

/// A single atom (`/atom/{kind}/{id}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomQuery {
    kind: AtomKind,
    id: String,
    parameters: Parameters,
}

impl AtomQuery {
    /// Address an atom by kind and id.
    #[must_use]
    pub fn new(kind: AtomKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            parameters: Parameters::new(),
        }
    }

    /// The atom kind.
    #[must_use]
    pub const fn kind(&self) -> AtomKind {
        self.kind
    }
}

parameterized!(AtomQuery);

impl ShowParameters for AtomQuery {}

impl ContentApiQuery for AtomQuery {
    type Response = AtomResponse;
    const KIND: QueryKind = QueryKind::Atom;

    fn location(&self, base_url: &str) -> Result<String> {
        Ok(format!(
            "{}/atom/{}/{}",
            base_url.trim_end_matches('/'),
            self.kind,
            self.id
        ))
    }
}

/// Ids of content embedding an atom (`/atom/{kind}/{id}/usage`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomUsageQuery {
    kind: AtomKind,
    id: String,
    parameters: Parameters,
}

impl AtomUsageQuery {
    /// Address an atom by kind and id.
    #[must_use]
    pub fn new(kind: AtomKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            parameters: Parameters::new(),
        }
    }
}

parameterized!(AtomUsageQuery);

impl PaginationParameters for AtomUsageQuery {}

impl ContentApiQuery for AtomUsageQuery {
    type Response = AtomUsageResponse;
    const KIND: QueryKind = QueryKind::AtomUsage;

    fn location(&self, base_url: &str) -> Result<String> {
        Ok(format!(
            "{}/atom/{}/{}/usage",
            base_url.trim_end_matches('/'),
            self.kind,
            self.id
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://content.guardianapis.com";

    #[test]
    fn atom_kind_wire_names() {
        assert_eq!(AtomKind::StoryQuestions.to_string(), "storyquestions");
        assert_eq!(AtomKind::CommonsDivision.to_string(), "commonsdivision");
        assert_eq!(AtomKind::EmailSignup.to_string(), "emailsignup");
    }

    #[test]
    fn atoms_types_filter() {
        let query = AtomsQuery::new()
            .types([AtomKind::Quiz, AtomKind::Explainer])
            .q("brexit")
            .search_fields("data.title");

        assert_eq!(query.location(BASE).expect("ok"), format!("{BASE}/atoms"));
        assert_eq!(
            query.parameters().to_query_string(),
            "q=brexit&searchFields=data.title&types=quiz%2Cexplainer"
        );
    }

    #[test]
    fn single_atom_location() {
        let query = AtomQuery::new(AtomKind::Media, "0b7a4b4f-1b0a-4a5d-a2a9-d8d4d1a1d3b4");
        assert_eq!(query.kind(), AtomKind::Media);
        assert_eq!(
            query.location(BASE).expect("ok"),
            "https://content.guardianapis.com/atom/media/0b7a4b4f-1b0a-4a5d-a2a9-d8d4d1a1d3b4"
        );
    }

    #[test]
    fn atom_usage_location() {
        let query = AtomUsageQuery::new(AtomKind::Quiz, "abc").page(3);
        assert_eq!(
            query.url(BASE, &Parameters::new()).expect("url"),
            "https://content.guardianapis.com/atom/quiz/abc/usage?page=3"
        );
    }
}
