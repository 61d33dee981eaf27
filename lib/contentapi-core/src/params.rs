//! Query parameters and canonical URL assembly.
//!
//! # Canonical encoding
//!
//! | Value | Canonical string |
//! |-------|------------------|
//! | string | verbatim |
//! | integer | decimal |
//! | boolean | `true` / `false` |
//! | date | RFC 3339 in UTC, whole seconds: `2024-01-01T09:30:00Z` |
//! | list | comma-joined: `headline,body` |
//!
//! Names and canonical values are then percent-encoded, leaving only the
//! RFC 3986 unreserved characters (`A-Z a-z 0-9 - . _ ~`) as-is. Pairs are
//! emitted in lexicographic order of their names, so a URL depends only on
//! the parameter set and never on the order parameters were added.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{Error, Result};

/// Everything but the RFC 3986 unreserved characters.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Name of the authentication parameter.
pub const API_KEY: &str = "api-key";

/// Name of the payload format parameter.
pub const FORMAT: &str = "format";

/// A typed query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    /// Free text.
    Str(String),
    /// Integer.
    Int(i64),
    /// Boolean flag.
    Bool(bool),
    /// Instant in time.
    Date(DateTime<Utc>),
    /// Ordered list of strings.
    List(Vec<String>),
}

impl ParameterValue {
    /// The canonical, not yet percent-encoded, representation.
    #[must_use]
    pub fn canonical(&self) -> String {
        match self {
            Self::Str(value) => value.clone(),
            Self::Int(value) => value.to_string(),
            Self::Bool(value) => value.to_string(),
            Self::Date(value) => value.to_rfc3339_opts(SecondsFormat::Secs, true),
            Self::List(values) => values.join(","),
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ParameterValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParameterValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for ParameterValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<Vec<String>> for ParameterValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for ParameterValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ParameterValue {
    fn from(values: [&str; N]) -> Self {
        Self::List(values.into_iter().map(str::to_string).collect())
    }
}

/// A set of named parameters with unique, lexicographically ordered keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters(BTreeMap<String, ParameterValue>);

impl Parameters {
    /// An empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a set with `name` bound to `value`, replacing any earlier value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.0.get(name)
    }

    /// Whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameter is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in canonical (lexicographic) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Merge `overrides` into a copy of `self`; keys of `overrides` win.
    #[must_use]
    pub fn merged(&self, overrides: &Self) -> Self {
        let mut merged = self.0.clone();
        merged.extend(
            overrides
                .0
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );
        Self(merged)
    }

    /// Percent-encoded `name=value` pairs joined by `&`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{}={}", encode(name), encode(&value.canonical())))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<ParameterValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, QUERY_COMPONENT).to_string()
}

/// Assemble the URL for `location` with `parameters` and `injected` ones.
///
/// Injected parameters (API key, format marker) take precedence on key
/// collision.
///
/// # Errors
///
/// Returns [`Error::Validation`] if `location` already carries a query
/// string.
///
/// # Example
///
/// ```
/// use contentapi_core::{Parameters, build_url};
///
/// let params = Parameters::new().with("show-fields", "body");
/// let injected = Parameters::new().with("api-key", "test").with("format", "json");
/// let url = build_url("https://content.guardianapis.com/uk", &params, &injected).unwrap();
/// assert_eq!(
///     url,
///     "https://content.guardianapis.com/uk?api-key=test&format=json&show-fields=body"
/// );
/// ```
pub fn build_url(location: &str, parameters: &Parameters, injected: &Parameters) -> Result<String> {
    if location.contains('?') {
        return Err(Error::validation(format!(
            "location `{location}` must not contain '?'; pass parameters separately"
        )));
    }

    let query = parameters.merged(injected).to_query_string();
    if query.is_empty() {
        Ok(location.to_string())
    } else {
        Ok(format!("{location}?{query}"))
    }
}

/// Replace the value of the `api-key` parameter so a URL can be logged.
#[must_use]
pub fn redact_api_key(url: &str) -> String {
    let Some((location, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let query = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((API_KEY, _)) => format!("{API_KEY}=***"),
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("{location}?{query}")
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use chrono::TimeZone;

    use super::*;

    const BASE: &str = "https://content.guardianapis.com";

    fn injected() -> Parameters {
        Parameters::new().with(API_KEY, "my-key").with(FORMAT, "json")
    }

    #[test]
    fn canonical_values() {
        check!(ParameterValue::from("politics").canonical() == "politics");
        check!(ParameterValue::from(42_i64).canonical() == "42");
        check!(ParameterValue::from(-3).canonical() == "-3");
        check!(ParameterValue::from(true).canonical() == "true");
        check!(ParameterValue::from(false).canonical() == "false");
        check!(ParameterValue::from(["headline", "body"]).canonical() == "headline,body");
        check!(ParameterValue::from(Vec::<String>::new()).canonical() == "");
    }

    #[test]
    fn dates_drop_sub_second_precision() {
        let date = Utc
            .with_ymd_and_hms(2024, 1, 1, 9, 30, 15)
            .single()
            .expect("valid date")
            + chrono::Duration::milliseconds(987);

        let value = ParameterValue::from(date);
        assert_eq!(value.canonical(), "2024-01-01T09:30:15Z");

        let encoded = Parameters::new().with("from-date", date).to_query_string();
        assert_eq!(encoded, "from-date=2024-01-01T09%3A30%3A15Z");
        assert!(!encoded.contains(':'));
        assert!(!encoded.contains('+'));
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let encoded = Parameters::new()
            .with("q", "debate AND (economy OR \"tax\")")
            .with("show-fields", ["headline", "body"])
            .with("tag", "politics/politics")
            .to_query_string();

        assert_eq!(
            encoded,
            "q=debate%20AND%20%28economy%20OR%20%22tax%22%29\
             &show-fields=headline%2Cbody\
             &tag=politics%2Fpolitics"
        );
    }

    #[test]
    fn url_is_independent_of_insertion_order() {
        let forward = Parameters::new()
            .with("page", 2)
            .with("q", "climate")
            .with("order-by", "newest");
        let backward = Parameters::new()
            .with("order-by", "newest")
            .with("q", "climate")
            .with("page", 2);

        let location = format!("{BASE}/search");
        let a = build_url(&location, &forward, &injected()).expect("url");
        let b = build_url(&location, &backward, &injected()).expect("url");
        assert_eq!(a, b);
        insta::assert_snapshot!(a, @"https://content.guardianapis.com/search?api-key=my-key&format=json&order-by=newest&page=2&q=climate");
    }

    #[test]
    fn injected_parameters_win() {
        let params = Parameters::new()
            .with(API_KEY, "caller-key")
            .with(FORMAT, "xml")
            .with("show-fields", "body");

        let url = build_url(&format!("{BASE}/uk"), &params, &injected()).expect("url");
        assert_eq!(
            url,
            "https://content.guardianapis.com/uk?api-key=my-key&format=json&show-fields=body"
        );
    }

    #[test]
    fn location_with_query_string_is_rejected() {
        let result = build_url(
            &format!("{BASE}/search?q=brexit"),
            &Parameters::new(),
            &injected(),
        );
        let_assert!(Err(Error::Validation(message)) = result);
        check!(message.contains("must not contain '?'"));
    }

    #[test]
    fn no_parameters_no_question_mark() {
        let url = build_url(BASE, &Parameters::new(), &Parameters::new()).expect("url");
        assert_eq!(url, BASE);
    }

    #[test]
    fn setting_a_key_twice_keeps_the_latest() {
        let params = Parameters::new().with("page", 1).with("page", 3);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("page"), Some(&ParameterValue::Int(3)));
        assert_eq!(params.to_query_string(), "page=3");
    }

    #[test]
    fn collect_from_pairs() {
        let params: Parameters = [("q", "rust"), ("lang", "en")].into_iter().collect();
        assert!(params.contains("q"));
        assert_eq!(params.to_query_string(), "lang=en&q=rust");
    }

    #[test]
    fn api_key_is_redacted() {
        let url = "https://content.guardianapis.com/search?api-key=secret&format=json&q=api-key";
        assert_eq!(
            redact_api_key(url),
            "https://content.guardianapis.com/search?api-key=***&format=json&q=api-key"
        );
        assert_eq!(redact_api_key(BASE), BASE);
    }
}
