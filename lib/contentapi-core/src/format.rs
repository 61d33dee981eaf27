//! Payload formats: how response bodies are requested and decoded.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::Result;

/// A wire format the Content API can answer in.
///
/// The format decides the `format` query parameter, the `Accept` header and
/// how a body is turned into a typed response. [`Json`] is the default; a
/// binary schema codec plugs in by implementing this trait.
pub trait PayloadFormat: Send + Sync + 'static {
    /// Value of the `format` query parameter.
    const FORMAT: &'static str;

    /// Value of the `Accept` header.
    const ACCEPT: &'static str;

    /// Decode a response body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Decode`] if the body is malformed or does not
    /// match the shape of `T`.
    fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T>;
}

/// JSON payloads, wrapped in the API's `{"response": ...}` envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Json;

impl PayloadFormat for Json {
    const FORMAT: &'static str = "json";
    const ACCEPT: &'static str = "application/json";

    fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
        unwrap_envelope(body)
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    response: T,
}

/// Decode `{"response": T}` and return the inner `T`.
pub(crate) fn unwrap_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    from_json::<Envelope<T>>(body).map(|envelope| envelope.response)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so the error names the exact field that failed
/// (e.g., `response.results[0].webUrl`).
///
/// # Errors
///
/// Returns [`crate::Error::Decode`] if JSON deserialization fails.
///
/// # Example
///
/// ```
/// use contentapi_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Tag { id: String }
///
/// let tag: Tag = from_json(br#"{"id":"world/france"}"#).expect("deserialize");
/// assert_eq!(tag, Tag { id: "world/france".to_string() });
/// ```
pub fn from_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| crate::Error::decode(e.path().to_string(), e.inner().to_string()))
}
