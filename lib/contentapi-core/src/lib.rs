//! Core of the Guardian Content API client.
//!
//! This crate is transport-agnostic:
//! - [`query`] - immutable query values, one per endpoint, and the parameter families
//! - [`params`] - canonical encoding of parameters into URLs
//! - [`HttpClient`] - the transport port (perform a GET, return status, headers, body)
//! - [`ContentApiClient`] - resolves a query into its typed response
//! - [`AcceptedStatuses`] - which statuses are decoded, the rest become [`Error::Api`]
//! - [`model`] - response types and the entities they carry
//! - [`PayloadFormat`] and [`Json`] - how bodies are requested and decoded
//!
//! The `contentapi` crate wires these to a hyper transport.

mod client;
mod config;
mod error;
mod format;
pub mod model;
pub mod params;
pub mod prelude;
pub mod query;
mod request;
mod resolver;
mod response;
mod status;

pub use client::{HttpClient, HttpClientExt};
pub use config::{
    API_KEY_VAR, BASE_URL_VAR, ContentApiConfig, ContentApiConfigBuilder, DEFAULT_BASE_URL,
    DEFAULT_USER_AGENT,
};
pub use error::{Error, Result};
pub use format::{Json, PayloadFormat, from_json};
pub use params::{ParameterValue, Parameters, build_url, redact_api_key};
pub use request::{Request, RequestBuilder};
pub use resolver::ContentApiClient;
pub use response::Response;
pub use status::{AcceptedStatuses, Classification};

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
