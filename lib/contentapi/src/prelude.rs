//! Prelude module for convenient imports.
//!
//! ```
//! use contentapi::prelude::*;
//! ```

pub use contentapi_core::prelude::*;

pub use crate::{ClientConfig, GuardianContentClient, HyperClient, HyperClientBuilder};
