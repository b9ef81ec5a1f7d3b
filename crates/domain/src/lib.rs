//! # Evolution Domain
//!
//! Data types shared by every layer of the Evolution API SDK.
//!
//! This crate contains:
//! - The error taxonomy (`EvolutionError`) and the normalized `ApiError`
//! - Client configuration and its defaults
//! - The request descriptor handed to the transport
//! - Typed option payloads for each gateway module
//!
//! ## Architecture
//! - No dependencies on other SDK crates
//! - No I/O; serde is used only for the JSON shapes

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod request;
pub mod types;

// Re-export commonly used items
pub use config::ClientConfig;
pub use errors::{ApiError, EvolutionError, Result};
pub use request::{ApiRequest, HttpMethod};
pub use types::*;
