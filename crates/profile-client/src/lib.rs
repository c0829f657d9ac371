//! # profile-client
//!
//! Core HTTP client infrastructure for the Gantry profile API.
//!
//! This crate provides the foundational HTTP client with:
//! - Connection pooling and timeouts
//! - Typed error taxonomy (validation failures vs. system faults)
//! - Request/response tracing
//! - Secret redaction in error messages and Debug output
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (profile-rest, profile-settings)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     GantryClient                            │
//! │  - Holds base URL + bearer token                            │
//! │  - Provides typed JSON methods (get_json, post_json, etc.)  │
//! │  - Handles authentication headers                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HttpClient                             │
//! │  - Raw HTTP with pooling and timeouts                       │
//! │  - Request building                                         │
//! │  - Response handling and API error promotion                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use gantry_profile_client::GantryClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gantry_profile_client::Error> {
//!     let client = GantryClient::new("https://api.gantry.example", "session-token")?;
//!
//!     // Typed JSON request
//!     let user: serde_json::Value = client.get_json("/v1/users/me").await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod gantry_client;
mod redact;
mod request;
mod response;

pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use gantry_client::GantryClient;
pub use redact::sanitize_error_message;
pub use request::{RequestBuilder, RequestMethod};
pub use response::Response;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("gantry-profile-api/", env!("CARGO_PKG_VERSION"));
