//! Resource access client for the Foodhub ordering backend
//!
//! Every backend resource (food items, restaurants, bookmarks, carts) is read
//! the same way: one authenticated GET by identifier, normalized into a
//! [`FetchResult`] envelope.
//!
//! # Features
//!
//! - **Uniform envelope**: `{status, message, data}` with `data` present only on success
//! - **Typed payloads**: the caller picks the payload type, or `serde_json::Value`
//! - **Tagged failures**: `try_*` methods return [`FetchError`] with the cause
//! - **Pluggable transport**: [`Transport`] trait with a `reqwest` implementation
//! - **Environment-based configuration**: URLs, paths and timeout from env or TOML
//!
//! # Example
//!
//! ```rust,no_run
//! use foodhub_api_client::{BearerToken, FetchResult, FoodhubClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FoodhubClient::new()?;
//!     let token = BearerToken::new("session-token");
//!
//!     let food: FetchResult<serde_json::Value> =
//!         client.food().get_one_food_by_id("123", &token).await;
//!     println!("{}", food.message);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod fetcher;
pub mod resource;
pub mod transport;

pub use auth::{auth_header, BearerToken};
pub use client::FoodhubClient;
pub use config::{ClientConfig, Environment, ResourcePaths};
pub use envelope::FetchResult;
pub use error::{ApiError, ApiResult, FetchError, FetchErrorKind, FetchOutcome};
pub use fetcher::ResourceFetcher;
pub use resource::Resource;
pub use transport::{ReqwestTransport, Transport, TransportError, TransportResponse};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::auth::BearerToken;
    pub use crate::client::FoodhubClient;
    pub use crate::config::{ClientConfig, Environment};
    pub use crate::endpoints::{FoodApi, RestaurantsApi};
    pub use crate::envelope::FetchResult;
    pub use crate::error::{ApiError, ApiResult, FetchError, FetchErrorKind};
    pub use crate::resource::Resource;
}
