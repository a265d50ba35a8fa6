//! # API crate — wire model and HTTP client for the TourBook admin API
//!
//! Everything the frontends need to talk to the remote administrative API:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire types (`User`, `UserRole`) in the API's camelCase JSON format |
//! | [`roster`] | Pure patch operations applied to the in-memory roster after each mutation response |
//! | [`client`] | [`AdminApi`], the HTTP client for the four admin endpoints |
//! | [`token`] | Bearer-token persistence (browser storage on web, process-local elsewhere) |
//! | [`error`] | [`ApiError`], the failure type shared by all requests |
//!
//! The client is compiled twice: against `gloo-net` in the browser and
//! against `reqwest` on native targets, behind the same interface.

pub mod client;
pub mod error;
pub mod models;
pub mod roster;
pub mod token;

pub use client::AdminApi;
pub use error::ApiError;
pub use models::{User, UserRole};
pub use store::SearchFilter;
