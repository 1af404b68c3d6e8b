//! HTTP access to the read-only catalog API.
//!
//! `CatalogClient` is the single data-access point shared by every view:
//! the list endpoint, the per-record detail endpoint and the bounded
//! roster loader built on top of both.

mod client;
mod error;
mod types;

pub use client::{CatalogClient, ClientOptions};
pub use error::ApiError;
pub use types::{ListPage, NamedResource};
