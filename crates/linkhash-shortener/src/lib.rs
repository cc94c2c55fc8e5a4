//! Link shortening service.
//!
//! [`LinkService`] ties a [`LinkStore`](linkhash_core::LinkStore) to a
//! [`SlugGenerator`](linkhash_generator::SlugGenerator) and exposes the three
//! operations the HTTP layer needs through the [`Shortener`] trait.

pub mod error;
pub mod service;
pub mod shortener;

pub use error::{Result, ServiceError};
pub use service::LinkService;
pub use shortener::Shortener;
