//! Core types and traits for the linkhash link shortener.
//!
//! This crate provides the shared vocabulary used by the storage backends,
//! the slug generator and the service layer: the [`Slug`] identifier, the
//! [`LinkRecord`] it maps to, the [`LinkStore`] capability trait and the
//! [`StoreError`] taxonomy.

pub mod clock;
pub mod error;
pub mod slug;
pub mod store;

pub use clock::{Clock, MonotonicClock, SystemClock};
pub use error::{CoreError, Result, StoreError};
pub use slug::Slug;
pub use store::{LinkRecord, LinkStore};
