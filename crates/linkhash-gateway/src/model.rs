mod link;

pub use link::{ErrorResponse, HealthResponse, ResolveResponse, ShortenForm, ShortenResponse};
