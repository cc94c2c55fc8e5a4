use serde::{Deserialize, Serialize};

/// Form body of `POST /shorten`.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    pub link: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub slug: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub link: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
