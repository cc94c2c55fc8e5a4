use crate::error::{AppError, Result};
use crate::model::{ResolveResponse, ShortenForm, ShortenResponse};
use crate::state::AppState;
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Form, Json};
use linkhash_core::Slug;
use linkhash_shortener::ServiceError;

fn parse_slug(raw: String) -> Result<Slug> {
    Slug::new(raw).map_err(|e| AppError::Service(ServiceError::from(e)))
}

pub async fn shorten_link_handler(
    State(state): State<AppState>,
    form: std::result::Result<Form<ShortenForm>, FormRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>)> {
    let Form(form) = form.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let link = form
        .link
        .filter(|link| !link.is_empty())
        .ok_or_else(|| {
            AppError::BadRequest("Payload form does not contain definition for 'link' value".into())
        })?;

    let slug = state.shortener().shorten(&link).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            slug: slug.to_string(),
        }),
    ))
}

pub async fn resolve_link_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ResolveResponse>> {
    let slug = parse_slug(slug)?;
    let link = state.shortener().resolve(&slug).await?;
    Ok(Json(ResolveResponse { link }))
}

pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<StatusCode> {
    let slug = parse_slug(slug)?;
    state.shortener().delete(&slug).await?;
    Ok(StatusCode::NO_CONTENT)
}
