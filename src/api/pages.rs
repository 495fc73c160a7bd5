use axum::{
    extract::{Path, Query, State},
    http::Uri,
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use super::views::{self, ViewContext};
use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let profiles = state.directory().list_active().await?;

    let mut ctx = ViewContext::new();
    ctx.insert("profiles", &profiles);

    Ok(Html(views::render("index.html", &ctx)?))
}

pub async fn profile(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Html<String>, ApiError> {
    let page = state.directory().profile_page(&slug).await?;

    let mut ctx = ViewContext::new();
    ctx.insert("links", &page.profile.links());
    ctx.insert("profile", &page.profile);
    ctx.insert("ads", &page.ads);

    Ok(Html(views::render("profile.html", &ctx)?))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, ApiError> {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    let profiles = state.directory().search(query).await?;

    let mut ctx = ViewContext::new();
    ctx.insert("query", query);
    ctx.insert("profiles", &profiles);

    Ok(Html(views::render("search.html", &ctx)?))
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found("Page", uri.path())
}
