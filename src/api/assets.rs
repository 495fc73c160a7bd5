use axum::{
    body::Body,
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

use super::ApiError;

#[derive(RustEmbed)]
#[folder = "static/"]
struct Asset;

pub async fn serve_asset(Path(path): Path<String>) -> Result<Response, ApiError> {
    let path = path.trim_start_matches('/');

    let content = Asset::get(path).ok_or_else(|| ApiError::not_found("Asset", path))?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Ok((
        [
            (header::CONTENT_TYPE, mime.as_ref()),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        Body::from(content.data),
    )
        .into_response())
}
