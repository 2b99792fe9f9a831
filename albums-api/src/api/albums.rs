//! Album catalog endpoints
//!
//! Listing, creation, and exact-match lookup by id, title, and artist.
//! Only POST mutates the store.

use albums_common::Album;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{debug, info, warn};

use super::PrettyJson;
use crate::{ApiError, ApiResult, AppState};

/// GET /albums
///
/// Returns every album in insertion order.
pub async fn list_albums(State(state): State<AppState>) -> PrettyJson<Vec<Album>> {
    PrettyJson(state.store.list().await)
}

/// POST /albums
///
/// Appends the posted album and echoes it back with 201. Bodies that do not
/// decode as an album are rejected with 400, bodies over the size limit with
/// 413. Duplicate ids are accepted.
pub async fn create_album(
    State(state): State<AppState>,
    payload: Result<Json<Album>, JsonRejection>,
) -> ApiResult<(StatusCode, PrettyJson<Album>)> {
    let Json(album) = payload.map_err(|rejection| {
        warn!("Rejected album body: {}", rejection.body_text());
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::BadRequest(format!("Invalid album: {}", rejection.body_text()))
        }
    })?;

    let created = state.store.append(album).await;
    info!("Created album id={} title={:?}", created.id, created.title);

    Ok((StatusCode::CREATED, PrettyJson(created)))
}

/// GET /albums/:id
pub async fn get_album_by_id(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<PrettyJson<Album>> {
    let id = path_segment(id)?;
    let album = state.store.find_by_id(&id).await.map_err(|e| {
        debug!("No album with id {:?}", id);
        e
    })?;
    Ok(PrettyJson(album))
}

/// GET /albums/name/:title
pub async fn get_album_by_title(
    State(state): State<AppState>,
    title: Result<Path<String>, PathRejection>,
) -> ApiResult<PrettyJson<Album>> {
    let title = path_segment(title)?;
    let album = state.store.find_by_title(&title).await.map_err(|e| {
        debug!("No album titled {:?}", title);
        e
    })?;
    Ok(PrettyJson(album))
}

/// GET /albums/artist/:artist
///
/// All albums by `artist` in insertion order; 404 when there are none.
pub async fn get_albums_by_artist(
    State(state): State<AppState>,
    artist: Result<Path<String>, PathRejection>,
) -> ApiResult<PrettyJson<Vec<Album>>> {
    let artist = path_segment(artist)?;
    let albums = state.store.find_all_by_artist(&artist).await.map_err(|e| {
        debug!("No albums by artist {:?}", artist);
        e
    })?;
    Ok(PrettyJson(albums))
}

/// Unwrap a decoded path segment, turning rejections into JSON 400s
fn path_segment(segment: Result<Path<String>, PathRejection>) -> ApiResult<String> {
    segment.map(|Path(value)| value).map_err(|rejection| {
        warn!("Rejected path segment: {}", rejection.body_text());
        ApiError::BadRequest(format!("Invalid path: {}", rejection.body_text()))
    })
}

/// Build album routes
pub fn album_routes() -> Router<AppState> {
    Router::new()
        .route("/albums", get(list_albums).post(create_album))
        .route("/albums/:id", get(get_album_by_id))
        .route("/albums/name/:title", get(get_album_by_title))
        .route("/albums/artist/:artist", get(get_albums_by_artist))
}
