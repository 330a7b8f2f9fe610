use super::store::DirectoryStore;
use super::types::{AddArtistRequest, ValidationError};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::collections::HashMap;
use std::sync::Arc;

/// Rejects missing or empty-after-trim fields before the store is touched;
/// the store itself treats both strings as opaque values.
pub async fn handle_add_artist(
    Extension(store): Extension<Arc<DirectoryStore>>,
    Json(req): Json<AddArtistRequest>,
) -> Result<StatusCode, (StatusCode, Json<ValidationError>)> {
    let mut details: HashMap<String, Vec<String>> = HashMap::new();

    let genre = req.genre.unwrap_or_default();
    let artist = req.artist.unwrap_or_default();

    if genre.trim().is_empty() {
        details.insert("genre".to_string(), vec!["Genre is required".to_string()]);
    }
    if artist.trim().is_empty() {
        details.insert("artist".to_string(), vec!["Artist is required".to_string()]);
    }

    if !details.is_empty() {
        tracing::debug!("Rejected add-artist request: {:?}", details.keys());
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ValidationError {
                error: "Invalid request body".to_string(),
                details,
            }),
        ));
    }

    store.add_artist(&genre, &artist);
    tracing::info!("Added artist {:?} to genre {:?}", artist, genre);

    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_reset(
    Extension(store): Extension<Arc<DirectoryStore>>,
) -> StatusCode {
    store.reset();
    tracing::info!("Genre-artist table reset to seed state");

    StatusCode::NO_CONTENT
}
