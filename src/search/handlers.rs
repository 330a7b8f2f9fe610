use super::engine::search;
use super::types::{SearchHit, SearchParams};
use crate::directory::store::DirectoryStore;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(store): Extension<Arc<DirectoryStore>>,
) -> (StatusCode, Json<Vec<SearchHit>>) {
    let hits = search(&store, &params.query);
    tracing::debug!("Query {:?} matched {} persons", params.query, hits.len());

    (StatusCode::OK, Json(hits))
}
