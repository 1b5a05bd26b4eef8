use axum::{extract::State, http::Uri, response::IntoResponse};

use crate::AppState;

/// 获取用户公开 gist，路径格式为 `/<username>[?page=N]`
#[axum::debug_handler]
pub async fn get_gists(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    state.gists.handle(path).await
}
