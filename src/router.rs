use axum::{Router, routing::get};

use crate::{AppState, middleware::log_errors, routes};

// 创建主路由
// 所有路径都交给 gist 处理器，由它自己校验格式
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(routes::gist::get_gists))
        .route("/{*path}", get(routes::gist::get_gists))
        .layer(axum::middleware::from_fn(log_errors));

    // 根据编译模式决定是否添加CORS
    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(tower_http::cors::CorsLayer::permissive())
    };

    router.with_state(state)
}
