//! gist 查询服务：解析请求、查缓存、调用上游并整理结果

use std::sync::Arc;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::cache::{GistCache, gist_cache_key};
use crate::error::LookupError;
use crate::github::{GistSource, RawGist};

use super::parser::{self, ParsedRequest};
use super::shaper::{self, ErrorPayload, ShapedGistList};

/// 浏览器自动请求的图标路径
const FAVICON: &str = "favicon.ico";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Gists(ShapedGistList),
    Error(ErrorPayload),
}

/// 查询结果：状态码和可选的响应体
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResponse {
    pub status: StatusCode,
    pub payload: Option<Payload>,
}

impl LookupResponse {
    fn empty() -> Self {
        Self {
            status: StatusCode::OK,
            payload: None,
        }
    }

    fn gists(list: ShapedGistList) -> Self {
        Self {
            status: StatusCode::OK,
            payload: Some(Payload::Gists(list)),
        }
    }
}

impl From<LookupError> for LookupResponse {
    fn from(err: LookupError) -> Self {
        Self {
            status: err.status(),
            payload: Some(Payload::Error(err.payload())),
        }
    }
}

impl IntoResponse for LookupResponse {
    fn into_response(self) -> Response {
        match self.payload {
            Some(payload) => (self.status, Json(payload)).into_response(),
            None => self.status.into_response(),
        }
    }
}

pub struct GistLookupService {
    source: Arc<dyn GistSource>,
    cache: Arc<dyn GistCache>,
}

impl GistLookupService {
    pub fn new(source: Arc<dyn GistSource>, cache: Arc<dyn GistCache>) -> Self {
        Self { source, cache }
    }

    /// 处理一次 `/<username>[?page=N]` 请求
    pub async fn handle(&self, path: &str) -> LookupResponse {
        let ParsedRequest { username, page } = parser::parse(path);
        tracing::info!("Gist request: path={} user={:?} page={:?}", path, username, page);

        if username.as_deref() == Some(FAVICON) {
            return LookupResponse::empty();
        }

        let (Some(username), Some(page)) = (username, page) else {
            return LookupError::MalformedRequest.into();
        };

        match self.lookup(&username, page).await {
            Ok(gists) => LookupResponse::gists(shaper::shape(&username, &gists, page)),
            Err(err) => {
                tracing::warn!("Gist lookup failed for {} page {}: {}", username, page, err);
                err.into()
            }
        }
    }

    async fn lookup(&self, username: &str, page: u32) -> Result<Vec<RawGist>, LookupError> {
        let key = gist_cache_key(username, page);

        // 空列表视为未命中，重新请求上游
        if let Some(gists) = self.cache.get(&key).filter(|gists| !gists.is_empty()) {
            tracing::debug!("Cache hit: {}", key);
            return Ok(gists);
        }

        tracing::debug!("Cache miss: {}", key);
        let gists = self.source.fetch_gists(username, page).await?;
        self.cache.set(key, gists.clone());
        Ok(gists)
    }
}
