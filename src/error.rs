use axum::http::StatusCode;
use thiserror::Error;

use crate::lookup::shaper::{ErrorPayload, error_payload};

/// 使用说明，请求格式不合法时返回
pub const USAGE: &str = "Usage - 127.0.0.1:8080/USERNAME[?page=NUMBER]";

/// 上游 GitHub API 调用失败的类型
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// 上游返回非 2xx 状态码
    #[error("{detail}")]
    Http { status: u16, detail: String },

    /// DNS、连接或超时等传输层错误
    #[error("{0}")]
    Network(String),

    /// 响应体无法解析为 gist 列表
    #[error("Invalid JSON response")]
    InvalidResponse,
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{}", USAGE)]
    MalformedRequest,

    #[error("User not found.")]
    UpstreamNotFound,

    #[error("HTTP error: {0}")]
    UpstreamHttpFailure(String),

    #[error("{0}")]
    UpstreamTransportFailure(String),

    #[error("Invalid JSON response")]
    UpstreamResponseInvalid,
}

impl From<UpstreamError> for LookupError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Http { status: 404, .. } => LookupError::UpstreamNotFound,
            UpstreamError::Http { detail, .. } => LookupError::UpstreamHttpFailure(detail),
            UpstreamError::Network(message) => LookupError::UpstreamTransportFailure(message),
            UpstreamError::InvalidResponse => LookupError::UpstreamResponseInvalid,
        }
    }
}

impl LookupError {
    pub fn status(&self) -> StatusCode {
        match self {
            LookupError::MalformedRequest => StatusCode::BAD_REQUEST,
            LookupError::UpstreamNotFound => StatusCode::NOT_FOUND,
            LookupError::UpstreamHttpFailure(_)
            | LookupError::UpstreamTransportFailure(_)
            | LookupError::UpstreamResponseInvalid => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn payload(&self) -> ErrorPayload {
        error_payload(self.to_string())
    }
}
