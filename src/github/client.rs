// GitHub API HTTP 客户端
// 负责请求构造、超时以及错误转换

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::UpstreamError;

use super::{GITHUB_API_VERSION, GistSource, PER_PAGE, RawGist};

const CLIENT_USER_AGENT: &str = "gist-proxy";

/// 调用 GitHub gists API 的客户端
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    /// 创建客户端，`base_url` 形如 `https://api.github.com/users`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn gists_url(&self, username: &str) -> String {
        format!("{}/{}/gists", self.base_url, username)
    }
}

#[async_trait]
impl GistSource for GitHubClient {
    async fn fetch_gists(&self, username: &str, page: u32) -> Result<Vec<RawGist>, UpstreamError> {
        let url = self.gists_url(username);
        let params = [
            ("per_page", PER_PAGE.to_string()),
            ("page", page.to_string()),
        ];

        tracing::debug!("Fetching gists: {} page={}", url, page);
        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Http {
                status: status.as_u16(),
                detail: http_error_detail(status, response.url().as_str()),
            });
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("Failed to decode gists for {}: {}", username, e);
            UpstreamError::InvalidResponse
        })
    }
}

/// 形如 `502 Server Error: Bad Gateway for url: ...`
fn http_error_detail(status: StatusCode, url: &str) -> String {
    let kind = if status.is_server_error() {
        "Server"
    } else {
        "Client"
    };
    format!(
        "{} {} Error: {} for url: {}",
        status.as_u16(),
        kind,
        status.canonical_reason().unwrap_or(""),
        url
    )
}

fn map_transport_error(err: reqwest::Error) -> UpstreamError {
    let message = error_chain(&err);
    if err.is_timeout() {
        UpstreamError::Network(format!("Request timed out: {}", message))
    } else if err.is_connect() {
        UpstreamError::Network(format!("Connection failed: {}", message))
    } else {
        UpstreamError::Network(message)
    }
}

/// 拼接错误及其所有 source，重复的描述只保留一次
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut last = message.clone();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if text != last {
            message.push_str(": ");
            message.push_str(&text);
            last = text;
        }
        source = cause.source();
    }
    message
}
