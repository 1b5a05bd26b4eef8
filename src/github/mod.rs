// GitHub API 模块
// 提供获取用户公开 gist 的客户端和类型

use async_trait::async_trait;

use crate::error::UpstreamError;

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::RawGist;

/// 每页获取的 gist 数量
pub const PER_PAGE: u32 = 50;

/// GitHub REST API 版本
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// gist 数据来源，查询服务通过它访问上游
#[async_trait]
pub trait GistSource: Send + Sync {
    /// 获取用户某一页的公开 gist，只尝试一次，不重试
    async fn fetch_gists(&self, username: &str, page: u32) -> Result<Vec<RawGist>, UpstreamError>;
}
