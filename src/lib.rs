use config::Config;
use std::sync::Arc;

use lookup::GistLookupService;

pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod lookup;
pub mod middleware;
pub mod router;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub gists: Arc<GistLookupService>,
}

impl AppState {
    /// 使用 GitHub 客户端和进程内缓存构建应用状态
    pub fn from_config(config: Config) -> Result<Self, reqwest::Error> {
        let client =
            github::GitHubClient::new(&config.github_api_base_url, config.request_timeout())?;
        let gists =
            GistLookupService::new(Arc::new(client), Arc::new(cache::MemoryGistCache::new()));
        Ok(AppState {
            config,
            gists: Arc::new(gists),
        })
    }
}
