// 缓存模块
// 按 (用户名, 页码) 缓存上游返回的原始 gist 列表

pub mod keys;
pub mod memory;

pub use keys::gist_cache_key;
pub use memory::MemoryGistCache;

use crate::github::RawGist;

/// gist 缓存，查询服务持有并独占写入
///
/// 条目在首次成功获取后创建，进程生命周期内不过期、不淘汰。
pub trait GistCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Vec<RawGist>>;

    fn set(&self, key: String, gists: Vec<RawGist>);
}
