use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::github::RawGist;

use super::GistCache;

/// 进程内 gist 缓存
#[derive(Debug, Default)]
pub struct MemoryGistCache {
    entries: RwLock<HashMap<String, Vec<RawGist>>>,
}

impl MemoryGistCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GistCache for MemoryGistCache {
    fn get(&self, key: &str) -> Option<Vec<RawGist>> {
        // 锁中毒时仍然读取数据，单个请求的 panic 不影响其他请求
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: String, gists: Vec<RawGist>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, gists);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn gist(id: &str) -> RawGist {
        RawGist {
            id: Some(id.to_string()),
            ..RawGist::default()
        }
    }

    #[test]
    fn set_then_get_returns_stored_list() {
        let cache = MemoryGistCache::new();
        assert!(cache.get("octocat_1").is_none());

        cache.set("octocat_1".to_string(), vec![gist("a")]);
        assert_eq!(cache.get("octocat_1"), Some(vec![gist("a")]));
        assert!(cache.get("octocat_2").is_none());
    }

    #[test]
    fn set_overwrites_existing_entry() {
        let cache = MemoryGistCache::new();
        cache.set("octocat_1".to_string(), Vec::new());
        cache.set("octocat_1".to_string(), vec![gist("b")]);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("octocat_1"), Some(vec![gist("b")]));
    }

    #[test]
    fn concurrent_writers_do_not_lose_entries() {
        let cache = Arc::new(MemoryGistCache::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    cache.set(format!("user_{}", i), vec![gist("x")]);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 8);
    }
}
