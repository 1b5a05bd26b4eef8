/// 生成 gist 缓存键，格式为 `{username}_{page}`
pub fn gist_cache_key(username: &str, page: u32) -> String {
    format!("{}_{}", username, page)
}
