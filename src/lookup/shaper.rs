//! 将上游 gist 列表整理为对外的 JSON 结构

use serde::{Deserialize, Serialize};

use crate::github::RawGist;

/// gist 没有描述时使用的占位文本
pub const NO_DESCRIPTION: &str = "No Description";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapedGist {
    pub id: Option<String>,
    pub description: String,
    pub html_url: Option<String>,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapedGistList {
    pub name: String,
    pub page: u32,
    /// 上游返回的原始数量，包含被过滤掉的记录
    pub total_gists: usize,
    pub gists_list: Vec<ShapedGist>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

/// 整理 gist 列表，缺少 `html_url` 字段的记录被丢弃但仍计入 `total_gists`
///
/// 字段存在但值为 null 的记录保留，`html_url` 输出为 null。
pub fn shape(username: &str, gists: &[RawGist], page: u32) -> ShapedGistList {
    let gists_list = gists
        .iter()
        .filter_map(|gist| {
            let html_url = gist.html_url.clone()?;
            Some(ShapedGist {
                id: gist.id.clone(),
                description: gist
                    .description
                    .clone()
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
                html_url,
                files: gist
                    .files
                    .as_ref()
                    .map(|files| files.keys().cloned().collect())
                    .unwrap_or_default(),
            })
        })
        .collect();

    ShapedGistList {
        name: username.to_string(),
        page,
        total_gists: gists.len(),
        gists_list,
    }
}

pub fn error_payload(message: impl Into<String>) -> ErrorPayload {
    ErrorPayload {
        error: message.into(),
    }
}
