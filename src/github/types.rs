// GitHub gists API 响应类型

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// `GET /users/{username}/gists` 返回的单条 gist 记录
///
/// 只保留需要的字段，其余字段忽略。所有字段都允许缺失或为 null。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGist {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// 外层 `None` 表示字段缺失，`Some(None)` 表示字段为 null
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub html_url: Option<Option<String>>,
    /// 文件名 -> 文件元数据，保持上游顺序
    #[serde(default)]
    pub files: Option<Map<String, Value>>,
}

/// 字段存在即为 `Some`，即使值为 null
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_github_payload_and_keeps_file_order() {
        let body = r#"[{
            "id": "aa5a315d61ae9438b18d",
            "description": null,
            "html_url": "https://gist.github.com/aa5a315d61ae9438b18d",
            "public": true,
            "files": {
                "zeta.rb": {"filename": "zeta.rb", "size": 12},
                "alpha.md": {"filename": "alpha.md", "size": 3}
            }
        }]"#;

        let gists: Vec<RawGist> = serde_json::from_str(body).unwrap();
        assert_eq!(gists.len(), 1);
        assert_eq!(gists[0].id.as_deref(), Some("aa5a315d61ae9438b18d"));
        assert_eq!(gists[0].description, None);
        assert_eq!(
            gists[0].html_url,
            Some(Some(
                "https://gist.github.com/aa5a315d61ae9438b18d".to_string()
            ))
        );

        let names: Vec<&String> = gists[0].files.as_ref().unwrap().keys().collect();
        assert_eq!(names, ["zeta.rb", "alpha.md"]);
    }

    #[test]
    fn null_html_url_differs_from_missing() {
        let gists: Vec<RawGist> =
            serde_json::from_str(r#"[{"html_url": null}, {}]"#).unwrap();
        assert_eq!(gists[0].html_url, Some(None));
        assert_eq!(gists[1].html_url, None);
    }

    #[test]
    fn missing_fields_default_to_none() {
        let gists: Vec<RawGist> = serde_json::from_str(r#"[{}]"#).unwrap();
        assert_eq!(gists[0], RawGist::default());
    }
}
