//! 入站请求路径解析

use url::form_urlencoded;

/// 未指定页码时的默认页
pub const DEFAULT_PAGE: u32 = 1;

/// 路径解析结果
///
/// `username` 为 `None` 表示路径格式错误；`username` 存在但 `page` 为 `None`
/// 表示查询参数不合法，此时仍保留用户名用于日志。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    pub username: Option<String>,
    pub page: Option<u32>,
}

impl ParsedRequest {
    fn malformed() -> Self {
        Self {
            username: None,
            page: None,
        }
    }
}

/// 从 `/<username>[?page=N]` 形式的路径中提取用户名和页码
pub fn parse(path: &str) -> ParsedRequest {
    let (path, query) = match path.split_once('?') {
        Some((path, query)) => (path, query),
        None => (path, ""),
    };

    let mut segments = path.trim_matches('/').split('/');
    let username = match (segments.next(), segments.next()) {
        (Some(segment), None) if !segment.is_empty() => segment.to_string(),
        _ => return ParsedRequest::malformed(),
    };

    let page = parse_page(query);
    ParsedRequest {
        username: Some(username),
        page,
    }
}

fn parse_page(query: &str) -> Option<u32> {
    let mut page = None;
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if key != "page" {
            return None;
        }
        // 同名参数只取第一个
        if page.is_none() {
            page = Some(value.into_owned());
        }
    }

    let Some(raw) = page else {
        return Some(DEFAULT_PAGE);
    };
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().filter(|page| *page >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(username: Option<&str>, page: Option<u32>) -> ParsedRequest {
        ParsedRequest {
            username: username.map(str::to_string),
            page,
        }
    }

    #[test]
    fn single_segment_defaults_to_first_page() {
        for path in ["/octocat", "octocat", "/octocat/", "//octocat//", "/Octo-Cat_1"] {
            let expected = path.trim_matches('/');
            assert_eq!(parse(path), parsed(Some(expected), Some(1)), "{path}");
        }
    }

    #[test]
    fn zero_or_many_segments_are_malformed() {
        for path in ["", "/", "//", "/user/name", "/a//b", "/a/b/c", "/?page=2", "/user/name?page=2"] {
            assert_eq!(parse(path), ParsedRequest::malformed(), "{path}");
        }
    }

    #[test]
    fn leading_double_slash_is_trimmed_not_read_as_host() {
        assert_eq!(parse("//octocat"), parsed(Some("octocat"), Some(1)));
        assert_eq!(parse("//octocat?page=2"), parsed(Some("octocat"), Some(2)));
        assert_eq!(parse("//octocat/gists"), ParsedRequest::malformed());
    }

    #[test]
    fn explicit_page_is_used() {
        assert_eq!(parse("/octocat?page=3"), parsed(Some("octocat"), Some(3)));
        assert_eq!(parse("/octocat?page=007"), parsed(Some("octocat"), Some(7)));
    }

    #[test]
    fn invalid_page_keeps_username() {
        for path in [
            "/gituser?page=0",
            "/gituser?page=-1",
            "/gituser?page=abc",
            "/gituser?page=as",
            "/gituser?page=",
            "/gituser?page=1.5",
            "/gituser?page=+1",
            "/gituser?page=99999999999999999999",
        ] {
            assert_eq!(parse(path), parsed(Some("gituser"), None), "{path}");
        }
    }

    #[test]
    fn unknown_query_key_invalidates_page() {
        for path in ["/user?query", "/user?page=2&query=1", "/user?foo=bar&page=2", "/user?=1"] {
            assert_eq!(parse(path), parsed(Some("user"), None), "{path}");
        }
    }

    #[test]
    fn repeated_page_uses_first_value() {
        assert_eq!(parse("/user?page=2&page=x"), parsed(Some("user"), Some(2)));
    }

    #[test]
    fn favicon_is_accepted_syntactically() {
        assert_eq!(parse("/favicon.ico"), parsed(Some("favicon.ico"), Some(1)));
    }
}
