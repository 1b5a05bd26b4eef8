// gist 查询模块
// 请求解析、结果整理以及编排服务

pub mod parser;
pub mod service;
pub mod shaper;

pub use parser::{ParsedRequest, parse};
pub use service::{GistLookupService, LookupResponse, Payload};
pub use shaper::{ErrorPayload, ShapedGist, ShapedGistList, error_payload, shape};
