//! 错误类型
use std::path::PathBuf;
use thiserror::Error;

/// 扫描过程中可能出现的致命错误
///
/// 正则未命中不属于错误：启发式扫描只是少报，不会走到这里。
#[derive(Debug, Error)]
pub enum ScanError {
    /// 读取输入文件失败（不存在、无权限等）
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 输入文件不是合法的 UTF-8
    #[error("{path} is not valid UTF-8")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// 模式文件无法解析
    #[error("invalid pattern file {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// 正则编译失败
    #[error("invalid {kind} pattern")]
    Pattern {
        kind: &'static str,
        #[source]
        source: regex::Error,
    },

    /// 正则缺少必需的捕获组
    #[error("{kind} pattern needs at least {required} capture group(s), found {found}")]
    MissingGroup {
        kind: &'static str,
        required: usize,
        found: usize,
    },

    /// 写报告失败
    #[error("failed to write report")]
    Write(#[from] std::io::Error),

    /// JSON 序列化失败
    #[error("failed to serialize report")]
    Json(#[from] serde_json::Error),
}
