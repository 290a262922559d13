//! 模式文件加载（TOML）
//!
//! 文件格式示例：
//!
//! ```toml
//! tag = '<([A-Za-z][\w.-]*)\s+([^>]+?)/?>'
//! attribute = '([\w-]+)(?:\s*=|\s+|$)'
//! ```
//!
//! 两个字段都可省略，省略时使用内置启发式正则。
use serde::Deserialize;
use std::path::Path;

use crate::error::ScanError;

/// 内置标签正则：组 1 为标签名，组 2 为属性串
pub const DEFAULT_TAG_PATTERN: &str = r"<([A-Z][a-zA-Z0-9.]+|[a-z][a-z0-9-]*)\s+([^>]+?)/?>";

/// 内置属性名正则：组 1 为属性名（后随 `=值`、空白或串尾）
pub const DEFAULT_ATTRIBUTE_PATTERN: &str =
    r#"([a-zA-Z0-9-]+)(?:\s*=\s*(?:\{[^\}]+\}|"[^"]*"|'[^']*')|\s+|$)"#;

/// 模式文件顶层结构
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PatternFile {
    #[serde(default)]
    tag: Option<String>,
    /// 兼容写法：`attr`
    #[serde(default, alias = "attr")]
    attribute: Option<String>,
}

/// 归一化后的模式规格
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSpec {
    pub tag: String,
    pub attribute: String,
}

impl Default for PatternSpec {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG_PATTERN.to_string(),
            attribute: DEFAULT_ATTRIBUTE_PATTERN.to_string(),
        }
    }
}

/// 从 TOML 模式文件加载，缺省字段回退到内置正则
pub fn load_pattern_spec(path: &Path) -> Result<PatternSpec, ScanError> {
    let txt = std::fs::read_to_string(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: PatternFile = toml::from_str(&txt).map_err(|e| ScanError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let defaults = PatternSpec::default();
    Ok(PatternSpec {
        tag: parsed.tag.unwrap_or(defaults.tag),
        attribute: parsed.attribute.unwrap_or(defaults.attribute),
    })
}
