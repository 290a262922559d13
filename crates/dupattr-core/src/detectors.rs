//! 标签与属性名提取器
//!
//! 重复检测只依赖 [`MarkupScanner`]，默认实现为基于正则的启发式扫描
//! [`RegexScanner`]。已知局限：属性值或表达式内出现字面量 `>` 时，
//! 该标签会被提前截断。
use regex::Regex;

use crate::error::ScanError;
use crate::patterns::PatternSpec;
use crate::types::TagOccurrence;

/// 标签/属性名提取接口
pub trait MarkupScanner {
    /// 按文档顺序返回所有标签命中
    fn scan_tags<'a>(&self, content: &'a str) -> Vec<TagOccurrence<'a>>;

    /// 按出现顺序返回属性串中的属性名（保留重复）
    fn scan_attribute_names<'a>(&self, attributes: &'a str) -> Vec<&'a str>;
}

/// 基于正则的启发式提取器
#[derive(Debug, Clone)]
pub struct RegexScanner {
    tag: Regex,
    attribute: Regex,
}

impl RegexScanner {
    /// 使用内置正则构建
    pub fn new() -> Result<Self, ScanError> {
        Self::from_spec(&PatternSpec::default())
    }

    /// 从模式规格构建；校验捕获组数量
    pub fn from_spec(spec: &PatternSpec) -> Result<Self, ScanError> {
        let tag = compile("tag", &spec.tag, 2)?;
        let attribute = compile("attribute", &spec.attribute, 1)?;
        Ok(Self { tag, attribute })
    }
}

fn compile(kind: &'static str, pat: &str, required: usize) -> Result<Regex, ScanError> {
    let rx = Regex::new(pat).map_err(|source| ScanError::Pattern { kind, source })?;
    // captures_len 含整体匹配（组 0）
    let found = rx.captures_len() - 1;
    if found < required {
        return Err(ScanError::MissingGroup { kind, required, found });
    }
    Ok(rx)
}

impl MarkupScanner for RegexScanner {
    fn scan_tags<'a>(&self, content: &'a str) -> Vec<TagOccurrence<'a>> {
        let mut out = Vec::new();
        for caps in self.tag.captures_iter(content) {
            // 自定义正则中的可选组可能未参与匹配，直接跳过
            let (Some(name), Some(attrs)) = (caps.get(1), caps.get(2)) else { continue };
            let offset = caps.get(0).map(|m| m.start()).unwrap_or(name.start());
            out.push(TagOccurrence { name: name.as_str(), attributes: attrs.as_str(), offset });
        }
        out
    }

    fn scan_attribute_names<'a>(&self, attributes: &'a str) -> Vec<&'a str> {
        self.attribute
            .captures_iter(attributes)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|name| !name.is_empty())
            .collect()
    }
}
