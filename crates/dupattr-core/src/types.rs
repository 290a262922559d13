//! 公共类型（对外暴露）
use serde::Serialize;
use std::collections::BTreeSet;

/// 一次标签命中：标签名 + 原始属性串
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOccurrence<'a> {
    pub name: &'a str,
    /// 标签名之后、`>` / `/>` 之前的原始文本（未裁剪）
    pub attributes: &'a str,
    /// `<` 在源文本中的字节偏移
    pub offset: usize,
}

/// 报告项：一个存在重复属性名的标签
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateReport {
    pub tag: String,
    /// 出现两次及以上的属性名（集合，按字典序输出）
    pub duplicates: BTreeSet<String>,
    /// 裁剪首尾空白后的属性串
    pub attributes: String,
    /// 标签所在行（从 1 开始）
    pub line: usize,
}
