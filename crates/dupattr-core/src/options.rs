//! 扫描选项与统计信息（模块）
use std::path::PathBuf;

/// 报告输出格式
/// - Text：人类可读的三行一组文本
/// - Json：单个 JSON 数组，便于脚本消费
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 扫描选项
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// 输出格式
    pub format: OutputFormat,
    /// 模式文件路径（TOML）；为空则使用内置正则
    pub patterns_path: Option<PathBuf>,
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub tags_scanned: usize,
    pub tags_reported: usize,
}
