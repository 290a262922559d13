//! 重复属性检测
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

use crate::detectors::MarkupScanner;
use crate::options::ScanStats;
use crate::types::DuplicateReport;

/// 找出所有存在重复属性名的标签
///
/// 纯函数：同样的输入总是得到同样顺序的报告项（按标签在文档中的顺序）。
pub fn find_duplicate_attrs<S: MarkupScanner + ?Sized>(scanner: &S, content: &str) -> Vec<DuplicateReport> {
    let mut stats = ScanStats::default();
    detect(scanner, content, &mut stats)
}

/// 检测并累计统计信息
pub(crate) fn detect<S: MarkupScanner + ?Sized>(
    scanner: &S,
    content: &str,
    stats: &mut ScanStats,
) -> Vec<DuplicateReport> {
    let mut results = Vec::new();
    // 行号增量计算：标签按偏移升序到达
    let mut line = 1usize;
    let mut line_pos = 0usize;

    for tag in scanner.scan_tags(content) {
        stats.tags_scanned += 1;

        let mut seen: HashSet<&str> = HashSet::new();
        let mut duplicates: BTreeSet<&str> = BTreeSet::new();
        for name in scanner.scan_attribute_names(tag.attributes) {
            if !seen.insert(name) {
                duplicates.insert(name);
            }
        }
        if duplicates.is_empty() {
            continue;
        }

        if tag.offset >= line_pos {
            line += content[line_pos..tag.offset].matches('\n').count();
            line_pos = tag.offset;
        }
        debug!(tag = tag.name, line, ?duplicates, "duplicate attributes");

        stats.tags_reported += 1;
        results.push(DuplicateReport {
            tag: tag.name.to_string(),
            duplicates: duplicates.into_iter().map(str::to_string).collect(),
            attributes: tag.attributes.trim().to_string(),
            line,
        });
    }

    results
}
