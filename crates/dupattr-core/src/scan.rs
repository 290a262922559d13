//! 扫描主流程与报告输出
use std::io::Write;
use std::path::Path;

use crate::detectors::RegexScanner;
use crate::engine_utf8::read_source;
use crate::error::ScanError;
use crate::findings::detect;
use crate::options::{OutputFormat, ScanOptions, ScanStats};
use crate::patterns::{load_pattern_spec, PatternSpec};
use crate::types::DuplicateReport;

/// 无命中时的固定输出
pub const NO_DUPLICATES_MESSAGE: &str = "No duplicate attributes found.";

/// 读取单个文件并返回报告项（不输出）
pub fn scan_file(path: &Path, opts: &ScanOptions) -> Result<(Vec<DuplicateReport>, ScanStats), ScanError> {
    // 先构建扫描器：模式文件错误应在读取输入之前暴露
    let spec = match &opts.patterns_path {
        Some(p) => load_pattern_spec(p)?,
        None => PatternSpec::default(),
    };
    let scanner = RegexScanner::from_spec(&spec)?;

    let content = read_source(path)?;
    let mut stats = ScanStats::default();
    let reports = detect(&scanner, &content, &mut stats);
    Ok((reports, stats))
}

/// 扫描单个文件并将报告写入 `out`
pub fn scan_and_write(path: &Path, out: &mut dyn Write, opts: &ScanOptions) -> Result<ScanStats, ScanError> {
    let (reports, stats) = scan_file(path, opts)?;
    write_report(&reports, out, opts.format)?;
    Ok(stats)
}

/// 按指定格式输出报告
pub fn write_report(reports: &[DuplicateReport], out: &mut dyn Write, format: OutputFormat) -> Result<(), ScanError> {
    match format {
        OutputFormat::Text => write_text(reports, out),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, reports)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn write_text(reports: &[DuplicateReport], out: &mut dyn Write) -> Result<(), ScanError> {
    if reports.is_empty() {
        writeln!(out, "{NO_DUPLICATES_MESSAGE}")?;
        return Ok(());
    }
    for r in reports {
        let names: Vec<&str> = r.duplicates.iter().map(String::as_str).collect();
        writeln!(out, "Duplicate attributes [{}] in tag <{}>:", names.join(", "), r.tag)?;
        writeln!(out, "Full attributes string: {}", r.attributes)?;
        writeln!(out, "{}", "-".repeat(20))?;
    }
    Ok(())
}
