//! 重复属性扫描库
//!
//! 设计要点：
//! - 单文件、单线程：整文件读入后做一次正则匹配，按标签统计属性名。
//! - 标签/属性名提取隐藏在 `MarkupScanner` 之后，可替换为真正的解析器。
//! - 报告项按标签在文档中的顺序输出；同一标签内的重复名是集合。
//! - 启发式而非解析器：属性值内的 `>` 会截断标签，属于已知局限。

mod detectors;
mod engine_utf8;
mod error;
mod findings;
mod options;
mod patterns;
mod scan;
mod types;

pub use detectors::{MarkupScanner, RegexScanner};
pub use error::ScanError;
pub use findings::find_duplicate_attrs;
pub use options::{OutputFormat, ScanOptions, ScanStats};
pub use patterns::{load_pattern_spec, PatternSpec, DEFAULT_ATTRIBUTE_PATTERN, DEFAULT_TAG_PATTERN};
pub use scan::{scan_and_write, scan_file, write_report, NO_DUPLICATES_MESSAGE};
pub use types::{DuplicateReport, TagOccurrence};
