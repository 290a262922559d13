//! UTF-8 源文件读取
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::ScanError;

/// 整文件读入内存并按 UTF-8 解码
/// - 打开/读取失败 → `ScanError::Io`
/// - 非法 UTF-8 → `ScanError::Decode`（不做有损转换，避免误报）
pub(crate) fn read_source(path: &Path) -> Result<String, ScanError> {
    let io_err = |source| ScanError::Io { path: path.to_path_buf(), source };
    let file = File::open(path).map_err(io_err)?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(io_err)?;

    String::from_utf8(buf).map_err(|source| ScanError::Decode { path: path.to_path_buf(), source })
}
