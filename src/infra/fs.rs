//! # File System Operations Module / 文件系统操作模块
//!
//! This module prepares the run's output directory and names the files
//! written into it.
//!
//! 此模块负责准备运行的输出目录，并为写入其中的文件命名。

use anyhow::{Context, Result};
use fs_extra::dir;
use std::fs;
use std::path::{Path, PathBuf};

/// Ensures `output_dir` exists and is empty, then creates the screenshot
/// subdirectory inside it.
///
/// Anything left by a previous run is removed. The directory itself is kept,
/// only its entries are deleted.
///
/// # Arguments
/// * `output_dir` - Directory receiving the report and screenshots
/// * `screenshot_dir` - Name of the screenshot subdirectory
///
/// # Returns
/// The absolute path of the screenshot subdirectory
pub fn prepare_output_dir(output_dir: &Path, screenshot_dir: &str) -> Result<PathBuf> {
    if output_dir.is_dir() {
        let stale = fs::read_dir(output_dir)
            .with_context(|| format!("Failed to read output directory: {}", output_dir.display()))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()
            .with_context(|| format!("Failed to read output directory: {}", output_dir.display()))?;
        fs_extra::remove_items(&stale).with_context(|| {
            format!("Failed to clean output directory: {}", output_dir.display())
        })?;
    } else {
        dir::create_all(output_dir, false).with_context(|| {
            format!(
                "Failed to prepare output directory: {}",
                output_dir.display()
            )
        })?;
    }

    let screenshots = output_dir.join(screenshot_dir);
    fs::create_dir_all(&screenshots).with_context(|| {
        format!(
            "Failed to create screenshot directory: {}",
            screenshots.display()
        )
    })?;

    Ok(screenshots)
}

/// Builds the screenshot file name for a case: the input, with characters that
/// cannot appear in a file name replaced by `_`, followed by the capture time
/// in epoch milliseconds.
///
/// 为用例构建截图文件名：输入文本（无法出现在文件名中的字符替换为 `_`），
/// 后接以毫秒为单位的捕获时间。
pub fn screenshot_file_name(case_input: &str, epoch_millis: i64) -> String {
    let sanitized: String = case_input
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{sanitized}{epoch_millis}.png")
}

/// Writes `bytes` to `path`, creating the parent directory if needed.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("Failed to write file: {}", path.display()))
}

