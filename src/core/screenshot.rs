//! # Screenshot Capture Module / 截图捕获模块

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::path::Path;

use crate::core::models::ScreenshotArtifact;
use crate::core::session::BrowserSession;
use crate::infra::fs::{screenshot_file_name, write_artifact};

/// Takes a screenshot of the current page and writes it into `dir`.
///
/// The file name embeds the case input and `now` in epoch milliseconds, so
/// captures for different cases or instants do not collide. `dir_name` is the
/// name of `dir` as seen from the report file and forms the relative media path.
///
/// 截取当前页面并写入 `dir`。文件名包含用例输入和 `now` 的毫秒时间戳，
/// 因此不同用例或不同时刻的截图不会冲突。`dir_name` 是从报告文件角度看到的
/// `dir` 名称，用于构成相对媒体路径。
pub async fn capture<S: BrowserSession>(
    session: &S,
    dir: &Path,
    dir_name: &str,
    case_input: &str,
    now: DateTime<Local>,
) -> Result<ScreenshotArtifact> {
    let png = session
        .screenshot_png()
        .await
        .context("Failed to take screenshot")?;

    let file_name = screenshot_file_name(case_input, now.timestamp_millis());
    let path = dir.join(&file_name);
    write_artifact(&path, &png)?;

    Ok(ScreenshotArtifact {
        path,
        relative_path: format!("./{dir_name}/{file_name}"),
        case_input: case_input.to_string(),
    })
}
