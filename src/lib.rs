//! # Search Suite Library / Search Suite 库
//!
//! This library drives a browser through a fixed table of search cases,
//! checks each result page, captures a screenshot per case and records every
//! outcome into an HTML report.
//!
//! 此库驱动浏览器执行固定的搜索用例表，检查每个结果页面，
//! 为每个用例捕获截图，并将所有结果记录到 HTML 报告中。
//!
//! ## Modules / 模块
//!
//! - `core` - Case table, configuration, case execution and the run lifecycle
//! - `infra` - File system operations and the WebDriver session
//! - `reporting` - Report sink, HTML rendering and console summaries
//! - `cli` / `commands` - Command-line interface and subcommands
//!
//! - `core` - 用例表、配置、用例执行和运行生命周期
//! - `infra` - 文件系统操作和 WebDriver 会话
//! - `reporting` - 报告接收器、HTML 渲染和控制台摘要
//! - `cli` / `commands` - 命令行接口和子命令

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::config;
pub use core::models;
pub use infra::t;

/// Picks the locale to use from an explicit request, falling back to the
/// system locale and finally to "en".
///
/// Tries the full locale first (e.g. "zh-CN"), then its language part
/// (e.g. "en" from "en-US").
///
/// 从显式请求中选择要使用的语言环境，回退到系统语言环境，最终回退到 "en"。
pub fn resolve_locale(requested: Option<&str>) -> String {
    let locale = requested
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    let is_available = |code: &str| available_locales.iter().any(|l| *l == code);

    if is_available(&locale) {
        return locale;
    }
    locale
        .split(['-', '_'])
        .next()
        .filter(|lang_code| is_available(lang_code))
        .unwrap_or("en")
        .to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
