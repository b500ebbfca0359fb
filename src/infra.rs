//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the search suite:
//! file system operations and the WebDriver-backed browser session.
//!
//! 此模块为搜索套件提供基础设施服务：文件系统操作和基于 WebDriver 的浏览器会话。

pub mod fs;
pub mod webdriver;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
