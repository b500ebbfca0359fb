//! # Configuration Initialization Module / 配置初始化模块
//!
//! Writes a `SearchSuite.toml` filled with the default settings so they can be
//! edited in place.
//!
//! 写入一个填充了默认设置的 `SearchSuite.toml`，以便直接编辑。

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::{DEFAULT_CONFIG_FILE, SuiteConfig};
use crate::t;

/// Writes the default configuration into `dir`.
///
/// An existing file is left alone unless `force` is set.
///
/// # Returns
/// The path of the config file, or `None` when an existing one was kept.
pub fn execute(dir: &Path, force: bool, language: &str) -> Result<Option<PathBuf>> {
    let config_path = dir.join(DEFAULT_CONFIG_FILE);

    if config_path.exists() && !force {
        println!(
            "{}",
            t!("init_exists", locale = language, path = config_path.display()).yellow()
        );
        return Ok(None);
    }

    let config = SuiteConfig {
        language: language.to_string(),
        ..SuiteConfig::default()
    };
    let content = config.to_toml_string()?;
    fs::write(&config_path, content)
        .with_context(|| t!("init_write_failed", locale = language, path = config_path.display()).to_string())?;

    println!(
        "{}",
        t!("init_success", locale = language, path = config_path.display()).green()
    );
    Ok(Some(config_path))
}
