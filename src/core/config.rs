//! # Configuration Module / 配置模块
//!
//! Holds the fixed table of search cases and the optional `SearchSuite.toml`
//! settings that describe where the browser lives and what the page looks like.
//!
//! 包含固定的搜索用例表以及可选的 `SearchSuite.toml` 设置，
//! 用于描述浏览器的位置以及页面结构。

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

/// Default configuration file name looked up in the working directory.
/// 在工作目录中查找的默认配置文件名。
pub const DEFAULT_CONFIG_FILE: &str = "SearchSuite.toml";

/// Upper bound for `wait_timeout_secs`. / `wait_timeout_secs` 的上限。
pub const MAX_WAIT_TIMEOUT_SECS: u64 = 3600;

/// A single (input, expected) pair under test.
/// 单个待测试的（输入，期望）对。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSpec {
    /// The text typed into the search box. Also the case identity.
    /// 输入到搜索框的文本，同时也是用例的标识。
    pub input: String,
    /// The exact text one of the result titles must carry.
    /// 某个结果标题必须完全匹配的文本。
    pub expected: String,
}

impl CaseSpec {
    pub fn new(input: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected: expected.into(),
        }
    }
}

/// The literal case table, in execution order.
/// 字面量用例表，按执行顺序排列。
pub fn default_cases() -> Vec<CaseSpec> {
    vec![
        CaseSpec::new("Junit Test", "Unit testing"),
        CaseSpec::new("Womens day", "Woman's Day Fail Test For report"),
        CaseSpec::new("Fathers Day", "Father"),
    ]
}

/// Locators and URL of the search page.
/// 搜索页面的定位器与 URL。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub url: String,
    pub search_box_id: String,
    pub result_stats_id: String,
    pub result_title_xpath: String,
    /// Appended to the case input to form the expected page title.
    /// 追加到用例输入之后，构成期望的页面标题。
    pub title_suffix: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            url: "https://www.google.com/".to_string(),
            search_box_id: "lst-ib".to_string(),
            result_stats_id: "resultStats".to_string(),
            result_title_xpath: "//div[@id='rhs_title']//span".to_string(),
            title_suffix: " - Google Search".to_string(),
        }
    }
}

/// Represents the whole suite configuration, loaded from a TOML file.
/// Every key is optional.
///
/// 代表从 TOML 文件加载的整个套件配置。所有键都是可选的。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// The language for console and report text (e.g., "en", "zh-CN").
    /// 控制台和报告文本使用的语言（例如 "en", "zh-CN"）。
    pub language: String,
    /// URL of the running WebDriver server (chromedriver by default).
    /// 正在运行的 WebDriver 服务器的 URL（默认为 chromedriver）。
    pub webdriver_url: String,
    pub headless: bool,
    /// Upper bound for element lookups and page loads, in seconds.
    /// 元素查找和页面加载的时间上限（秒）。
    pub wait_timeout_secs: u64,
    /// Output directory, relative to the working directory unless absolute.
    /// 输出目录；除非为绝对路径，否则相对于工作目录。
    pub output_dir: String,
    pub report_file: String,
    pub screenshot_dir: String,
    pub page: PageConfig,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            webdriver_url: "http://localhost:9515".to_string(),
            headless: false,
            wait_timeout_secs: 5,
            output_dir: "test-output".to_string(),
            report_file: "SearchReport.html".to_string(),
            screenshot_dir: "ScreenShot".to_string(),
            page: PageConfig::default(),
        }
    }
}

impl SuiteConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse suite configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that parse but cannot drive a run.
    /// 拒绝能够解析但无法用于运行的值。
    pub fn validate(&self) -> Result<()> {
        if self.wait_timeout_secs > MAX_WAIT_TIMEOUT_SECS {
            bail!(
                "wait_timeout_secs must be at most {MAX_WAIT_TIMEOUT_SECS}, got {}",
                self.wait_timeout_secs
            );
        }
        Ok(())
    }

    /// Reads and parses a configuration file.
    /// 读取并解析配置文件。
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Resolves the configuration to use for a run.
    ///
    /// An explicit path must exist. Without one, `SearchSuite.toml` in `cwd`
    /// is used when present, otherwise the defaults.
    ///
    /// 解析本次运行使用的配置。显式给出的路径必须存在；
    /// 否则若 `cwd` 中存在 `SearchSuite.toml` 则使用它，不存在则使用默认值。
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let candidate = cwd.join(DEFAULT_CONFIG_FILE);
                if candidate.is_file() {
                    Self::load(&candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize suite configuration")
    }

    /// Resolves the output directory against `cwd`, expanding `~` and `$VAR`.
    /// 基于 `cwd` 解析输出目录，并展开 `~` 与 `$VAR`。
    ///
    /// The output directory is emptied at the start of every run, so it must
    /// not be empty, the working directory, the home directory, or any parent
    /// of those two.
    ///
    /// 输出目录在每次运行开始时都会被清空，因此它不能为空，
    /// 也不能是工作目录、主目录或二者的任何上级目录。
    pub fn resolve_output_dir(&self, cwd: &Path) -> Result<PathBuf> {
        if self.output_dir.trim().is_empty() {
            bail!("Output dir must not be empty");
        }
        let expanded = shellexpand::full(&self.output_dir)
            .with_context(|| format!("Failed to expand output dir: {}", self.output_dir))?;
        let path = normalize(&cwd.join(expanded.as_ref()));

        let home = PathBuf::from(shellexpand::tilde("~").as_ref());
        let protected = std::iter::once(normalize(cwd))
            .chain(home.is_absolute().then(|| normalize(&home)));
        for dir in protected {
            if dir.starts_with(&path) {
                bail!(
                    "Refusing to use {} as output dir: it contains {}",
                    path.display(),
                    dir.display()
                );
            }
        }
        Ok(path)
    }

    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }

    /// Budget for a single driver command; generous enough to cover an
    /// implicit wait that runs to its limit.
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs.max(1).saturating_mul(4))
    }
}

/// Resolves `.` and `..` lexically, without touching the file system.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
