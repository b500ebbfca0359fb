//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures shared by the case executor and the
//! report sink: report entries, case failures and case outcomes.
//!
//! 此模块定义用例执行器与报告接收器共享的数据结构：
//! 报告条目、用例失败和用例结果。

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::infra::t;

/// Severity of a single report entry.
/// 单个报告条目的级别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryLevel {
    Info,
    Pass,
    Fail,
}

impl EntryLevel {
    pub fn is_terminal(self) -> bool {
        matches!(self, EntryLevel::Pass | EntryLevel::Fail)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            EntryLevel::Info => "level-info",
            EntryLevel::Pass => "level-pass",
            EntryLevel::Fail => "level-fail",
        }
    }

    pub fn label(self, locale: &str) -> String {
        match self {
            EntryLevel::Info => t!("report.level_info", locale = locale).to_string(),
            EntryLevel::Pass => t!("report.level_pass", locale = locale).to_string(),
            EntryLevel::Fail => t!("report.level_fail", locale = locale).to_string(),
        }
    }
}

/// A link from a report entry to a file next to the report, e.g. a screenshot.
/// 从报告条目指向报告旁边文件（例如截图）的链接。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    /// Path relative to the report file. / 相对于报告文件的路径。
    pub path: String,
}

/// Distinguishes a page that did not look as expected from a driver that
/// could not do what it was asked.
///
/// 区分“页面不符合预期”与“驱动无法完成请求的操作”两种情况。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// An expectation about the page did not hold. / 对页面的断言未成立。
    Assertion,
    /// Navigation, lookup or a timeout failed in the driver. / 驱动中的导航、查找或超时失败。
    Driver,
}

/// The failure of one case, carried as a value instead of a panic or error.
/// The `chain` holds every cause, outermost first, and is what the report
/// renders as the expandable detail.
///
/// 单个用例的失败，以值的形式携带，而不是 panic 或错误传播。
/// `chain` 按从外到内的顺序保存所有原因，并在报告中渲染为可展开的详情。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFailure {
    pub kind: FailureKind,
    pub message: String,
    pub chain: Vec<String>,
}

impl CaseFailure {
    pub fn assertion(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Assertion,
            message: message.into(),
            chain: Vec::new(),
        }
    }

    pub fn driver(error: &anyhow::Error) -> Self {
        let mut causes = error.chain().map(|cause| cause.to_string());
        let message = causes.next().unwrap_or_default();
        Self {
            kind: FailureKind::Driver,
            message,
            chain: causes.collect(),
        }
    }

    pub fn kind_label(&self, locale: &str) -> String {
        match self.kind {
            FailureKind::Assertion => t!("report.kind_assertion", locale = locale).to_string(),
            FailureKind::Driver => t!("report.kind_driver", locale = locale).to_string(),
        }
    }

    /// Appends a line of supporting detail, e.g. the value actually observed.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.chain.push(note.into());
        self
    }

    /// The detail block as plain text: the message, then one numbered line per
    /// cause or note.
    /// 以纯文本形式给出详情块：先是消息，然后每个原因或备注一行并编号。
    pub fn render_text(&self) -> String {
        let mut text = self.message.clone();
        if !self.chain.is_empty() {
            text.push('\n');
        }
        for (i, cause) in self.chain.iter().enumerate() {
            text.push_str(&format!("\n    {i}: {cause}"));
        }
        text
    }
}

impl fmt::Display for CaseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CaseFailure {}

/// One timestamped line in a report node.
/// 报告节点中一条带时间戳的记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub timestamp: DateTime<Local>,
    pub level: EntryLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<CaseFailure>,
}

/// Where a case currently stands.
/// 用例当前所处的状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    /// A node exists but carries no pass/fail entry yet.
    /// 节点已存在，但尚无通过/失败条目。
    Started,
    Passed,
    Failed,
}

impl CaseStatus {
    pub fn get_status_str(self, locale: &str) -> String {
        match self {
            CaseStatus::Started => t!("report.status_started", locale = locale).to_string(),
            CaseStatus::Passed => t!("report.status_passed", locale = locale).to_string(),
            CaseStatus::Failed => t!("report.status_failed", locale = locale).to_string(),
        }
    }

    pub fn get_status_class(self) -> &'static str {
        match self {
            CaseStatus::Started => "status-Started",
            CaseStatus::Passed => "status-Passed",
            CaseStatus::Failed => "status-Failed",
        }
    }
}

/// A screenshot written during a case.
/// 用例执行期间写入的截图。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotArtifact {
    /// Absolute location on disk. / 磁盘上的绝对位置。
    pub path: PathBuf,
    /// Location relative to the report file. / 相对于报告文件的位置。
    pub relative_path: String,
    pub case_input: String,
}

impl ScreenshotArtifact {
    pub fn media(&self) -> MediaRef {
        MediaRef {
            path: self.relative_path.clone(),
        }
    }
}

/// What the runner keeps about a finished case.
/// 运行器为已完成用例保留的信息。
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub input: String,
    pub expected: String,
    pub status: CaseStatus,
    pub failure: Option<CaseFailure>,
    pub duration: Duration,
    pub screenshot: Option<PathBuf>,
}

impl CaseOutcome {
    pub fn is_failure(&self) -> bool {
        self.status == CaseStatus::Failed
    }
}
