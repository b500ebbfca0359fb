//! # Report Sink Module / 报告接收器模块
//!
//! An append-only log of report nodes, one per case. Nodes collect timestamped
//! entries during the run; `flush` renders the whole sink to the bound HTML
//! file and a JSON twin next to it.
//!
//! 只追加的报告节点日志，每个用例一个节点。节点在运行期间收集带时间戳的条目；
//! `flush` 将整个接收器渲染为绑定的 HTML 文件及其旁边的 JSON 文件。

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::models::{CaseFailure, CaseStatus, EntryLevel, MediaRef, ReportEntry};
use crate::infra::fs::write_artifact;
use crate::reporting::html::render_report;

/// Index of a node inside the sink that created it. Only a sink hands
/// these out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// The ordered log of entries for one case.
/// 单个用例的有序条目日志。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportNode {
    pub title: String,
    pub entries: Vec<ReportEntry>,
}

impl ReportNode {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    fn push(
        &mut self,
        level: EntryLevel,
        message: impl Into<String>,
        media: Option<MediaRef>,
        detail: Option<CaseFailure>,
    ) -> &mut Self {
        self.entries.push(ReportEntry {
            timestamp: Local::now(),
            level,
            message: message.into(),
            media,
            detail,
        });
        self
    }

    pub fn info(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(EntryLevel::Info, message, None, None)
    }

    pub fn info_with_media(&mut self, message: impl Into<String>, media: MediaRef) -> &mut Self {
        self.push(EntryLevel::Info, message, Some(media), None)
    }

    pub fn pass(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(EntryLevel::Pass, message, None, None)
    }

    pub fn fail(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(EntryLevel::Fail, message, None, None)
    }

    /// Records a failure together with its structured detail, which the HTML
    /// report renders as an expandable block.
    ///
    /// 记录失败及其结构化详情，HTML 报告会将其渲染为可展开的区块。
    pub fn fail_with_detail(&mut self, message: impl Into<String>, detail: CaseFailure) -> &mut Self {
        self.push(EntryLevel::Fail, message, None, Some(detail))
    }

    /// Status carried by the last pass/fail entry; `Started` if there is none.
    /// 由最后一个通过/失败条目决定的状态；若不存在则为 `Started`。
    pub fn status(&self) -> CaseStatus {
        match self.entries.iter().rev().find(|e| e.level.is_terminal()) {
            Some(entry) if entry.level == EntryLevel::Pass => CaseStatus::Passed,
            Some(_) => CaseStatus::Failed,
            None => CaseStatus::Started,
        }
    }

    pub fn last_entry(&self) -> Option<&ReportEntry> {
        self.entries.last()
    }
}

/// The serialized form of a sink, as written to the JSON twin.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportDocument {
    pub started_at: DateTime<Local>,
    pub nodes: Vec<ReportNode>,
}

#[derive(Debug)]
pub struct ReportSink {
    nodes: Vec<ReportNode>,
    output: Option<PathBuf>,
    started_at: DateTime<Local>,
    locale: String,
}

impl ReportSink {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            nodes: Vec::new(),
            output: None,
            started_at: Local::now(),
            locale: locale.into(),
        }
    }

    /// Binds the HTML output path. The JSON twin shares its file stem.
    /// 绑定 HTML 输出路径。JSON 文件与其共享文件名主干。
    pub fn attach(&mut self, html_path: impl Into<PathBuf>) {
        self.output = Some(html_path.into());
    }

    pub fn html_path(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn json_path(&self) -> Option<PathBuf> {
        self.output.as_ref().map(|p| p.with_extension("json"))
    }

    /// Appends a fresh node titled `title`.
    pub fn create_node(&mut self, title: impl Into<String>) -> NodeId {
        self.nodes.push(ReportNode::new(title));
        NodeId(self.nodes.len() - 1)
    }

    /// Looks up a node by id.
    ///
    /// # Panics / 恐慌
    /// A `NodeId` is only valid for the sink that created it; an id from
    /// another sink with fewer nodes panics.
    ///
    /// `NodeId` 仅对创建它的接收器有效；来自其他节点更少的接收器的 id 会导致恐慌。
    pub fn node(&self, id: NodeId) -> &ReportNode {
        &self.nodes[id.0]
    }

    /// Mutable counterpart of [`ReportSink::node`], with the same panic rule.
    pub fn node_mut(&mut self, id: NodeId) -> &mut ReportNode {
        &mut self.nodes[id.0]
    }

    pub fn nodes(&self) -> &[ReportNode] {
        &self.nodes
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Writes the HTML report and its JSON twin.
    ///
    /// The output depends only on the sink's contents, so flushing an unchanged
    /// sink again rewrites identical files.
    ///
    /// 写入 HTML 报告及其 JSON 文件。输出仅取决于接收器内容，
    /// 因此再次刷新未改变的接收器会写出完全相同的文件。
    ///
    /// # Errors / 错误
    /// Fails when no output is bound or a file cannot be written.
    pub fn flush(&self) -> Result<PathBuf> {
        let Some(html_path) = self.output.clone() else {
            bail!("Report sink has no output path attached");
        };

        let html = render_report(self);
        write_artifact(&html_path, html.as_bytes())?;

        let document = ReportDocument {
            started_at: self.started_at,
            nodes: self.nodes.clone(),
        };
        let json = serde_json::to_string_pretty(&document).context("Failed to serialize report")?;
        write_artifact(&html_path.with_extension("json"), json.as_bytes())?;

        Ok(html_path)
    }
}
