//! # HTML Reporting Module / HTML 报告模块
//!
//! This module renders a report sink into a single self-contained HTML page:
//! summary counters, then one section per case with its entries, screenshot
//! links and expandable failure details.
//!
//! 此模块将报告接收器渲染为单个独立的 HTML 页面：
//! 先是汇总计数，然后每个用例一个区块，包含其条目、截图链接和可展开的失败详情。

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::core::models::{CaseStatus, ReportEntry};
use crate::infra::t;
use crate::reporting::sink::{ReportNode, ReportSink};

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Embedded JavaScript for HTML report interactivity / HTML 报告交互性的嵌入式 JavaScript
const HTML_SCRIPT: &str = include_str!("assets/report.js");

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Renders the sink into an HTML document.
///
/// # Arguments / 参数
/// * `sink` - The sink whose nodes are rendered, in creation order
///            按创建顺序渲染其节点的接收器
///
/// # Returns / 返回值
/// The complete document as a string / 完整的文档字符串
pub fn render_report(sink: &ReportSink) -> String {
    let locale = sink.locale();
    let nodes = sink.nodes();
    let count = |status: CaseStatus| nodes.iter().filter(|n| n.status() == status).count();

    let page = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (t!("html_report.title", locale = locale)) }
                style { (PreEscaped(HTML_STYLE)) }
            }
            body {
                h1 { (t!("html_report.main_header", locale = locale)) }
                p class="started-at" {
                    (t!("html_report.started_at", locale = locale)) " "
                    (sink.started_at().format(TIME_FORMAT).to_string())
                }
                div class="summary-container" {
                    (summary_item(nodes.len(), "", &t!("html_report.summary.total", locale = locale)))
                    (summary_item(count(CaseStatus::Passed), "passed-text", &t!("html_report.summary.passed", locale = locale)))
                    (summary_item(count(CaseStatus::Failed), "failed-text", &t!("html_report.summary.failed", locale = locale)))
                }
                @for (i, node) in nodes.iter().enumerate() {
                    (render_node(i, node, locale))
                }
                script { (PreEscaped(HTML_SCRIPT)) }
            }
        }
    };
    page.into_string()
}

fn summary_item(count: usize, class: &str, label: &str) -> Markup {
    html! {
        div class="summary-item" {
            span class={ "count " (class) } { (count) }
            span class="label" { (label) }
        }
    }
}

fn render_node(index: usize, node: &ReportNode, locale: &str) -> Markup {
    let status = node.status();
    html! {
        section class="case" {
            div class="case-header" {
                h2 { (node.title) }
                div class={ "status-cell " (status.get_status_class()) } {
                    (status.get_status_str(locale))
                }
            }
            table {
                thead {
                    tr {
                        th class="time-col" { (t!("html_report.table.header.time", locale = locale)) }
                        th class="status-col" { (t!("html_report.table.header.level", locale = locale)) }
                        th { (t!("html_report.table.header.details", locale = locale)) }
                    }
                }
                tbody {
                    @for (j, entry) in node.entries.iter().enumerate() {
                        (render_entry(&format!("detail-{index}-{j}"), entry, locale))
                    }
                }
            }
        }
    }
}

fn render_entry(detail_id: &str, entry: &ReportEntry, locale: &str) -> Markup {
    html! {
        tr {
            td class="time-col" { (entry.timestamp.format(TIME_FORMAT).to_string()) }
            td class="status-col" {
                span class={ "level " (entry.level.css_class()) } { (entry.level.label(locale)) }
            }
            td {
                (entry.message)
                @if let Some(media) = &entry.media {
                    div class="media" {
                        a href=(media.path) target="_blank" {
                            img class="screenshot" src=(media.path) alt=(entry.message);
                        }
                    }
                }
                @if entry.detail.is_some() {
                    div class="output-toggle" onclick={ "toggleOutput('" (detail_id) "')" } {
                        (t!("html_report.toggle_output", locale = locale))
                    }
                }
            }
        }
        @if let Some(detail) = &entry.detail {
            tr id=(detail_id) style="display:none;" {
                td colspan="3" {
                    div class="detail-kind" { (detail.kind_label(locale)) }
                    pre class="output-content" { (detail.render_text()) }
                }
            }
        }
    }
}
