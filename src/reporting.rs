//! # Reporting Module / 报告模块
//!
//! This module collects per-case report nodes and persists them as an HTML
//! report with a JSON twin, and prints colored summaries to the console.
//!
//! 此模块收集每个用例的报告节点，并将其持久化为 HTML 报告及对应的 JSON 文件，
//! 同时在控制台打印彩色摘要。

pub mod console;
pub mod html;
pub mod sink;

// Re-export common reporting items
pub use console::{print_failure_details, print_summary};
pub use html::render_report;
pub use sink::{NodeId, ReportNode, ReportSink};
