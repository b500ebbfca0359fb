//! # Console Reporting Module / 控制台报告模块
//!
//! Prints the colored end-of-run summary and the details of failed cases.
//!
//! 打印运行结束时的彩色摘要以及失败用例的详情。

use colored::*;

use crate::core::models::{CaseOutcome, CaseStatus};
use crate::infra::t;

/// Prints a formatted summary of case outcomes to the console.
///
/// # Output Format / 输出格式
/// ```text
/// --- Search Test Summary ---
///   - Passed   | Junit Test                     |      2.31s
///   - Failed   | Womens day                     |      1.87s
/// ```
pub fn print_summary(outcomes: &[CaseOutcome], locale: &str) {
    println!("\n{}", t!("test_summary_banner", locale = locale).bold());

    for outcome in outcomes {
        let status_str = outcome.status.get_status_str(locale);
        let status_colored = match outcome.status {
            CaseStatus::Passed => status_str.green(),
            CaseStatus::Failed => status_str.red(),
            CaseStatus::Started => status_str.dimmed(),
        };
        println!(
            "  - {:<8} | {:<30} | {:>10}",
            status_colored,
            outcome.input,
            format!("{:.2?}", outcome.duration)
        );
    }
}

/// Prints the failure detail of every failed case. Does nothing when all passed.
/// 打印每个失败用例的失败详情。全部通过时不输出任何内容。
pub fn print_failure_details(outcomes: &[CaseOutcome], locale: &str) {
    let failed: Vec<_> = outcomes.iter().filter(|o| o.is_failure()).collect();
    if failed.is_empty() {
        return;
    }

    println!("\n{}", t!("failure_banner", locale = locale).red().bold());
    println!("{}", "-".repeat(80));

    for (i, outcome) in failed.iter().enumerate() {
        println!(
            "[{}/{}] {} '{}'",
            i + 1,
            failed.len(),
            t!("report_header_failure", locale = locale).red(),
            outcome.input.cyan()
        );
        if let Some(failure) = &outcome.failure {
            println!("  ({})", failure.kind_label(locale).yellow());
            println!("{}", failure.render_text());
        }
        println!("{}", "-".repeat(80));
    }
}
