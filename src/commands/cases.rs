// src/commands/cases.rs

use colored::*;

use crate::core::config::default_cases;
use crate::t;

/// Prints the fixed case table in execution order.
/// 按执行顺序打印固定的用例表。
pub fn execute(locale: &str) {
    println!("{}", t!("cases_banner", locale = locale).bold());
    for (i, case) in default_cases().iter().enumerate() {
        println!(
            "  {}. {:<14} -> {}",
            i + 1,
            case.input.cyan(),
            case.expected
        );
    }
}
