//! # Core Module / 核心模块
//!
//! This module contains the core of the search suite: the case table and
//! configuration, the browser session capability, case execution and the
//! runner that owns the run lifecycle.
//!
//! 此模块包含搜索套件的核心：用例表与配置、浏览器会话能力接口、
//! 用例执行以及负责运行生命周期的运行器。

pub mod config;
pub mod execution;
pub mod models;
pub mod runner;
pub mod screenshot;
pub mod session;

// Re-exports
pub use config::{CaseSpec, SuiteConfig};
pub use models::{CaseOutcome, CaseStatus};
pub use runner::{TestRunner, run_suite};
pub use session::{BrowserSession, Locator};
