//! # Test Runner Module / 测试运行器模块
//!
//! Owns the run context (browser session, report sink, settings) for the whole
//! run and drives the lifecycle: prepare the output directory and session,
//! run each case in order, then quit the session and flush the report no
//! matter how the cases went.
//!
//! 在整个运行期间拥有运行上下文（浏览器会话、报告接收器、设置），并驱动生命周期：
//! 准备输出目录和会话，按顺序运行每个用例，
//! 然后无论用例结果如何都退出会话并刷新报告。

use anyhow::{Context, Result};
use colored::*;
use std::future::Future;
use std::path::{Path, PathBuf};

use crate::core::config::{CaseSpec, PageConfig, SuiteConfig};
use crate::core::execution::{CaseRun, run_case};
use crate::core::models::CaseOutcome;
use crate::core::session::BrowserSession;
use crate::infra::fs::prepare_output_dir;
use crate::infra::t;
use crate::reporting::sink::ReportSink;

/// Resolved, run-scoped settings.
/// 已解析的、作用于本次运行的设置。
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Absolute output directory. / 绝对输出目录。
    pub output_dir: PathBuf,
    pub report_file: String,
    pub screenshot_dir_name: String,
    pub page: PageConfig,
    pub locale: String,
}

impl RunSettings {
    pub fn from_config(config: &SuiteConfig, cwd: &Path) -> Result<Self> {
        Ok(Self {
            output_dir: config.resolve_output_dir(cwd)?,
            report_file: config.report_file.clone(),
            screenshot_dir_name: config.screenshot_dir.clone(),
            page: config.page.clone(),
            locale: config.language.clone(),
        })
    }

    pub fn screenshot_dir(&self) -> PathBuf {
        self.output_dir.join(&self.screenshot_dir_name)
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_file)
    }
}

/// The state shared by every case of a run. Owned by the runner and lent to
/// one case at a time.
///
/// 运行中所有用例共享的状态。由运行器拥有，每次借给一个用例。
pub struct RunContext<S> {
    pub session: S,
    pub sink: ReportSink,
    pub settings: RunSettings,
}

/// Paths of the artifacts left by a finished run plus every case outcome.
#[derive(Debug)]
pub struct RunSummary {
    pub outcomes: Vec<CaseOutcome>,
    pub report_path: PathBuf,
    pub json_path: PathBuf,
}

impl RunSummary {
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }
}

pub struct TestRunner<S: BrowserSession> {
    ctx: RunContext<S>,
}

impl<S: BrowserSession> TestRunner<S> {
    /// Prepares a run: empties (or creates) the output directory, starts the
    /// browser session and binds a fresh report sink to the report path.
    ///
    /// Any error here is an infrastructure failure and no case is run.
    ///
    /// 准备一次运行：清空（或创建）输出目录，启动浏览器会话，
    /// 并将新的报告接收器绑定到报告路径。这里的任何错误都属于基础设施故障，不会运行任何用例。
    pub async fn setup_run<F>(settings: RunSettings, start_session: F) -> Result<Self>
    where
        F: Future<Output = Result<S>>,
    {
        prepare_output_dir(&settings.output_dir, &settings.screenshot_dir_name)?;

        let session = start_session
            .await
            .context(t!("run.session_start_failed", locale = &settings.locale).to_string())?;

        let mut sink = ReportSink::new(settings.locale.as_str());
        sink.attach(settings.report_path());

        Ok(Self {
            ctx: RunContext {
                session,
                sink,
                settings,
            },
        })
    }

    /// Runs every spec in order. A failing case never stops the next one.
    /// 按顺序运行每个用例。失败的用例不会阻止下一个用例。
    pub async fn run_all(&mut self, specs: &[CaseSpec]) -> Vec<CaseOutcome> {
        let mut outcomes = Vec::with_capacity(specs.len());
        for spec in specs {
            let run = run_case(&mut self.ctx, spec).await;
            outcomes.push(self.record_outcome(spec, run));
        }
        outcomes
    }

    /// Turns a case's result into its terminal report entries.
    fn record_outcome(&mut self, spec: &CaseSpec, run: CaseRun) -> CaseOutcome {
        let locale = self.ctx.settings.locale.as_str();
        let node = self.ctx.sink.node_mut(run.node);
        let seconds = run.duration.as_secs_f64().to_string();

        match &run.result {
            Ok(()) => {
                node.pass(t!("case.succeeded", locale = locale, input = &spec.input));
                println!(
                    "{}",
                    t!("run.case_passed", locale = locale, name = &spec.input, duration = &seconds).green()
                );
            }
            Err(failure) => {
                node.fail(t!("case.failed", locale = locale, input = &spec.input));
                node.fail_with_detail(
                    t!("case.failure_detail", locale = locale, input = &spec.input),
                    failure.clone(),
                );
                println!(
                    "{}",
                    t!("run.case_failed", locale = locale, name = &spec.input, duration = &seconds).red()
                );
            }
        }

        CaseOutcome {
            input: spec.input.clone(),
            expected: spec.expected.clone(),
            status: node.status(),
            failure: run.result.err(),
            duration: run.duration,
            screenshot: run.screenshot.map(|s| s.path),
        }
    }

    /// Quits the session and flushes the report.
    ///
    /// The report is flushed even when quitting fails; the quit error is
    /// returned afterwards. Consuming `self` makes both happen exactly once.
    ///
    /// 退出会话并刷新报告。即使退出失败也会刷新报告，随后返回退出错误。
    /// 消耗 `self` 保证两者都恰好发生一次。
    pub async fn teardown_run(self) -> Result<PathBuf> {
        let RunContext { session, sink, settings } = self.ctx;

        let quit = session.quit().await;
        if let Err(e) = &quit {
            eprintln!(
                "{} {e:#}",
                t!("run.session_quit_failed", locale = &settings.locale).red()
            );
        }

        let report_path = sink
            .flush()
            .context(t!("run.report_flush_failed", locale = &settings.locale).to_string())?;
        quit?;
        Ok(report_path)
    }
}

/// Runs the whole suite: setup, every case, teardown.
///
/// # Returns / 返回值
/// The outcome of each case and where the report was written. Case failures
/// are part of the summary; only infrastructure failures return `Err`.
///
/// 每个用例的结果以及报告写入的位置。用例失败属于摘要的一部分；
/// 只有基础设施故障才会返回 `Err`。
pub async fn run_suite<S, F>(
    settings: RunSettings,
    specs: &[CaseSpec],
    start_session: F,
) -> Result<RunSummary>
where
    S: BrowserSession,
    F: Future<Output = Result<S>>,
{
    let mut runner = TestRunner::setup_run(settings, start_session).await?;
    let outcomes = runner.run_all(specs).await;
    let report_path = runner.teardown_run().await?;
    let json_path = report_path.with_extension("json");

    Ok(RunSummary {
        outcomes,
        report_path,
        json_path,
    })
}
