//! # Case Execution Module / 用例执行模块
//!
//! Runs one search case against the shared browser session: open the case's
//! report node, search, capture evidence, check the result page. The outcome
//! is returned as a value; recording pass or fail is left to the runner.
//!
//! 针对共享浏览器会话运行单个搜索用例：打开用例的报告节点、搜索、捕获证据、
//! 检查结果页面。结果以值的形式返回；记录通过或失败由运行器负责。

use anyhow::Result;
use chrono::Local;
use colored::*;
use std::time::{Duration, Instant};

use crate::core::config::{CaseSpec, PageConfig};
use crate::core::models::{CaseFailure, ScreenshotArtifact};
use crate::core::runner::RunContext;
use crate::core::screenshot;
use crate::core::session::{BrowserSession, Locator};
use crate::infra::t;
use crate::reporting::sink::NodeId;

/// Everything a finished case hands back to the runner.
#[derive(Debug)]
pub struct CaseRun {
    pub node: NodeId,
    pub result: Result<(), CaseFailure>,
    pub screenshot: Option<ScreenshotArtifact>,
    pub duration: Duration,
}

/// Executes a single search case.
///
/// Failures of any kind stay inside the returned [`CaseRun`]; nothing here
/// aborts the run. A failed screenshot is logged on the node and does not
/// change the result.
///
/// 执行单个搜索用例。任何类型的失败都保留在返回的 [`CaseRun`] 中，
/// 这里不会中止整个运行。截图失败会记录在节点上，但不会改变结果。
pub async fn run_case<S: BrowserSession>(ctx: &mut RunContext<S>, spec: &CaseSpec) -> CaseRun {
    let locale = ctx.settings.locale.clone();
    let start = Instant::now();

    println!(
        "{}",
        t!("run.running_case", locale = &locale, name = &spec.input).blue()
    );

    let node = ctx.sink.create_node(&spec.input);
    ctx.sink
        .node_mut(node)
        .info(t!("case.started", locale = &locale, input = &spec.input));

    // Evidence is captured even when the search itself failed.
    let searched = search(&ctx.session, &ctx.settings.page, &spec.input).await;

    let captured = screenshot::capture(
        &ctx.session,
        &ctx.settings.screenshot_dir(),
        &ctx.settings.screenshot_dir_name,
        &spec.input,
        Local::now(),
    )
    .await;

    let artifact = match captured {
        Ok(artifact) => {
            ctx.sink.node_mut(node).info_with_media(
                t!("case.screenshot_captured", locale = &locale, input = &spec.input),
                artifact.media(),
            );
            Some(artifact)
        }
        Err(e) => {
            println!(
                "{}",
                t!("run.screenshot_failed", locale = &locale, name = &spec.input, error = format!("{e:#}")).yellow()
            );
            ctx.sink.node_mut(node).info(t!(
                "case.screenshot_failed",
                locale = &locale,
                error = format!("{e:#}")
            ));
            None
        }
    };

    let result = match searched {
        Ok(()) => verify(&ctx.session, &ctx.settings.page, spec, &locale).await,
        Err(e) => Err(CaseFailure::driver(&e)),
    };

    CaseRun {
        node,
        result,
        screenshot: artifact,
        duration: start.elapsed(),
    }
}

/// Loads the search page, types the input and submits it.
async fn search<S: BrowserSession>(session: &S, page: &PageConfig, input: &str) -> Result<()> {
    session.navigate(&page.url).await?;
    let search_box = session
        .find_element(&Locator::id(page.search_box_id.as_str()))
        .await?;
    session.send_keys(&search_box, input).await?;
    session.press_enter(&search_box).await?;
    Ok(())
}

/// Checks the result page: summary present, title as expected, and one of the
/// result titles equal to `spec.expected`.
async fn verify<S: BrowserSession>(
    session: &S,
    page: &PageConfig,
    spec: &CaseSpec,
    locale: &str,
) -> Result<(), CaseFailure> {
    let stats = session
        .find_elements(&Locator::id(page.result_stats_id.as_str()))
        .await
        .map_err(|e| CaseFailure::driver(&e))?;
    if stats.is_empty() {
        return Err(CaseFailure::assertion(t!(
            "case.result_stats_missing",
            locale = locale,
            id = &page.result_stats_id
        )));
    }

    let expected_title = format!("{}{}", spec.input, page.title_suffix);
    let title = session.title().await.map_err(|e| CaseFailure::driver(&e))?;
    if title != expected_title {
        return Err(
            CaseFailure::assertion(t!("case.title_mismatch", locale = locale))
                .with_note(format!("expected: {expected_title}"))
                .with_note(format!("actual: {title}")),
        );
    }

    let titles = session
        .find_elements(&Locator::xpath(page.result_title_xpath.as_str()))
        .await
        .map_err(|e| CaseFailure::driver(&e))?;

    let mut seen = Vec::with_capacity(titles.len());
    for element in &titles {
        let text = session
            .element_text(element)
            .await
            .map_err(|e| CaseFailure::driver(&e))?;
        if text == spec.expected {
            return Ok(());
        }
        seen.push(text);
    }

    Err(
        CaseFailure::assertion(t!("case.result_title_mismatch", locale = locale))
            .with_note(format!("expected: {}", spec.expected))
            .with_note(format!("found: {seen:?}")),
    )
}
