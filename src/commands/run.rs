// src/commands/run.rs

use anyhow::{Context, Result};
use colored::*;
use std::{env, path::PathBuf};

use crate::{
    core::{
        config::{SuiteConfig, default_cases},
        runner::{RunSettings, run_suite},
    },
    infra::webdriver::WebDriverSession,
    reporting::{print_failure_details, print_summary},
    resolve_locale, t,
};

/// Options of the `run` subcommand. Flags given here win over the config file.
#[derive(Debug, Default, Clone)]
pub struct RunArgs {
    pub config: Option<PathBuf>,
    pub webdriver_url: Option<String>,
    pub output_dir: Option<String>,
    pub headless: bool,
    pub lang: Option<String>,
}

/// Loads the configuration, then applies command-line overrides on top.
pub fn load_config(args: &RunArgs, cwd: &std::path::Path) -> Result<SuiteConfig> {
    let mut config = SuiteConfig::discover(args.config.as_deref(), cwd)?;
    if let Some(url) = &args.webdriver_url {
        config.webdriver_url = url.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if args.headless {
        config.headless = true;
    }
    if let Some(lang) = &args.lang {
        config.language = lang.clone();
    }
    config.language = resolve_locale(Some(&config.language));
    Ok(config)
}

pub async fn execute(args: RunArgs) -> Result<()> {
    let cwd = env::current_dir().context("Failed to read the working directory")?;
    let config = load_config(&args, &cwd)?;
    let locale = config.language.clone();
    rust_i18n::set_locale(&locale);

    let settings = RunSettings::from_config(&config, &cwd)?;
    let cases = default_cases();

    println!(
        "{}",
        t!("output_dir", locale = &locale, path = settings.output_dir.display()).cyan()
    );
    println!(
        "{}",
        t!("connecting_webdriver", locale = &locale, url = &config.webdriver_url).cyan()
    );
    println!(
        "{}",
        t!("running_cases", locale = &locale, count = cases.len()).bold()
    );

    let summary = run_suite(settings, &cases, WebDriverSession::start(&config)).await?;

    print_summary(&summary.outcomes, &locale);
    println!(
        "\n{}",
        t!("report_written", locale = &locale, path = summary.report_path.display())
    );

    let failed = summary.failed_count();
    if failed > 0 {
        print_failure_details(&summary.outcomes, &locale);
        anyhow::bail!(t!("cases_failed", locale = &locale, count = failed).to_string());
    }

    println!("\n{}", t!("all_cases_passed", locale = &locale).green().bold());
    Ok(())
}
