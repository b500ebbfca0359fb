// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::commands::{self, run::RunArgs};
use crate::{resolve_locale, t};

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang=").map(str::to_string))
}

fn build_cli(locale: &str) -> Command {
    Command::new("search-suite")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("run")
                .about(t!("cmd_run_about", locale = locale).to_string())
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("arg_config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("webdriver-url")
                        .long("webdriver-url")
                        .help(t!("arg_webdriver_url", locale = locale).to_string())
                        .value_name("URL")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("output-dir")
                        .short('o')
                        .long("output-dir")
                        .help(t!("arg_output_dir", locale = locale).to_string())
                        .value_name("OUTPUT_DIR")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("headless")
                        .long("headless")
                        .help(t!("arg_headless", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("cases").about(t!("cmd_cases_about", locale = locale).to_string()))
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn run_args(matches: &ArgMatches, lang: Option<String>) -> RunArgs {
    RunArgs {
        config: matches.get_one::<PathBuf>("config").cloned(),
        webdriver_url: matches.get_one::<String>("webdriver-url").cloned(),
        output_dir: matches.get_one::<String>("output-dir").cloned(),
        headless: matches.get_flag("headless"),
        lang,
    }
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let requested = pre_parse_language();
    let language = resolve_locale(requested.as_deref());
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            commands::run::execute(run_args(run_matches, requested)).await?;
        }
        Some(("cases", _)) => {
            commands::cases::execute(&language);
        }
        Some(("init", init_matches)) => {
            let force = init_matches.get_flag("force");
            let cwd = env::current_dir()?;
            commands::init::execute(&cwd, force, &language)?;
        }
        _ => {
            // Clap has already printed help when no subcommand was given.
        }
    }
    Ok(())
}
