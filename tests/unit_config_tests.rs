//! # Config Module Unit Tests / Config 模块单元测试
//!
//! Tests for the literal case table and `SuiteConfig` loading.
//!
//! 测试字面量用例表以及 `SuiteConfig` 的加载。

use search_suite::core::config::{
    CaseSpec, DEFAULT_CONFIG_FILE, MAX_WAIT_TIMEOUT_SECS, PageConfig, SuiteConfig, default_cases,
};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

#[cfg(test)]
mod case_table_tests {
    use super::*;

    #[test]
    fn test_default_cases_in_order() {
        let cases = default_cases();
        assert_eq!(
            cases,
            vec![
                CaseSpec::new("Junit Test", "Unit testing"),
                CaseSpec::new("Womens day", "Woman's Day Fail Test For report"),
                CaseSpec::new("Fathers Day", "Father"),
            ]
        );
    }
}

#[cfg(test)]
mod suite_config_tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SuiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SuiteConfig::default());
        assert_eq!(config.webdriver_url, "http://localhost:9515");
        assert_eq!(config.output_dir, "test-output");
        assert_eq!(config.page.search_box_id, "lst-ib");
        assert_eq!(config.page.title_suffix, " - Google Search");
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let toml_str = r#"
            language = "zh-CN"
            headless = true
            wait_timeout_secs = 10

            [page]
            url = "http://localhost:8080/search"
        "#;

        let config = SuiteConfig::from_toml_str(toml_str).unwrap();

        assert_eq!(config.language, "zh-CN");
        assert!(config.headless);
        assert_eq!(config.wait_timeout(), Duration::from_secs(10));
        assert_eq!(config.command_timeout(), Duration::from_secs(40));
        assert_eq!(config.page.url, "http://localhost:8080/search");
        assert_eq!(config.page.result_stats_id, PageConfig::default().result_stats_id);
        assert_eq!(config.report_file, "SearchReport.html");
    }

    #[test]
    fn test_command_timeout_never_zero() {
        let config = SuiteConfig {
            wait_timeout_secs: 0,
            ..SuiteConfig::default()
        };
        assert_eq!(config.command_timeout(), Duration::from_secs(4));
    }

    #[test]
    fn test_command_timeout_saturates() {
        let config = SuiteConfig {
            wait_timeout_secs: u64::MAX,
            ..SuiteConfig::default()
        };
        assert_eq!(config.command_timeout(), Duration::from_secs(u64::MAX));
    }

    #[test]
    fn test_oversized_wait_timeout_is_rejected() {
        let error = SuiteConfig::from_toml_str("wait_timeout_secs = 100000").unwrap_err();
        assert!(format!("{error:#}").contains("wait_timeout_secs must be at most"));
        assert!(SuiteConfig::from_toml_str("wait_timeout_secs = 18446744073709551615").is_err());

        let at_limit = format!("wait_timeout_secs = {MAX_WAIT_TIMEOUT_SECS}");
        let config = SuiteConfig::from_toml_str(&at_limit).unwrap();
        assert_eq!(config.command_timeout(), Duration::from_secs(MAX_WAIT_TIMEOUT_SECS * 4));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let result = SuiteConfig::from_toml_str("headless = \"maybe\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialized_default_loads_back() {
        let text = SuiteConfig::default().to_toml_string().unwrap();
        assert!(text.contains("webdriver_url = \"http://localhost:9515\""));
        assert!(text.contains("[page]"));
        assert_eq!(SuiteConfig::from_toml_str(&text).unwrap(), SuiteConfig::default());
    }
}

#[cfg(test)]
mod discovery_tests {
    use super::*;

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = SuiteConfig::discover(None, temp_dir.path()).unwrap();
        assert_eq!(config, SuiteConfig::default());
    }

    #[test]
    fn test_discover_picks_up_file_in_cwd() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(DEFAULT_CONFIG_FILE),
            "webdriver_url = \"http://grid:4444\"\n",
        )
        .unwrap();

        let config = SuiteConfig::discover(None, temp_dir.path()).unwrap();
        assert_eq!(config.webdriver_url, "http://grid:4444");
    }

    #[test]
    fn test_discover_explicit_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let error = SuiteConfig::discover(Some(&missing), temp_dir.path()).unwrap_err();
        assert!(format!("{error:#}").contains("Failed to read config file"));
    }

    #[test]
    fn test_resolve_output_dir_relative_and_absolute() {
        let cwd = Path::new("/work");
        let relative = SuiteConfig::default();
        assert_eq!(
            relative.resolve_output_dir(cwd).unwrap(),
            Path::new("/work/test-output")
        );

        let temp_dir = TempDir::new().unwrap();
        let absolute = SuiteConfig {
            output_dir: temp_dir.path().display().to_string(),
            ..SuiteConfig::default()
        };
        assert_eq!(absolute.resolve_output_dir(cwd).unwrap(), temp_dir.path());
    }

    #[test]
    fn test_output_dir_that_would_wipe_cwd_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let cwd = temp_dir.path().join("project");
        fs::create_dir_all(&cwd).unwrap();
        fs::write(cwd.join("Cargo.toml"), "[package]").unwrap();

        for output_dir in ["", "  ", ".", "./", "sub/..", ".."] {
            let config = SuiteConfig {
                output_dir: output_dir.to_string(),
                ..SuiteConfig::default()
            };
            assert!(
                config.resolve_output_dir(&cwd).is_err(),
                "{output_dir:?} should be rejected"
            );
        }

        let config = SuiteConfig::from_toml_str("output_dir = \"\"").unwrap();
        assert!(config.resolve_output_dir(&cwd).is_err());
        assert!(cwd.join("Cargo.toml").is_file());
    }

    #[test]
    fn test_output_dir_at_home_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config = SuiteConfig {
            output_dir: "~".to_string(),
            ..SuiteConfig::default()
        };
        assert!(config.resolve_output_dir(temp_dir.path()).is_err());
    }

    #[test]
    fn test_output_dir_is_normalized() {
        let cwd = Path::new("/work/project");
        let config = SuiteConfig {
            output_dir: "./out/../test-output".to_string(),
            ..SuiteConfig::default()
        };
        assert_eq!(
            config.resolve_output_dir(cwd).unwrap(),
            Path::new("/work/project/test-output")
        );
    }
}

#[cfg(test)]
mod override_tests {
    use super::*;
    use search_suite::commands::run::{RunArgs, load_config};

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(DEFAULT_CONFIG_FILE),
            "webdriver_url = \"http://grid:4444\"\noutput_dir = \"from-file\"\n",
        )
        .unwrap();

        let args = RunArgs {
            output_dir: Some("from-flag".to_string()),
            headless: true,
            lang: Some("zh-CN".to_string()),
            ..RunArgs::default()
        };
        let config = load_config(&args, temp_dir.path()).unwrap();

        assert_eq!(config.webdriver_url, "http://grid:4444");
        assert_eq!(config.output_dir, "from-flag");
        assert!(config.headless);
        assert_eq!(config.language, "zh-CN");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let temp_dir = TempDir::new().unwrap();
        let args = RunArgs {
            lang: Some("xx-YY".to_string()),
            ..RunArgs::default()
        };
        let config = load_config(&args, temp_dir.path()).unwrap();
        assert_eq!(config.language, "en");
    }
}
