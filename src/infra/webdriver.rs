//! # WebDriver Session Module / WebDriver 会话模块
//!
//! [`BrowserSession`] backed by a Chrome instance behind a WebDriver server,
//! using `thirtyfour`. Every command runs under a time budget so a browser that
//! stops answering fails the current case instead of blocking the run.
//!
//! 基于 `thirtyfour`、由 WebDriver 服务器后的 Chrome 实例支持的 [`BrowserSession`]。
//! 每个命令都在时间预算内执行，浏览器无响应时使当前用例失败，而不是阻塞整个运行。

use anyhow::{Context, Result, anyhow};
use std::future::Future;
use std::time::Duration;
use thirtyfour::ChromiumLikeCapabilities;
use thirtyfour::prelude::*;

use crate::core::config::SuiteConfig;
use crate::core::session::{BrowserSession, Locator};

pub struct WebDriverSession {
    driver: WebDriver,
    command_timeout: Duration,
}

impl WebDriverSession {
    /// Connects to the WebDriver server and opens a Chrome session with an
    /// implicit element wait and a page-load timeout of `wait_timeout_secs`.
    ///
    /// 连接 WebDriver 服务器并打开 Chrome 会话，
    /// 元素隐式等待和页面加载超时均为 `wait_timeout_secs`。
    pub async fn start(config: &SuiteConfig) -> Result<Self> {
        let mut caps = DesiredCapabilities::chrome();
        if config.headless {
            caps.set_headless()
                .context("Failed to request headless mode")?;
        }
        caps.add_arg("--window-size=1280,1024")
            .context("Failed to set window size")?;

        let connect = WebDriver::new(config.webdriver_url.as_str(), caps);
        let driver = tokio::time::timeout(config.command_timeout(), connect)
            .await
            .map_err(|_| anyhow!("Timed out connecting to {}", config.webdriver_url))?
            .with_context(|| format!("Failed to start browser session at {}", config.webdriver_url))?;

        let session = Self {
            driver,
            command_timeout: config.command_timeout(),
        };
        session
            .bounded("set implicit wait", session.driver.set_implicit_wait_timeout(config.wait_timeout()))
            .await?;
        session
            .bounded("set page load timeout", session.driver.set_page_load_timeout(config.wait_timeout()))
            .await?;
        Ok(session)
    }

    async fn bounded<T, F>(&self, what: &str, fut: F) -> Result<T>
    where
        F: Future<Output = WebDriverResult<T>>,
    {
        match tokio::time::timeout(self.command_timeout, fut).await {
            Ok(result) => result.with_context(|| format!("WebDriver command failed: {what}")),
            Err(_) => Err(anyhow!(
                "WebDriver command timed out after {:?}: {what}",
                self.command_timeout
            )),
        }
    }
}

fn to_by(locator: &Locator) -> By {
    match locator {
        Locator::Id(id) => By::Id(id.clone()),
        Locator::XPath(path) => By::XPath(path.clone()),
    }
}

impl BrowserSession for WebDriverSession {
    type Element = WebElement;

    async fn navigate(&self, url: &str) -> Result<()> {
        self.bounded(&format!("navigate to {url}"), self.driver.goto(url))
            .await
    }

    async fn find_element(&self, locator: &Locator) -> Result<WebElement> {
        self.bounded(&format!("find element {locator}"), self.driver.find(to_by(locator)))
            .await
    }

    async fn find_elements(&self, locator: &Locator) -> Result<Vec<WebElement>> {
        self.bounded(
            &format!("find elements {locator}"),
            self.driver.find_all(to_by(locator)),
        )
        .await
    }

    async fn send_keys(&self, element: &WebElement, text: &str) -> Result<()> {
        self.bounded("send keys", element.send_keys(text)).await
    }

    async fn press_enter(&self, element: &WebElement) -> Result<()> {
        self.bounded("press enter", element.send_keys(Key::Enter + ""))
            .await
    }

    async fn element_text(&self, element: &WebElement) -> Result<String> {
        self.bounded("read element text", element.text()).await
    }

    async fn title(&self) -> Result<String> {
        self.bounded("read title", self.driver.title()).await
    }

    async fn screenshot_png(&self) -> Result<Vec<u8>> {
        self.bounded("take screenshot", self.driver.screenshot_as_png())
            .await
    }

    async fn quit(self) -> Result<()> {
        let budget = self.command_timeout;
        tokio::time::timeout(budget, self.driver.quit())
            .await
            .map_err(|_| anyhow!("Timed out quitting the browser session after {budget:?}"))?
            .context("Failed to quit the browser session")
    }
}
