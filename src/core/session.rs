//! # Browser Session Module / 浏览器会话模块
//!
//! The browser is consumed through the [`BrowserSession`] capability so the
//! case executor never depends on a concrete driver. The WebDriver-backed
//! implementation lives in `infra::webdriver`.
//!
//! 浏览器通过 [`BrowserSession`] 能力接口被使用，
//! 因此用例执行器从不依赖具体的驱动实现。基于 WebDriver 的实现位于 `infra::webdriver`。

use anyhow::Result;
use std::fmt;

/// A query used to find page elements.
/// 用于查找页面元素的查询。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Id(String),
    XPath(String),
}

impl Locator {
    pub fn id(id: impl Into<String>) -> Self {
        Locator::Id(id.into())
    }

    pub fn xpath(path: impl Into<String>) -> Self {
        Locator::XPath(path.into())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Id(id) => write!(f, "id={id}"),
            Locator::XPath(path) => write!(f, "xpath={path}"),
        }
    }
}

/// The operations the search test needs from a live browser.
///
/// Calls are awaited one at a time; implementations are expected to bound
/// every call so a hung browser turns into an error.
///
/// 搜索测试对一个活动浏览器所需要的操作。
/// 调用逐个等待；实现应为每次调用设置上限，使挂起的浏览器转化为错误。
#[allow(async_fn_in_trait)]
pub trait BrowserSession {
    /// Handle to an element found on the current page.
    type Element;

    async fn navigate(&self, url: &str) -> Result<()>;

    /// Finds exactly one element; a missing element is an error.
    /// 查找恰好一个元素；元素缺失即为错误。
    async fn find_element(&self, locator: &Locator) -> Result<Self::Element>;

    /// Finds all matching elements; no match is an empty list.
    /// 查找所有匹配元素；无匹配时返回空列表。
    async fn find_elements(&self, locator: &Locator) -> Result<Vec<Self::Element>>;

    async fn send_keys(&self, element: &Self::Element, text: &str) -> Result<()>;

    async fn press_enter(&self, element: &Self::Element) -> Result<()>;

    async fn element_text(&self, element: &Self::Element) -> Result<String>;

    async fn title(&self) -> Result<String>;

    async fn screenshot_png(&self) -> Result<Vec<u8>>;

    /// Ends the session. Consumes the handle so it can only happen once.
    /// 结束会话。会消耗句柄，因此只能发生一次。
    async fn quit(self) -> Result<()>
    where
        Self: Sized;
}
