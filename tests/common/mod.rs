// Shared test helpers for integration tests
#![allow(dead_code)]

use anyhow::{Result, anyhow};
use search_suite::core::config::PageConfig;
use search_suite::core::runner::RunSettings;
use search_suite::core::session::{BrowserSession, Locator};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

pub const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\nscripted";

/// What the scripted browser shows after a query is submitted.
#[derive(Debug, Clone)]
pub struct ResultPage {
    pub title: String,
    pub has_stats: bool,
    pub result_titles: Vec<String>,
}

impl ResultPage {
    pub fn for_query(query: &str, result_titles: &[&str]) -> Self {
        Self {
            title: format!("{query} - Google Search"),
            has_stats: true,
            result_titles: result_titles.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedElement {
    SearchBox,
    Stats,
    ResultTitle(String),
}

/// Counters that outlive the session, since `quit` consumes it.
#[derive(Debug, Clone, Default)]
pub struct Probe {
    pub quits: Rc<Cell<usize>>,
    pub navigations: Rc<Cell<usize>>,
    pub screenshots: Rc<Cell<usize>>,
}

/// An in-memory browser that answers from a table of result pages.
pub struct ScriptedSession {
    pages: HashMap<String, ResultPage>,
    typed: RefCell<String>,
    current: RefCell<Option<ResultPage>>,
    pub probe: Probe,
    pub missing_search_box: bool,
    pub fail_screenshot: bool,
    pub fail_quit: bool,
}

impl ScriptedSession {
    pub fn new(pages: Vec<(&str, ResultPage)>) -> Self {
        Self {
            pages: pages
                .into_iter()
                .map(|(query, page)| (query.to_string(), page))
                .collect(),
            typed: RefCell::new(String::new()),
            current: RefCell::new(None),
            probe: Probe::default(),
            missing_search_box: false,
            fail_screenshot: false,
            fail_quit: false,
        }
    }

    /// Result pages matching the three literal cases: the first and third
    /// carry the expected title, the second does not.
    pub fn google_like() -> Self {
        Self::new(vec![
            (
                "Junit Test",
                ResultPage::for_query("Junit Test", &["JUnit", "Unit testing"]),
            ),
            (
                "Womens day",
                ResultPage::for_query("Womens day", &["Woman's Day", "Magazine"]),
            ),
            (
                "Fathers Day",
                ResultPage::for_query("Fathers Day", &["Father's Day", "Father"]),
            ),
        ])
    }

    pub fn probe(&self) -> Probe {
        self.probe.clone()
    }
}

impl BrowserSession for ScriptedSession {
    type Element = ScriptedElement;

    async fn navigate(&self, _url: &str) -> Result<()> {
        self.probe.navigations.set(self.probe.navigations.get() + 1);
        self.typed.borrow_mut().clear();
        *self.current.borrow_mut() = None;
        Ok(())
    }

    async fn find_element(&self, locator: &Locator) -> Result<ScriptedElement> {
        match locator {
            Locator::Id(id) if id == "lst-ib" && !self.missing_search_box => {
                Ok(ScriptedElement::SearchBox)
            }
            other => Err(anyhow!("no such element: {other}")),
        }
    }

    async fn find_elements(&self, locator: &Locator) -> Result<Vec<ScriptedElement>> {
        let current = self.current.borrow();
        let Some(page) = current.as_ref() else {
            return Ok(Vec::new());
        };
        Ok(match locator {
            Locator::Id(id) if id == "resultStats" && page.has_stats => vec![ScriptedElement::Stats],
            Locator::Id(_) => Vec::new(),
            Locator::XPath(_) => page
                .result_titles
                .iter()
                .cloned()
                .map(ScriptedElement::ResultTitle)
                .collect(),
        })
    }

    async fn send_keys(&self, element: &ScriptedElement, text: &str) -> Result<()> {
        match element {
            ScriptedElement::SearchBox => {
                self.typed.borrow_mut().push_str(text);
                Ok(())
            }
            other => Err(anyhow!("element not interactable: {other:?}")),
        }
    }

    async fn press_enter(&self, element: &ScriptedElement) -> Result<()> {
        if *element != ScriptedElement::SearchBox {
            return Err(anyhow!("element not interactable: {element:?}"));
        }
        let query = self.typed.borrow().clone();
        let page = self
            .pages
            .get(&query)
            .cloned()
            .unwrap_or_else(|| ResultPage::for_query(&query, &[]));
        *self.current.borrow_mut() = Some(page);
        Ok(())
    }

    async fn element_text(&self, element: &ScriptedElement) -> Result<String> {
        Ok(match element {
            ScriptedElement::ResultTitle(text) => text.clone(),
            _ => String::new(),
        })
    }

    async fn title(&self) -> Result<String> {
        Ok(self
            .current
            .borrow()
            .as_ref()
            .map(|page| page.title.clone())
            .unwrap_or_else(|| "Google".to_string()))
    }

    async fn screenshot_png(&self) -> Result<Vec<u8>> {
        if self.fail_screenshot {
            return Err(anyhow!("screenshot not supported"));
        }
        self.probe.screenshots.set(self.probe.screenshots.get() + 1);
        Ok(FAKE_PNG.to_vec())
    }

    async fn quit(self) -> Result<()> {
        self.probe.quits.set(self.probe.quits.get() + 1);
        if self.fail_quit {
            return Err(anyhow!("browser went away"));
        }
        Ok(())
    }
}

pub fn settings_in(root: &Path) -> RunSettings {
    RunSettings {
        output_dir: root.join("test-output"),
        report_file: "SearchReport.html".to_string(),
        screenshot_dir_name: "ScreenShot".to_string(),
        page: PageConfig::default(),
        locale: "en".to_string(),
    }
}

/// A session start that succeeds immediately.
pub async fn ready(session: ScriptedSession) -> Result<ScriptedSession> {
    Ok(session)
}

/// A session start that fails with `reason`.
pub async fn refuse(reason: &'static str) -> Result<ScriptedSession> {
    Err(anyhow!(reason))
}
