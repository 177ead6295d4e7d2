//! Read the operator's page from a running Chrome over its remote-debugging port.
//!
//! The scraper never launches or drives the browser. The operator starts Chrome
//! with `--remote-debugging-port=9222`, opens the stats page, and reveals the
//! table; we only list the open tabs over HTTP, attach over the DevTools
//! WebSocket, and copy the rendered HTML.

use std::time::Duration;

use chromiumoxide::Browser;
use futures::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{MlsError, Result};


/// Default Chrome remote-debugging endpoint.
pub const DEFAULT_DEBUGGER_URL: &str = "http://127.0.0.1:9222";

const ATTACH_ATTEMPTS: u32 = 3;
const ATTACH_DELAY: Duration = Duration::from_millis(500);

/// Response of `GET /json/version`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrowserVersion {
    #[serde(rename = "Browser", default)]
    pub browser: String,
    #[serde(rename = "webSocketDebuggerUrl")]
    pub web_socket_debugger_url: String,
}

/// One entry of `GET /json/list`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TargetInfo {
    pub id: String,
    #[serde(rename = "type")]
    pub target_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// Rendered page content at capture time.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub url: String,
    pub title: String,
    pub html: String,
}

/// HTTP side of the DevTools endpoint.
#[derive(Debug, Clone)]
pub struct DebuggerEndpoint {
    base_url: String,
    client: Client,
}

impl DebuggerEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn version(&self) -> Result<BrowserVersion> {
        let url = format!("{}/json/version", self.base_url);
        let version = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<BrowserVersion>()
            .await?;
        Ok(version)
    }

    pub async fn targets(&self) -> Result<Vec<TargetInfo>> {
        let url = format!("{}/json/list", self.base_url);
        let targets = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<TargetInfo>>()
            .await?;
        Ok(targets)
    }
}

/// Pick the tab to read: the first page whose URL contains `url_pattern`,
/// otherwise the first page at all.
pub fn select_target<'a>(targets: &'a [TargetInfo], url_pattern: &str) -> Option<&'a TargetInfo> {
    let mut pages = targets.iter().filter(|t| t.target_type == "page");
    let first = pages.clone().next();

    if url_pattern.is_empty() {
        return first;
    }
    pages.find(|t| t.url.contains(url_pattern)).or(first)
}

/// Attach to the running browser and copy the HTML of the selected tab.
///
/// The browser is left open.
pub async fn capture_page(endpoint: &DebuggerEndpoint, url_pattern: &str) -> Result<PageSnapshot> {
    let version = endpoint.version().await.map_err(|e| MlsError::Browser {
        message: format!(
            "could not reach {} ({e}); start Chrome with --remote-debugging-port",
            endpoint.base_url()
        ),
    })?;
    info!(browser = %version.browser, "connected to debugging endpoint");

    let targets = endpoint.targets().await?;
    let target = select_target(&targets, url_pattern)
        .cloned()
        .ok_or_else(|| MlsError::NoPage {
            endpoint: endpoint.base_url().to_string(),
        })?;
    info!(url = %target.url, title = %target.title, "reading browser page");

    let (mut browser, mut handler) = Browser::connect(version.web_socket_debugger_url).await?;
    let handle = tokio::spawn(async move { while handler.next().await.is_some() {} });

    let snapshot = read_target(&mut browser, &target, endpoint.base_url()).await;
    handle.abort();
    snapshot
}

async fn read_target(
    browser: &mut Browser,
    target: &TargetInfo,
    endpoint: &str,
) -> Result<PageSnapshot> {
    for attempt in 1..=ATTACH_ATTEMPTS {
        browser.fetch_targets().await?;

        for page in browser.pages().await? {
            let url = page.url().await?.unwrap_or_default();
            if url != target.url {
                continue;
            }
            let html = page.content().await?;
            let title = page
                .get_title()
                .await?
                .unwrap_or_else(|| target.title.clone());
            debug!(bytes = html.len(), "captured page html");
            return Ok(PageSnapshot { url, title, html });
        }

        debug!(attempt, "page not attached yet");
        tokio::time::sleep(ATTACH_DELAY).await;
    }

    Err(MlsError::NoPage {
        endpoint: endpoint.to_string(),
    })
}
