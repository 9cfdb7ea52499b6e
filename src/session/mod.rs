//! Target Session management on top of headless Chrome.
//!
//! A [`Browser`] owns one Chrome process and its CDP event handler task.
//! Each metric check opens its own short-lived [`PageSession`]; sessions
//! are never shared between probes and must be closed on every exit path.
mod page;

pub use page::PageSession;

use std::time::Duration;

use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpBrowserConfig};
use futures_util::StreamExt;

use crate::error::{AppError, AppResult, SessionError};

/// Default viewport used when none is configured.
const DEFAULT_WINDOW: (u32, u32) = (1280, 720);

/// Launch options for the browser process.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub chrome: Option<String>,
    pub headless: bool,
    pub no_sandbox: bool,
    pub window: (u32, u32),
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            chrome: None,
            headless: true,
            no_sandbox: false,
            window: DEFAULT_WINDOW,
        }
    }
}

/// A running browser instance with its CDP connection.
#[derive(Debug)]
pub struct Browser {
    inner: CdpBrowser,
    handler_task: tokio::task::JoinHandle<()>,
}

impl Browser {
    /// Launches Chrome and spawns the CDP event handler task.
    ///
    /// # Errors
    ///
    /// Returns an error when the launch configuration is invalid or the
    /// browser process cannot be started.
    pub async fn launch(config: &SessionConfig) -> AppResult<Self> {
        let mut builder = CdpBrowserConfig::builder();
        if !config.headless {
            builder = builder.with_head();
        }
        if config.no_sandbox {
            builder = builder.no_sandbox();
        }
        if let Some(path) = config.chrome.as_deref() {
            builder = builder.chrome_executable(path);
        }
        builder = builder.window_size(config.window.0, config.window.1);

        let cdp_config = builder
            .build()
            .map_err(|message| AppError::session(SessionError::BuildBrowserConfig { message }))?;

        let (inner, mut handler) = CdpBrowser::launch(cdp_config)
            .await
            .map_err(|err| AppError::session(SessionError::Launch { source: err }))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            inner,
            handler_task,
        })
    }

    /// Opens a fresh page and navigates it to `url`.
    ///
    /// Blocks until the navigation completes or `timeout` elapses; the
    /// half-open page is closed before a navigation error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error when the page cannot be created, navigation
    /// fails, or the navigation wait times out.
    pub async fn open(&self, url: &str, timeout: Duration) -> AppResult<PageSession> {
        let page = self
            .inner
            .new_page("about:blank")
            .await
            .map_err(|err| AppError::session(SessionError::NewPage { source: err }))?;

        let navigation = async {
            page.goto(url).await.map_err(|err| SessionError::Navigate {
                url: url.to_owned(),
                source: err,
            })?;
            page.wait_for_navigation()
                .await
                .map_err(|err| SessionError::Navigate {
                    url: url.to_owned(),
                    source: err,
                })?;
            Ok::<(), SessionError>(())
        };

        let navigated = tokio::time::timeout(timeout, navigation).await;
        match navigated {
            Ok(Ok(())) => Ok(PageSession::new(page, url.to_owned())),
            Ok(Err(err)) => {
                drop(page.close().await);
                Err(AppError::session(err))
            }
            Err(_elapsed) => {
                drop(page.close().await);
                Err(AppError::session(SessionError::NavigateTimeout {
                    url: url.to_owned(),
                    timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                }))
            }
        }
    }

    /// Shuts down the browser process and its handler task.
    ///
    /// # Errors
    ///
    /// Returns an error when the CDP close command fails.
    pub async fn close(mut self) -> AppResult<()> {
        let result = self
            .inner
            .close()
            .await
            .map_err(|err| AppError::session(SessionError::CloseBrowser { source: err }));
        self.handler_task.abort();
        result?;
        Ok(())
    }
}
