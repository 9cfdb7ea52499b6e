use chromiumoxide::page::Page;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult, SessionError};

/// One navigated page, scoped to a single metric check.
#[derive(Debug)]
pub struct PageSession {
    page: Page,
    url: String,
}

impl PageSession {
    pub(super) const fn new(page: Page, url: String) -> Self {
        Self { page, url }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Evaluates a script in page context and decodes its resolved value.
    ///
    /// Promise results are awaited by the driver before the value is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error when evaluation fails or the resolved value does
    /// not decode as `T`.
    pub async fn evaluate<T: DeserializeOwned>(&self, script: &str) -> AppResult<T> {
        let result = self
            .page
            .evaluate(script)
            .await
            .map_err(|err| AppError::session(SessionError::Evaluate { source: err }))?;
        result
            .into_value()
            .map_err(|err| AppError::session(SessionError::DecodeValue { source: err }))
    }

    /// Dispatches a trusted click on the first element matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns an error when the element cannot be found or the click
    /// dispatch fails.
    pub async fn click(&self, selector: &str) -> AppResult<()> {
        let element = self.page.find_element(selector).await.map_err(|err| {
            AppError::session(SessionError::ElementNotFound {
                selector: selector.to_owned(),
                source: err,
            })
        })?;
        element.click().await.map_err(|err| {
            AppError::session(SessionError::Click {
                selector: selector.to_owned(),
                source: err,
            })
        })?;
        Ok(())
    }

    /// Closes the page; the session is consumed on every exit path.
    ///
    /// # Errors
    ///
    /// Returns an error when the CDP close command fails.
    pub async fn close(self) -> AppResult<()> {
        self.page
            .close()
            .await
            .map_err(|err| AppError::session(SessionError::ClosePage { source: err }))?;
        Ok(())
    }
}
