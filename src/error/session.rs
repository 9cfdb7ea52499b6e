use thiserror::Error;

use chromiumoxide::error::CdpError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid browser configuration: {message}")]
    BuildBrowserConfig { message: String },
    #[error("Failed to launch browser: {source}")]
    Launch {
        #[source]
        source: CdpError,
    },
    #[error("Failed to open page: {source}")]
    NewPage {
        #[source]
        source: CdpError,
    },
    #[error("Failed to navigate to '{url}': {source}")]
    Navigate {
        url: String,
        #[source]
        source: CdpError,
    },
    #[error("Navigation to '{url}' timed out after {timeout_ms}ms.")]
    NavigateTimeout { url: String, timeout_ms: u64 },
    #[error("Script evaluation failed: {source}")]
    Evaluate {
        #[source]
        source: CdpError,
    },
    #[error("Failed to decode script result: {source}")]
    DecodeValue {
        #[source]
        source: serde_json::Error,
    },
    #[error("Element '{selector}' not found: {source}")]
    ElementNotFound {
        selector: String,
        #[source]
        source: CdpError,
    },
    #[error("Failed to click '{selector}': {source}")]
    Click {
        selector: String,
        #[source]
        source: CdpError,
    },
    #[error("Failed to close page: {source}")]
    ClosePage {
        #[source]
        source: CdpError,
    },
    #[error("Failed to close browser: {source}")]
    CloseBrowser {
        #[source]
        source: CdpError,
    },
}
