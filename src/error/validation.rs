use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing URL (set --url or provide in config).")]
    MissingUrl,
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("URL is missing host.")]
    UrlMissingHost,
    #[error("Unsupported URL scheme '{scheme}'. Use http or https.")]
    UnsupportedUrlScheme { scheme: String },
    #[error("Selector must not be empty.")]
    SelectorEmpty,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid threshold '{value}': {source}")]
    InvalidThreshold {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Threshold '{value}' must be > 0.")]
    ThresholdNotPositive { value: String },
    #[error("One or more checks failed their threshold.")]
    ThresholdViolations,
    #[error("One or more checks were inconclusive (--strict).")]
    StrictInconclusive,
    #[error("Run interrupted by shutdown signal.")]
    RunInterrupted,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
}
