use serde::Deserialize;

use crate::vitals::Metric;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub selector: Option<String>,
    pub metrics: Option<Vec<Metric>>,
    pub probe_timeout: Option<u64>,
    pub nav_timeout: Option<u64>,
    pub chrome: Option<String>,
    pub no_headless: Option<bool>,
    pub no_sandbox: Option<bool>,
    pub export_json: Option<String>,
    pub strict: Option<bool>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
    pub thresholds: Option<ThresholdsConfig>,
}

/// Per-metric bound overrides; omitted fields keep the built-in
/// defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ThresholdsConfig {
    pub lcp_ms: Option<f64>,
    pub ttfb_ms: Option<f64>,
    pub fid_ms: Option<f64>,
    pub cls: Option<f64>,
    pub inp_ms: Option<f64>,
}
