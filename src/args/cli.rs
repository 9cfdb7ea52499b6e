use clap::Parser;

use crate::vitals::Metric;

use super::defaults::DEFAULT_SELECTOR;
use super::parsers::{parse_positive_u64, parse_threshold};
use super::types::PositiveU64;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Browser-driven Core Web Vitals checks - loads a page in headless Chrome and asserts LCP, TTFB, FID, CLS, and INP against fixed thresholds.",
    next_help_heading = "Advanced Options"
)]
pub struct VitalsArgs {
    /// Target URL for the page under test
    #[arg(long, short, help_heading = "Common Options")]
    pub url: Option<String>,

    /// Config file path (.toml or .json)
    #[arg(long, short, help_heading = "Common Options")]
    pub config: Option<String>,

    /// Metric to check (repeatable; defaults to all five)
    #[arg(
        long = "metric",
        short = 'm',
        value_enum,
        ignore_case = true,
        help_heading = "Common Options"
    )]
    pub metrics: Vec<Metric>,

    /// CSS selector of the interaction target used by FID and INP
    #[arg(long, default_value = DEFAULT_SELECTOR, help_heading = "Common Options")]
    pub selector: String,

    /// LCP bound in milliseconds (strict less-than)
    #[arg(long = "lcp-max", value_parser = parse_threshold, help_heading = "Threshold Options")]
    pub lcp_max: Option<f64>,

    /// TTFB bound in milliseconds (strict less-than)
    #[arg(long = "ttfb-max", value_parser = parse_threshold, help_heading = "Threshold Options")]
    pub ttfb_max: Option<f64>,

    /// FID bound in milliseconds (strict less-than)
    #[arg(long = "fid-max", value_parser = parse_threshold, help_heading = "Threshold Options")]
    pub fid_max: Option<f64>,

    /// CLS score bound (strict less-than)
    #[arg(long = "cls-max", value_parser = parse_threshold, help_heading = "Threshold Options")]
    pub cls_max: Option<f64>,

    /// INP bound in milliseconds (strict less-than)
    #[arg(long = "inp-max", value_parser = parse_threshold, help_heading = "Threshold Options")]
    pub inp_max: Option<f64>,

    /// Per-probe wait bound in milliseconds
    #[arg(
        long = "probe-timeout",
        default_value = "10000",
        value_parser = parse_positive_u64
    )]
    pub probe_timeout_ms: PositiveU64,

    /// Navigation wait bound in milliseconds
    #[arg(
        long = "nav-timeout",
        default_value = "30000",
        value_parser = parse_positive_u64
    )]
    pub nav_timeout_ms: PositiveU64,

    /// Chrome/Chromium executable path
    #[arg(long, env = "CHROME")]
    pub chrome: Option<String>,

    /// Run the browser with a visible window
    #[arg(long = "no-headless")]
    pub no_headless: bool,

    /// Disable the Chrome sandbox (containers/CI)
    #[arg(long = "no-sandbox")]
    pub no_sandbox: bool,

    /// Write check outcomes to a JSON file
    #[arg(long = "export-json", help_heading = "Common Options")]
    pub export_json: Option<String>,

    /// Treat inconclusive checks as failures
    #[arg(long, help_heading = "Common Options")]
    pub strict: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
