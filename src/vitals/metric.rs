use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::threshold::Threshold;

/// Threshold bound for Largest Contentful Paint (milliseconds).
const LCP_MAX_MS: f64 = 2500.0;
/// Threshold bound for Time To First Byte (milliseconds).
const TTFB_MAX_MS: f64 = 800.0;
/// Threshold bound for First Input Delay (milliseconds).
const FID_MAX_MS: f64 = 100.0;
/// Threshold bound for Cumulative Layout Shift (unitless score).
const CLS_MAX_SCORE: f64 = 0.1;
/// Threshold bound for the Interaction to Next Paint approximation (milliseconds).
const INP_MAX_MS: f64 = 100.0;

/// The five browser-exposed performance metrics this tool checks.
#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Lcp,
    Ttfb,
    Fid,
    Cls,
    Inp,
}

/// Default check order: paint and network landmarks first, interaction
/// metrics last.
pub const ALL_METRICS: [Metric; 5] = [
    Metric::Lcp,
    Metric::Ttfb,
    Metric::Fid,
    Metric::Cls,
    Metric::Inp,
];

impl Metric {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Metric::Lcp => "lcp",
            Metric::Ttfb => "ttfb",
            Metric::Fid => "fid",
            Metric::Cls => "cls",
            Metric::Inp => "inp",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Metric::Lcp => "LCP",
            Metric::Ttfb => "TTFB",
            Metric::Fid => "FID",
            Metric::Cls => "CLS",
            Metric::Inp => "INP",
        }
    }

    /// Unit suffix for display; CLS is a unitless score.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Metric::Lcp | Metric::Ttfb | Metric::Fid | Metric::Inp => "ms",
            Metric::Cls => "",
        }
    }

    #[must_use]
    pub const fn default_threshold(self) -> Threshold {
        let bound = match self {
            Metric::Lcp => LCP_MAX_MS,
            Metric::Ttfb => TTFB_MAX_MS,
            Metric::Fid => FID_MAX_MS,
            Metric::Cls => CLS_MAX_SCORE,
            Metric::Inp => INP_MAX_MS,
        };
        Threshold::new(bound)
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.label())
    }
}
