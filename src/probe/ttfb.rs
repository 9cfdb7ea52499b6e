use async_trait::async_trait;
use serde::Deserialize;

use crate::error::AppResult;
use crate::session::PageSession;
use crate::vitals::{InconclusiveReason, Metric};

use super::{Measurement, MetricProbe, ProbeConfig};

/// Synchronous read of the already-captured navigation entry; no
/// observer registration and no waiting involved. The envelope keeps the
/// resolved value non-null even when the entry is absent.
const NAVIGATION_TIMING_SCRIPT: &str = "(() => { \
     const entries = performance.getEntriesByType('navigation'); \
     const nav = entries.length > 0 ? entries[0] : null; \
     return { timing: nav ? { requestStart: nav.requestStart, responseStart: nav.responseStart } : null }; \
     })()";

/// The two navigation-timing landmarks TTFB derives from.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationTiming {
    pub request_start: f64,
    pub response_start: f64,
}

#[derive(Debug, Deserialize)]
struct TimingEnvelope {
    timing: Option<NavigationTiming>,
}

/// Milliseconds between the request being sent and the first response
/// byte arriving.
#[must_use]
pub fn first_byte_delay(timing: &NavigationTiming) -> f64 {
    timing.response_start - timing.request_start
}

/// Time To First Byte.
#[derive(Debug, Clone, Copy)]
pub struct TtfbProbe;

#[async_trait]
impl MetricProbe for TtfbProbe {
    fn metric(&self) -> Metric {
        Metric::Ttfb
    }

    async fn measure(
        &self,
        session: &PageSession,
        _config: &ProbeConfig,
    ) -> AppResult<Measurement> {
        let envelope: TimingEnvelope = session.evaluate(NAVIGATION_TIMING_SCRIPT).await?;
        Ok(match envelope.timing {
            Some(timing) => Measurement::Observed(first_byte_delay(&timing)),
            None => Measurement::Inconclusive(InconclusiveReason::NoSignal),
        })
    }
}
