use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{AppError, AppResult, SessionError};
use crate::session::PageSession;
use crate::vitals::{InconclusiveReason, Metric};

use super::{Measurement, MetricProbe, ProbeConfig, observer_script};

/// Resolves once the document has finished loading.
const LOAD_COMPLETE_SCRIPT: &str = "new Promise((resolve) => { \
     if (document.readyState === 'complete') { resolve(true); } \
     else { window.addEventListener('load', () => resolve(true), { once: true }); } \
     })";

/// The `first-input` entry pair FID derives from.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FirstInputSample {
    pub start_time: f64,
    pub processing_start: f64,
}

#[derive(Debug, Deserialize)]
struct SampleEnvelope {
    sample: Option<FirstInputSample>,
}

/// Milliseconds between the interaction being queued and the engine
/// beginning to process it.
#[must_use]
pub fn input_delay(sample: &FirstInputSample) -> f64 {
    sample.processing_start - sample.start_time
}

/// First Input Delay: waits for load, dispatches one trusted click on
/// the configured selector, then reads the first `first-input` entry.
///
/// The click fires before the observer registers; buffered replay is
/// what makes that ordering safe.
#[derive(Debug, Clone, Copy)]
pub struct FidProbe;

#[async_trait]
impl MetricProbe for FidProbe {
    fn metric(&self) -> Metric {
        Metric::Fid
    }

    async fn measure(
        &self,
        session: &PageSession,
        config: &ProbeConfig,
    ) -> AppResult<Measurement> {
        let _loaded: bool = session.evaluate(LOAD_COMPLETE_SCRIPT).await?;

        match session.click(&config.selector).await {
            Ok(()) => {}
            Err(AppError::Session(SessionError::ElementNotFound { selector, source })) => {
                tracing::warn!(
                    url = session.url(),
                    %selector,
                    error = %source,
                    "FID interaction target not found"
                );
                return Ok(Measurement::Inconclusive(
                    InconclusiveReason::InteractionFailed,
                ));
            }
            Err(err) => return Err(err),
        }

        let script = observer_script(
            "first-input",
            "{ sample: entries.length > 0 \
             ? { startTime: entries[0].startTime, processingStart: entries[0].processingStart } \
             : null }",
        );
        let envelope: SampleEnvelope = session.evaluate(&script).await?;
        Ok(match envelope.sample {
            Some(sample) => Measurement::Observed(input_delay(&sample)),
            None => Measurement::Inconclusive(InconclusiveReason::NoSignal),
        })
    }
}
