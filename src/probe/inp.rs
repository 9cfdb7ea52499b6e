use async_trait::async_trait;
use serde::Deserialize;

use crate::error::AppResult;
use crate::session::PageSession;
use crate::vitals::{InconclusiveReason, Metric};

use super::{Measurement, MetricProbe, ProbeConfig, escape_js_string};

#[derive(Debug, Deserialize)]
struct InteractionTiming {
    elapsed: Option<f64>,
}

/// Interaction to Next Paint, approximated via paint-cycle boundaries:
/// a frame callback records the start, the click is dispatched
/// synchronously inside the page, and the following frame callback
/// records the end.
#[derive(Debug, Clone, Copy)]
pub struct InpProbe;

fn interaction_script(selector: &str) -> String {
    let selector = escape_js_string(selector);
    format!(
        "new Promise((resolve) => {{ \
         requestAnimationFrame(() => {{ \
         const target = document.querySelector('{selector}'); \
         if (!target) {{ resolve({{ elapsed: null }}); return; }} \
         const start = performance.now(); \
         target.click(); \
         requestAnimationFrame(() => {{ resolve({{ elapsed: performance.now() - start }}); }}); \
         }}); \
         }})"
    )
}

#[async_trait]
impl MetricProbe for InpProbe {
    fn metric(&self) -> Metric {
        Metric::Inp
    }

    async fn measure(
        &self,
        session: &PageSession,
        config: &ProbeConfig,
    ) -> AppResult<Measurement> {
        let script = interaction_script(&config.selector);
        let timing: InteractionTiming = session.evaluate(&script).await?;
        Ok(match timing.elapsed {
            Some(value) => Measurement::Observed(value),
            None => {
                tracing::warn!(
                    url = session.url(),
                    selector = %config.selector,
                    "INP interaction target not found"
                );
                Measurement::Inconclusive(InconclusiveReason::InteractionFailed)
            }
        })
    }
}
