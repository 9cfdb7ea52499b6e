use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::Instant;

use crate::args::VitalsArgs;
use crate::error::{AppError, AppResult, ValidationError};
use crate::probe::{Measurement, ProbeConfig, probe_for};
use crate::session::{Browser, SessionConfig};
use crate::shutdown::ShutdownReceiver;
use crate::system::shutdown_handlers::{setup_signal_shutdown_handler, shutdown_channel};
use crate::vitals::{
    ALL_METRICS, CheckOutcome, InconclusiveReason, Metric, RunTotals, Threshold, ThresholdSet,
    Verdict, evaluate,
};

/// Everything one run needs, resolved exactly once from CLI and config.
#[derive(Debug, Clone)]
pub(crate) struct RunConfig {
    pub(crate) url: String,
    pub(crate) metrics: Vec<Metric>,
    pub(crate) thresholds: ThresholdSet,
    pub(crate) probe_config: ProbeConfig,
    pub(crate) probe_timeout: Duration,
    pub(crate) nav_timeout: Duration,
}

#[derive(Debug)]
pub(crate) struct RunOutcome {
    pub(crate) url: String,
    pub(crate) started_at: DateTime<Utc>,
    pub(crate) outcomes: Vec<CheckOutcome>,
    pub(crate) totals: RunTotals,
    pub(crate) duration: Duration,
}

/// Runs every selected metric check against the target page.
///
/// The browser is launched once; each check opens its own page session
/// and closes it on every exit path. A shutdown signal aborts between
/// checks.
///
/// # Errors
///
/// Returns an error when the run configuration is invalid, the browser
/// cannot be launched, navigation fails, or the run is interrupted.
pub(crate) async fn run_local(args: VitalsArgs) -> AppResult<RunOutcome> {
    let run = build_run_config(&args)?;
    let session_config = SessionConfig {
        chrome: args.chrome,
        headless: !args.no_headless,
        no_sandbox: args.no_sandbox,
        ..SessionConfig::default()
    };

    let (shutdown_tx, mut shutdown_rx) = shutdown_channel();
    let signal_task = setup_signal_shutdown_handler(&shutdown_tx);

    tracing::info!(url = %run.url, checks = run.metrics.len(), "Starting web vitals run");
    let started_at = Utc::now();
    let started = Instant::now();

    let browser = Browser::launch(&session_config).await?;
    let result = run_checks(&browser, &run, &mut shutdown_rx).await;
    let close_result = browser.close().await;
    signal_task.abort();

    let outcomes = result?;
    close_result?;

    let totals = RunTotals::tally(&outcomes);
    Ok(RunOutcome {
        url: run.url,
        started_at,
        outcomes,
        totals,
        duration: started.elapsed(),
    })
}

async fn run_checks(
    browser: &Browser,
    run: &RunConfig,
    shutdown_rx: &mut ShutdownReceiver,
) -> AppResult<Vec<CheckOutcome>> {
    let mut outcomes = Vec::with_capacity(run.metrics.len());
    for &metric in &run.metrics {
        tokio::select! {
            result = check_metric(browser, run, metric) => {
                outcomes.push(result?);
            }
            _ = shutdown_rx.recv() => {
                tracing::warn!("Shutdown requested; aborting remaining checks");
                return Err(AppError::validation(ValidationError::RunInterrupted));
            }
        }
    }
    Ok(outcomes)
}

/// One test case: fresh session, bounded probe, evaluation.
async fn check_metric(
    browser: &Browser,
    run: &RunConfig,
    metric: Metric,
) -> AppResult<CheckOutcome> {
    let started = Instant::now();
    let session = browser.open(&run.url, run.nav_timeout).await?;

    let probe = probe_for(metric);
    let measured = tokio::time::timeout(
        run.probe_timeout,
        probe.measure(&session, &run.probe_config),
    )
    .await;

    // The session is released before any probe error propagates.
    let close_result = session.close().await;
    let measurement = match measured {
        Ok(inner) => inner,
        Err(_elapsed) => Ok(Measurement::Inconclusive(InconclusiveReason::TimedOut)),
    }?;
    close_result?;

    let threshold = run.thresholds.get(metric);
    let verdict = evaluate(measurement.value(), threshold);
    let reason = match verdict {
        Verdict::Inconclusive => measurement
            .reason()
            .or(Some(InconclusiveReason::NoSignal)),
        Verdict::Passed | Verdict::Failed => None,
    };

    match verdict {
        Verdict::Passed => tracing::info!(
            metric = metric.as_str(),
            observation = measurement.value(),
            bound = threshold.bound(),
            "Check passed"
        ),
        Verdict::Failed => tracing::warn!(
            metric = metric.as_str(),
            observation = measurement.value(),
            bound = threshold.bound(),
            "Check failed"
        ),
        Verdict::Inconclusive => tracing::warn!(
            metric = metric.as_str(),
            reason = reason.map(InconclusiveReason::as_str),
            "Check inconclusive"
        ),
    }

    Ok(CheckOutcome {
        metric,
        observation: measurement.value(),
        threshold,
        verdict,
        reason,
        elapsed: started.elapsed(),
    })
}

pub(crate) fn build_run_config(args: &VitalsArgs) -> AppResult<RunConfig> {
    let url = match args.url.as_deref() {
        Some(url) => validate_url(url)?,
        None => return Err(AppError::validation(ValidationError::MissingUrl)),
    };

    if args.selector.trim().is_empty() {
        return Err(AppError::validation(ValidationError::SelectorEmpty));
    }

    let mut thresholds = ThresholdSet::default();
    for (metric, bound) in [
        (Metric::Lcp, args.lcp_max),
        (Metric::Ttfb, args.ttfb_max),
        (Metric::Fid, args.fid_max),
        (Metric::Cls, args.cls_max),
        (Metric::Inp, args.inp_max),
    ] {
        if let Some(bound) = bound {
            thresholds.set(metric, Threshold::new(bound));
        }
    }

    Ok(RunConfig {
        url,
        metrics: selected_metrics(&args.metrics),
        thresholds,
        probe_config: ProbeConfig {
            selector: args.selector.clone(),
        },
        probe_timeout: Duration::from_millis(args.probe_timeout_ms.get()),
        nav_timeout: Duration::from_millis(args.nav_timeout_ms.get()),
    })
}

/// Empty filter means all five, in the default order; an explicit filter
/// keeps its order with duplicates removed.
fn selected_metrics(filter: &[Metric]) -> Vec<Metric> {
    if filter.is_empty() {
        return ALL_METRICS.to_vec();
    }
    let mut selected = Vec::with_capacity(filter.len());
    for &metric in filter {
        if !selected.contains(&metric) {
            selected.push(metric);
        }
    }
    selected
}

fn validate_url(raw: &str) -> AppResult<String> {
    let parsed = url::Url::parse(raw).map_err(|err| {
        AppError::validation(ValidationError::InvalidUrl {
            url: raw.to_owned(),
            source: err,
        })
    })?;
    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(AppError::validation(ValidationError::UnsupportedUrlScheme {
                scheme: scheme.to_owned(),
            }));
        }
    }
    if parsed.host_str().is_none() {
        return Err(AppError::validation(ValidationError::UrlMissingHost));
    }
    Ok(String::from(parsed))
}
