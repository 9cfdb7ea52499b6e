use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PositiveU64, VitalsArgs};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, ThresholdsConfig};

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_u64(value: u64, field: &str) -> AppResult<PositiveU64> {
    PositiveU64::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn ensure_threshold(value: f64, field: &'static str) -> AppResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::config(ConfigError::ThresholdNotPositive {
            field,
        }));
    }
    Ok(value)
}

/// Applies config-file values beneath CLI flags: a value given on the
/// command line always wins over the file.
///
/// # Errors
///
/// Returns an error when a config value fails validation.
pub fn apply_config(
    args: &mut VitalsArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "selector")
        && let Some(selector) = config.selector.clone()
    {
        args.selector = selector;
    }

    if !is_cli(matches, "metrics")
        && let Some(metrics) = config.metrics.clone()
    {
        args.metrics = metrics;
    }

    if !is_cli(matches, "probe_timeout_ms")
        && let Some(value) = config.probe_timeout
    {
        args.probe_timeout_ms = ensure_positive_u64(value, "probe_timeout")?;
    }

    if !is_cli(matches, "nav_timeout_ms")
        && let Some(value) = config.nav_timeout
    {
        args.nav_timeout_ms = ensure_positive_u64(value, "nav_timeout")?;
    }

    if !is_cli(matches, "chrome")
        && let Some(chrome) = config.chrome.clone()
    {
        args.chrome = Some(chrome);
    }

    if !is_cli(matches, "no_headless")
        && let Some(value) = config.no_headless
    {
        args.no_headless = value;
    }

    if !is_cli(matches, "no_sandbox")
        && let Some(value) = config.no_sandbox
    {
        args.no_sandbox = value;
    }

    if !is_cli(matches, "export_json")
        && let Some(path) = config.export_json.clone()
    {
        args.export_json = Some(path);
    }

    if !is_cli(matches, "strict")
        && let Some(value) = config.strict
    {
        args.strict = value;
    }

    if !is_cli(matches, "verbose")
        && let Some(value) = config.verbose
    {
        args.verbose = value;
    }

    if !is_cli(matches, "no_color")
        && let Some(value) = config.no_color
    {
        args.no_color = value;
    }

    if let Some(thresholds) = config.thresholds.as_ref() {
        apply_thresholds(args, matches, thresholds)?;
    }

    Ok(())
}

fn apply_thresholds(
    args: &mut VitalsArgs,
    matches: &ArgMatches,
    thresholds: &ThresholdsConfig,
) -> AppResult<()> {
    if !is_cli(matches, "lcp_max")
        && let Some(value) = thresholds.lcp_ms
    {
        args.lcp_max = Some(ensure_threshold(value, "lcp_ms")?);
    }

    if !is_cli(matches, "ttfb_max")
        && let Some(value) = thresholds.ttfb_ms
    {
        args.ttfb_max = Some(ensure_threshold(value, "ttfb_ms")?);
    }

    if !is_cli(matches, "fid_max")
        && let Some(value) = thresholds.fid_ms
    {
        args.fid_max = Some(ensure_threshold(value, "fid_ms")?);
    }

    if !is_cli(matches, "cls_max")
        && let Some(value) = thresholds.cls
    {
        args.cls_max = Some(ensure_threshold(value, "cls")?);
    }

    if !is_cli(matches, "inp_max")
        && let Some(value) = thresholds.inp_ms
    {
        args.inp_max = Some(ensure_threshold(value, "inp_ms")?);
    }

    Ok(())
}
