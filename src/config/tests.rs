use clap::{CommandFactory, FromArgMatches};

use crate::args::VitalsArgs;
use crate::error::AppResult;
use crate::vitals::Metric;

use super::{apply_config, load_config_file};

fn parse_cli(argv: &[&str]) -> AppResult<(VitalsArgs, clap::ArgMatches)> {
    let matches = VitalsArgs::command().get_matches_from(argv);
    let args = VitalsArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn write_config(dir: &tempfile::TempDir, name: &str, content: &str) -> Result<std::path::PathBuf, String> {
    let path = dir.path().join(name);
    std::fs::write(&path, content).map_err(|err| format!("write config failed: {}", err))?;
    Ok(path)
}

#[test]
fn toml_config_parses_all_sections() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = write_config(
        &dir,
        "webvitals.toml",
        r##"url = "https://example.com/"
selector = "#accept"
metrics = ["lcp", "cls"]
probe_timeout = 5000
strict = true

[thresholds]
lcp_ms = 1800.0
cls = 0.05
"##,
    )?;

    let config = load_config_file(&path).map_err(|err| format!("load failed: {}", err))?;
    assert_eq!(config.url.as_deref(), Some("https://example.com/"));
    assert_eq!(config.selector.as_deref(), Some("#accept"));
    assert_eq!(config.metrics, Some(vec![Metric::Lcp, Metric::Cls]));
    assert_eq!(config.probe_timeout, Some(5000));
    assert_eq!(config.strict, Some(true));
    let thresholds = config
        .thresholds
        .ok_or_else(|| "expected thresholds table".to_owned())?;
    assert_eq!(thresholds.lcp_ms, Some(1800.0));
    assert_eq!(thresholds.cls, Some(0.05));
    assert_eq!(thresholds.ttfb_ms, None);
    Ok(())
}

#[test]
fn json_config_parses() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = write_config(
        &dir,
        "webvitals.json",
        r#"{ "url": "https://example.com/", "thresholds": { "ttfb_ms": 500.0 } }"#,
    )?;

    let config = load_config_file(&path).map_err(|err| format!("load failed: {}", err))?;
    assert_eq!(config.url.as_deref(), Some("https://example.com/"));
    let thresholds = config
        .thresholds
        .ok_or_else(|| "expected thresholds table".to_owned())?;
    assert_eq!(thresholds.ttfb_ms, Some(500.0));
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = write_config(&dir, "webvitals.yaml", "url: nope")?;
    assert!(load_config_file(&path).is_err());
    Ok(())
}

#[test]
fn cli_values_win_over_config() -> Result<(), String> {
    let (mut args, matches) = parse_cli(&[
        "webvitals",
        "-u",
        "https://cli.example/",
        "--lcp-max",
        "1000",
    ])
    .map_err(|err| format!("parse failed: {}", err))?;

    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = write_config(
        &dir,
        "webvitals.toml",
        r#"url = "https://config.example/"
strict = true

[thresholds]
lcp_ms = 2000.0
ttfb_ms = 600.0
"#,
    )?;
    let config = load_config_file(&path).map_err(|err| format!("load failed: {}", err))?;

    apply_config(&mut args, &matches, &config)
        .map_err(|err| format!("apply failed: {}", err))?;

    assert_eq!(args.url.as_deref(), Some("https://cli.example/"));
    assert_eq!(args.lcp_max, Some(1000.0));
    assert_eq!(args.ttfb_max, Some(600.0));
    assert!(args.strict);
    Ok(())
}

#[test]
fn non_positive_config_threshold_is_rejected() -> Result<(), String> {
    let (mut args, matches) = parse_cli(&["webvitals", "-u", "https://example.com/"])
        .map_err(|err| format!("parse failed: {}", err))?;

    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = write_config(
        &dir,
        "webvitals.toml",
        r#"[thresholds]
cls = 0.0
"#,
    )?;
    let config = load_config_file(&path).map_err(|err| format!("load failed: {}", err))?;

    assert!(apply_config(&mut args, &matches, &config).is_err());
    Ok(())
}

#[test]
fn zero_probe_timeout_in_config_is_rejected() -> Result<(), String> {
    let (mut args, matches) = parse_cli(&["webvitals", "-u", "https://example.com/"])
        .map_err(|err| format!("parse failed: {}", err))?;

    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = write_config(&dir, "webvitals.toml", "probe_timeout = 0\n")?;
    let config = load_config_file(&path).map_err(|err| format!("load failed: {}", err))?;

    assert!(apply_config(&mut args, &matches, &config).is_err());
    Ok(())
}
