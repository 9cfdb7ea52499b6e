use std::ffi::OsString;
use std::path::Path;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::VitalsArgs;
use crate::error::{AppError, AppResult, ValidationError};
use crate::system::banner;

/// Default config filenames checked when no CLI args are provided.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["webvitals.toml", "webvitals.json"];

pub(crate) fn run() -> AppResult<()> {
    let (args, matches) = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args, &matches))
}

fn parse_args() -> AppResult<Option<(VitalsArgs, ArgMatches)>> {
    let mut cmd = VitalsArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = VitalsArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}

async fn run_async(mut args: VitalsArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(&mut args, matches, &config)?;
    }

    if args.url.is_none() {
        tracing::error!("Missing URL (set --url or provide in config).");
        return Err(AppError::validation(ValidationError::MissingUrl));
    }

    banner::print_cli_banner(args.no_color);
    println!();

    let export_path = args.export_json.clone();
    let strict = args.strict;

    let outcome = crate::app::run_local(args).await?;

    crate::app::print_summary(&outcome);
    if let Some(path) = export_path.as_deref() {
        crate::app::export_json(path, &outcome).await?;
        tracing::info!(path, "Wrote JSON export");
    }

    if outcome.totals.failed > 0 {
        return Err(AppError::validation(ValidationError::ThresholdViolations));
    }
    if strict && outcome.totals.inconclusive > 0 {
        return Err(AppError::validation(ValidationError::StrictInconclusive));
    }
    Ok(())
}
