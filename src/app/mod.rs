mod export;
mod runner;
mod summary;

pub(crate) use export::export_json;
pub(crate) use runner::{RunOutcome, run_local};
pub(crate) use summary::print_summary;
