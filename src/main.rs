mod app;
mod args;
mod config;
mod entry;
mod error;
mod probe;
mod session;
mod shutdown;
mod system;
mod vitals;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
