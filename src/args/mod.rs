//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::VitalsArgs;
pub use types::PositiveU64;

pub use defaults::DEFAULT_SELECTOR;
