//! Library half of the `pantry` binary, split out so commands can be driven
//! from tests with an in-memory store and a fake recipe source.

pub mod cli;
pub mod commands;
pub mod config;
pub mod state;

pub use cli::Cli;
pub use config::Config;
pub use state::AppState;
