#[cfg(feature = "cli")]
pub mod cli;
pub mod constants;
pub mod output;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliArgs;
pub use output::OutputOrConfigResolver;
pub use toml_config::{Chain, MinterConfig};
