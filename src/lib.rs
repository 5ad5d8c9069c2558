pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliArgs;
pub use crate::config::{MinterConfig, OutputOrConfigResolver};

pub use crate::adapters::{GatewayProvider, NetworkSessionSetup, PemSigner, TerminalPrompter};
pub use crate::core::dispatch::{dispatch, MinterCommand, UsageError, USAGE_EXIT_CODE};
pub use crate::core::flows::{FlowOutcome, SftMinter};
pub use crate::utils::error::{MinterError, Result};
