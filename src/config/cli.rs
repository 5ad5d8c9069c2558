use crate::config::constants::DEFAULT_CONFIG_FILE;
use clap::Parser;

/// Arguments of the `sft-minter` binary. The subcommand itself is matched by
/// the dispatcher so that usage errors keep their own exit status.
#[derive(Debug, Clone, Parser)]
#[command(name = "sft-minter")]
#[command(about = "Issue, configure and mint SFT collections through the SFT minter contract")]
#[command(version, disable_help_flag = true)]
pub struct CliArgs {
    /// issue-collection-token | set-roles | create | --help
    #[arg(allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Anything after the subcommand is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub extra: Vec<String>,

    #[arg(long, default_value = DEFAULT_CONFIG_FILE, help = "Path to the TOML config file")]
    pub config: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}
