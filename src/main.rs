use anyhow::Context;
use clap::Parser;
use sft_minter::utils::{logger, validation::Validate};
use sft_minter::{
    dispatch, CliArgs, MinterConfig, NetworkSessionSetup, OutputOrConfigResolver, SftMinter,
    TerminalPrompter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::info!("Starting sft-minter v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("CLI args: {:?}", args);
    if !args.extra.is_empty() {
        tracing::debug!("Ignoring extra arguments: {:?}", args.extra);
    }

    // 子命令先於設定檔解析，用法錯誤不需要設定
    let command = match dispatch(args.command.as_deref()) {
        Ok(command) => command,
        Err(usage) => {
            println!("{}", usage);
            std::process::exit(usage.exit_code());
        }
    };

    // 載入配置，檔案不存在時使用預設值
    let config = MinterConfig::load_or_default(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config))?;

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 建立合約地址來源、連線設定與互動流程
    let resolver = OutputOrConfigResolver::new(&config.contract);
    let setup = NetworkSessionSetup::new(config);
    let mut minter = SftMinter::new(TerminalPrompter::stdio(), resolver, setup);

    let outcome = minter.run(command).await;
    tracing::debug!("Flow finished: {:?}", outcome);

    // 失敗的流程以非零狀態結束
    let exit_code = outcome.exit_code();
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
