use crate::adapters::gateway::GatewayProvider;
use crate::adapters::pem_signer::PemSigner;
use crate::config::toml_config::MinterConfig;
use crate::domain::model::{Account, Address, Session, SmartContract};
use crate::domain::ports::{NetworkProvider, SessionSetup, TransactionSigner};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Binds the contract to the configured PEM wallet and gateway.
#[derive(Debug, Clone)]
pub struct NetworkSessionSetup {
    config: MinterConfig,
}

impl NetworkSessionSetup {
    pub fn new(config: MinterConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl SessionSetup for NetworkSessionSetup {
    async fn setup(&self, contract_address: &Address) -> Result<Session> {
        // 載入錢包與閘道
        let signer = PemSigner::from_file(&self.config.wallet.pem_path)?;
        let provider = GatewayProvider::from_config(&self.config)?;

        // 同步帳戶 nonce
        let nonce = provider.get_account_nonce(signer.address()).await?;
        let account = Account {
            address: signer.address().clone(),
            nonce,
        };
        tracing::info!(
            "Session for {} on chain {} (contract {})",
            account.address,
            self.config.chain_id(),
            contract_address
        );

        Ok(Session {
            contract: SmartContract {
                address: contract_address.clone(),
                chain_id: self.config.chain_id().to_string(),
                gas_price: self.config.network.gas_price,
            },
            account,
            signer: Box::new(signer),
            provider: Box::new(provider),
            explorer_url: self.config.explorer_url().to_string(),
        })
    }
}
