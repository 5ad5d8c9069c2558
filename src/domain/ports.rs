use crate::domain::model::{Address, Session, Transaction, TransactionStatus, TxHash};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Line-oriented operator input.
pub trait Prompter {
    /// Shows `label` and waits for one answer. `None` means input ended.
    fn ask(&mut self, label: &str) -> Result<Option<String>>;

    /// Tells the operator why the previous answer was rejected.
    fn reject(&mut self, message: &str) -> Result<()>;
}

pub trait ContractAddressResolver {
    fn resolve(&self) -> Result<Address>;
}

pub trait TransactionSigner: Send + Sync {
    fn address(&self) -> &Address;

    /// Returns the hex-encoded signature of `transaction`.
    fn sign(&self, transaction: &Transaction) -> Result<String>;
}

#[async_trait]
pub trait NetworkProvider: Send + Sync {
    async fn get_account_nonce(&self, address: &Address) -> Result<u64>;
    async fn send_transaction(&self, transaction: &Transaction) -> Result<TxHash>;
    /// Resolves once the transaction left the pending state.
    async fn await_completed(&self, hash: &TxHash) -> Result<TransactionStatus>;
}

#[async_trait]
pub trait SessionSetup: Send + Sync {
    /// Binds the contract at `contract_address` to a signer and a provider.
    async fn setup(&self, contract_address: &Address) -> Result<Session>;
}
