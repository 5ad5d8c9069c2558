pub mod dispatch;
pub mod fields;
pub mod flows;
pub mod pipeline;
pub mod prompt;
pub mod transactions;

pub use crate::domain::model::{Session, TransactionOutcome, TransactionPayload};
pub use crate::domain::ports::{
    ContractAddressResolver, NetworkProvider, Prompter, SessionSetup, TransactionSigner,
};
pub use crate::utils::error::Result;
