use crate::domain::model::{Account, TransactionOutcome, TransactionPayload};
use crate::domain::ports::{NetworkProvider, TransactionSigner};
use crate::utils::error::{MinterError, Result};

/// Sign, broadcast and wait for a payload. Shared by every subcommand.
///
/// The account nonce is consumed even when broadcasting fails afterwards.
pub async fn submit(
    payload: TransactionPayload,
    account: &mut Account,
    signer: &dyn TransactionSigner,
    provider: &dyn NetworkProvider,
) -> Result<TransactionOutcome> {
    // 使用目前 nonce，送出前就遞增
    let mut transaction = payload.into_transaction(account.address.clone(), account.nonce);
    account.increment_nonce();

    // 簽名
    transaction.signature = Some(signer.sign(&transaction)?);
    tracing::debug!(
        "Signed {} with nonce {}",
        transaction.decoded_data().unwrap_or_default(),
        transaction.nonce
    );

    // 廣播並等待交易完成
    let hash = provider.send_transaction(&transaction).await?;
    tracing::info!("Transaction {} sent, waiting for completion", hash);

    let status = provider.await_completed(&hash).await?;
    // 非成功的最終狀態視為錯誤
    if !status.is_successful() {
        return Err(MinterError::TransactionFailed {
            hash: hash.0,
            status: status.0,
        });
    }

    tracing::info!("Transaction {} completed with status {}", hash, status);
    Ok(TransactionOutcome {
        hash,
        status,
        confirmed_at: chrono::Utc::now(),
    })
}
