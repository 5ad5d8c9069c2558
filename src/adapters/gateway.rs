use crate::config::toml_config::MinterConfig;
use crate::domain::model::{Address, Transaction, TransactionStatus, TxHash};
use crate::domain::ports::NetworkProvider;
use crate::utils::error::{MinterError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Envelope of every gateway reply.
#[derive(Debug, Deserialize)]
struct GatewayResponse<T> {
    data: Option<T>,
    #[serde(default)]
    error: String,
    #[serde(default)]
    code: String,
}

#[derive(Debug, Deserialize)]
struct AccountData {
    account: AccountInfo,
}

#[derive(Debug, Deserialize)]
struct AccountInfo {
    nonce: u64,
}

#[derive(Debug, Deserialize)]
struct SendData {
    #[serde(rename = "txHash")]
    tx_hash: String,
}

#[derive(Debug, Deserialize)]
struct StatusData {
    status: String,
}

/// HTTP provider for a MultiversX-style gateway.
#[derive(Debug, Clone)]
pub struct GatewayProvider {
    client: Client,
    base_url: String,
    poll_interval: Duration,
    max_poll_attempts: u32,
}

impl GatewayProvider {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        poll_interval: Duration,
        max_poll_attempts: u32,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            poll_interval,
            max_poll_attempts,
        })
    }

    pub fn from_config(config: &MinterConfig) -> Result<Self> {
        Self::new(
            config.gateway_url(),
            Duration::from_secs(config.network.timeout_seconds),
            Duration::from_millis(config.network.poll_interval_ms),
            config.network.max_poll_attempts,
        )
    }

    /// 組合閘道端點 URL
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_data<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let text = response.text().await?;

        // 非 JSON 的回應（例如代理伺服器錯誤頁）也視為閘道錯誤
        let body: GatewayResponse<T> =
            serde_json::from_str(&text).map_err(|_| MinterError::GatewayError {
                message: format!("unexpected response ({}): {}", status, text),
            })?;

        // HTTP 狀態與回應 code 都必須成功
        if !status.is_success() || body.code != "successful" {
            let message = if body.error.is_empty() {
                format!("request failed with {} ({})", status, body.code)
            } else {
                body.error
            };
            return Err(MinterError::GatewayError { message });
        }

        body.data.ok_or_else(|| MinterError::GatewayError {
            message: "response has no data".to_string(),
        })
    }

    async fn transaction_status(&self, hash: &TxHash) -> Result<TransactionStatus> {
        let response = self
            .client
            .get(self.url(&format!("/transaction/{}/status", hash)))
            .send()
            .await?;
        let data: StatusData = Self::read_data(response).await?;
        Ok(TransactionStatus(data.status))
    }
}

#[async_trait]
impl NetworkProvider for GatewayProvider {
    async fn get_account_nonce(&self, address: &Address) -> Result<u64> {
        let response = self
            .client
            .get(self.url(&format!("/address/{}", address)))
            .send()
            .await?;
        let data: AccountData = Self::read_data(response).await?;
        tracing::debug!("Account {} has nonce {}", address, data.account.nonce);
        Ok(data.account.nonce)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> Result<TxHash> {
        let response = self
            .client
            .post(self.url("/transaction/send"))
            .json(transaction)
            .send()
            .await?;
        let data: SendData = Self::read_data(response).await?;
        Ok(TxHash(data.tx_hash))
    }

    async fn await_completed(&self, hash: &TxHash) -> Result<TransactionStatus> {
        // 輪詢狀態直到不再是 pending
        for attempt in 1..=self.max_poll_attempts {
            let status = self.transaction_status(hash).await?;
            if !status.is_pending() {
                return Ok(status);
            }
            tracing::debug!(
                "Transaction {} still {} (attempt {}/{})",
                hash,
                status,
                attempt,
                self.max_poll_attempts
            );
            // 最後一次檢查後不必再等待
            if attempt < self.max_poll_attempts {
                tokio::time::sleep(self.poll_interval).await;
            }
        }

        Err(MinterError::GatewayError {
            message: format!(
                "transaction {} still pending after {} status checks",
                hash, self.max_poll_attempts
            ),
        })
    }
}
