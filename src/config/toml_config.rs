use crate::config::constants::{DEFAULT_GAS_PRICE, DEFAULT_OUTPUT_FILE, DEFAULT_PEM_PATH};
use crate::utils::error::{MinterError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    #[default]
    Devnet,
    Testnet,
    Mainnet,
}

impl Chain {
    pub fn chain_id(&self) -> &'static str {
        match self {
            Chain::Devnet => "D",
            Chain::Testnet => "T",
            Chain::Mainnet => "1",
        }
    }

    pub fn default_gateway_url(&self) -> &'static str {
        match self {
            Chain::Devnet => "https://devnet-gateway.multiversx.com",
            Chain::Testnet => "https://testnet-gateway.multiversx.com",
            Chain::Mainnet => "https://gateway.multiversx.com",
        }
    }

    pub fn default_explorer_url(&self) -> &'static str {
        match self {
            Chain::Devnet => "https://devnet-explorer.multiversx.com",
            Chain::Testnet => "https://testnet-explorer.multiversx.com",
            Chain::Mainnet => "https://explorer.multiversx.com",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MinterConfig {
    pub network: NetworkConfig,
    pub wallet: WalletConfig,
    pub contract: ContractConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub chain: Chain,
    pub gateway_url: Option<String>,
    pub explorer_url: Option<String>,
    pub gas_price: u64,
    pub timeout_seconds: u64,
    pub poll_interval_ms: u64,
    pub max_poll_attempts: u32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            chain: Chain::default(),
            gateway_url: None,
            explorer_url: None,
            gas_price: DEFAULT_GAS_PRICE,
            timeout_seconds: 30,
            poll_interval_ms: 6_000,
            max_poll_attempts: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    pub pem_path: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            pem_path: DEFAULT_PEM_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Used when the deploy output file has no address.
    pub address: Option<String>,
    pub output_file: String,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: None,
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

impl MinterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MinterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Missing file means defaults; anything else must parse.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MinterError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MinterError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn gateway_url(&self) -> &str {
        self.network
            .gateway_url
            .as_deref()
            .unwrap_or_else(|| self.network.chain.default_gateway_url())
    }

    pub fn explorer_url(&self) -> &str {
        self.network
            .explorer_url
            .as_deref()
            .unwrap_or_else(|| self.network.chain.default_explorer_url())
    }

    pub fn chain_id(&self) -> &'static str {
        self.network.chain.chain_id()
    }
}

impl Validate for MinterConfig {
    fn validate(&self) -> Result<()> {
        // 驗證閘道與瀏覽器 URL
        validation::validate_url("network.gateway_url", self.gateway_url())?;
        validation::validate_url("network.explorer_url", self.explorer_url())?;
        // 驗證數值設定
        validation::validate_positive_number("network.gas_price", self.network.gas_price, 1)?;
        validation::validate_positive_number(
            "network.timeout_seconds",
            self.network.timeout_seconds,
            1,
        )?;
        validation::validate_positive_number(
            "network.max_poll_attempts",
            self.network.max_poll_attempts.into(),
            1,
        )?;
        // 驗證檔案路徑
        validation::validate_path("wallet.pem_path", &self.wallet.pem_path)?;
        validation::validate_path("contract.output_file", &self.contract.output_file)?;
        Ok(())
    }
}
