use crate::config::constants::OUTPUT_SC_ADDRESS_KEY;
use crate::config::toml_config::ContractConfig;
use crate::domain::model::Address;
use crate::domain::ports::ContractAddressResolver;
use crate::utils::error::{MinterError, Result};
use std::fs;
use std::path::PathBuf;

/// Finds the SFT minter contract: deploy output file first, then the config.
#[derive(Debug, Clone)]
pub struct OutputOrConfigResolver {
    output_file: PathBuf,
    configured_address: Option<String>,
}

impl OutputOrConfigResolver {
    pub fn new(contract: &ContractConfig) -> Self {
        Self {
            output_file: PathBuf::from(&contract.output_file),
            configured_address: contract.address.clone(),
        }
    }

    fn address_from_output(&self) -> Result<Option<String>> {
        if !self.output_file.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.output_file)?;
        let output: serde_json::Value = serde_json::from_str(&content)?;
        Ok(output
            .get(OUTPUT_SC_ADDRESS_KEY)
            .and_then(|value| value.as_str())
            .filter(|value| !value.trim().is_empty())
            .map(str::to_string))
    }
}

impl ContractAddressResolver for OutputOrConfigResolver {
    fn resolve(&self) -> Result<Address> {
        if let Some(address) = self.address_from_output()? {
            tracing::debug!("Contract address taken from {}", self.output_file.display());
            return Address::parse(&address);
        }

        match self.configured_address.as_deref() {
            Some(address) if !address.trim().is_empty() => Address::parse(address),
            _ => Err(MinterError::SessionError {
                message: format!(
                    "No SFT minter contract address in {} or in [contract].address",
                    self.output_file.display()
                ),
            }),
        }
    }
}
