use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinterError {
    #[error("Gateway request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required setting '{field}'")]
    MissingConfigError { field: String },

    #[error("Invalid address '{value}': {reason}")]
    AddressError { value: String, reason: String },

    #[error("Prompt error: {message}")]
    PromptError { message: String },

    #[error("Session setup failed: {message}")]
    SessionError { message: String },

    #[error("Signing failed: {message}")]
    SigningError { message: String },

    #[error("Gateway error: {message}")]
    GatewayError { message: String },

    #[error("Transaction {hash} finished with status '{status}'")]
    TransactionFailed { hash: String, status: String },
}

impl MinterError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MinterError::HttpError(_) | MinterError::GatewayError { .. } => {
                "Check the gateway URL in [network] and your connection, then run the command again"
            }
            MinterError::IoError(_) => "Check that the referenced files exist and are readable",
            MinterError::SerializationError(_) => {
                "The gateway or output file returned unexpected JSON"
            }
            MinterError::ConfigError { .. }
            | MinterError::InvalidConfigValueError { .. }
            | MinterError::MissingConfigError { .. } => "Fix the configuration file and try again",
            MinterError::AddressError { .. } | MinterError::SessionError { .. } => {
                "Deploy the SFT minter contract first or set [contract].address"
            }
            MinterError::PromptError { .. } => "Run the command from an interactive terminal",
            MinterError::SigningError { .. } => "Check the PEM wallet file in [wallet].pem_path",
            MinterError::TransactionFailed { .. } => {
                "Inspect the transaction in the explorer for the contract error"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MinterError>;
