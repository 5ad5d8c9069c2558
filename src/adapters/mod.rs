// Adapters layer: concrete implementations of the domain ports (terminal, wallet, gateway).

pub mod gateway;
pub mod pem_signer;
pub mod session;
pub mod terminal;

pub use gateway::GatewayProvider;
pub use pem_signer::PemSigner;
pub use session::NetworkSessionSetup;
pub use terminal::TerminalPrompter;
