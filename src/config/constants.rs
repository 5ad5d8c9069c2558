// Prompt labels.
pub const COLLECTION_TOKEN_NAME_LABEL: &str =
    "Please provide the collection token name (3-20 alphanumeric characters):";
pub const COLLECTION_TOKEN_TICKER_LABEL: &str =
    "Please provide the collection token ticker (3-10 uppercase alphanumeric characters):";
pub const SFT_TOKEN_DISPLAY_NAME_LABEL: &str = "Please provide the SFT display name:";
pub const SELLING_PRICE_LABEL: &str = "Please provide the selling price per token (EGLD):";
pub const METADATA_IPFS_CID_LABEL: &str = "Please provide the IPFS CID of the metadata file:";
pub const METADATA_IPFS_FILE_NAME_LABEL: &str =
    "Please provide the metadata file name (e.g. metadata.json):";
pub const INITIAL_SFT_SUPPLY_LABEL: &str = "Please provide the initial supply (min 1):";
pub const ROYALTIES_LABEL: &str = "Please provide royalties percentage (0-100, optional):";
pub const TAGS_LABEL: &str = "Please provide tags (comma separated):";
pub const URIS_LABEL: &str = "Please provide the asset URIs (comma separated):";
pub const ARE_YOU_SURE_LABEL: &str = "Are you sure you want to proceed? (y/N)";

// Contract endpoints.
pub const ISSUE_TOKEN_FUNCTION: &str = "issueToken";
pub const SET_LOCAL_ROLES_FUNCTION: &str = "setLocalRoles";
pub const CREATE_TOKEN_FUNCTION: &str = "createToken";

// Gas limits and values.
pub const ISSUE_SFT_MINTER_GAS_LIMIT: u64 = 60_000_000;
/// 0.05 EGLD, the protocol fee for issuing a token.
pub const ISSUE_SFT_MINTER_VALUE: &str = "0.05";
pub const ASSIGN_ROLES_SFT_MINTER_GAS_LIMIT: u64 = 60_000_000;
pub const CREATE_SFT_MINTER_GAS_LIMIT: u64 = 20_000_000;

pub const DEFAULT_GAS_PRICE: u64 = 1_000_000_000;

/// Key written by the deploy step into its output file.
pub const OUTPUT_SC_ADDRESS_KEY: &str = "sftMinterScAddress";
pub const DEFAULT_OUTPUT_FILE: &str = "output.json";
pub const DEFAULT_PEM_PATH: &str = "walletKey.pem";
pub const DEFAULT_CONFIG_FILE: &str = "sft-minter.toml";
