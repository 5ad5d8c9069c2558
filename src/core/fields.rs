//! Prompt sequences per subcommand and the typed arguments they produce.
//!
//! Field order matches the positional order of the matching builder.

use crate::config::constants::*;
use crate::core::prompt::{Answers, FieldKind, FieldSpec};
use crate::utils::error::Result;
use crate::utils::validation;

pub const TOKEN_NAME: &str = "tokenName";
pub const TOKEN_TICKER: &str = "tokenTicker";
pub const DISPLAY_NAME: &str = "tokenDisplayName";
pub const SELLING_PRICE: &str = "tokenSellingPrice";
pub const METADATA_IPFS_CID: &str = "metadataIpfsCID";
pub const METADATA_IPFS_FILE_NAME: &str = "metadataIpfsFileName";
pub const INITIAL_SUPPLY: &str = "initialAmountOfTokens";
pub const ROYALTIES: &str = "royalties";
pub const TAGS: &str = "tags";
pub const URIS: &str = "uris";

pub const ISSUE_COLLECTION_FIELDS: [FieldSpec; 2] = [
    FieldSpec {
        name: TOKEN_NAME,
        label: COLLECTION_TOKEN_NAME_LABEL,
        kind: FieldKind::Text,
        validate: validation::collection_token_name,
    },
    FieldSpec {
        name: TOKEN_TICKER,
        label: COLLECTION_TOKEN_TICKER_LABEL,
        kind: FieldKind::Text,
        validate: validation::collection_token_ticker,
    },
];

pub const CREATE_SFT_FIELDS: [FieldSpec; 8] = [
    FieldSpec {
        name: DISPLAY_NAME,
        label: SFT_TOKEN_DISPLAY_NAME_LABEL,
        kind: FieldKind::Text,
        validate: validation::required,
    },
    FieldSpec {
        name: SELLING_PRICE,
        label: SELLING_PRICE_LABEL,
        kind: FieldKind::Text,
        validate: validation::selling_price,
    },
    FieldSpec {
        name: METADATA_IPFS_CID,
        label: METADATA_IPFS_CID_LABEL,
        kind: FieldKind::Text,
        validate: validation::required,
    },
    FieldSpec {
        name: METADATA_IPFS_FILE_NAME,
        label: METADATA_IPFS_FILE_NAME_LABEL,
        kind: FieldKind::Text,
        validate: validation::required,
    },
    FieldSpec {
        name: INITIAL_SUPPLY,
        label: INITIAL_SFT_SUPPLY_LABEL,
        kind: FieldKind::Number { decimals: None },
        validate: validation::initial_supply,
    },
    FieldSpec {
        name: ROYALTIES,
        label: ROYALTIES_LABEL,
        kind: FieldKind::Number { decimals: Some(2) },
        validate: validation::royalties,
    },
    FieldSpec {
        name: TAGS,
        label: TAGS_LABEL,
        kind: FieldKind::Text,
        validate: validation::required,
    },
    FieldSpec {
        name: URIS,
        label: URIS_LABEL,
        kind: FieldKind::List,
        validate: validation::uri_list,
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct IssueCollectionArgs {
    pub token_name: String,
    pub token_ticker: String,
}

impl IssueCollectionArgs {
    pub fn from_answers(answers: &Answers) -> Result<Self> {
        Ok(Self {
            token_name: answers.text(TOKEN_NAME)?.to_string(),
            token_ticker: answers.text(TOKEN_TICKER)?.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSftArgs {
    pub display_name: String,
    /// As typed, in EGLD.
    pub selling_price: String,
    pub metadata_ipfs_cid: String,
    pub metadata_ipfs_file_name: String,
    pub initial_supply: u64,
    /// Percent; `None` when left empty.
    pub royalties: Option<f64>,
    pub tags: String,
    pub uris: Vec<String>,
}

impl CreateSftArgs {
    pub fn from_answers(answers: &Answers) -> Result<Self> {
        Ok(Self {
            display_name: answers.text(DISPLAY_NAME)?.to_string(),
            selling_price: answers.text(SELLING_PRICE)?.to_string(),
            metadata_ipfs_cid: answers.text(METADATA_IPFS_CID)?.to_string(),
            metadata_ipfs_file_name: answers.text(METADATA_IPFS_FILE_NAME)?.to_string(),
            initial_supply: answers.number(INITIAL_SUPPLY)? as u64,
            royalties: answers.optional_number(ROYALTIES)?,
            tags: answers.text(TAGS)?.to_string(),
            uris: answers.list(URIS)?.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FieldValue;
    use std::collections::HashSet;

    #[test]
    fn test_field_names_are_unique() {
        for fields in [&ISSUE_COLLECTION_FIELDS[..], &CREATE_SFT_FIELDS[..]] {
            let names: HashSet<_> = fields.iter().map(|f| f.name).collect();
            assert_eq!(names.len(), fields.len());
        }
    }

    #[test]
    fn test_create_args_from_answers() {
        let mut answers = Answers::default();
        answers.insert(DISPLAY_NAME, FieldValue::Text("Ticket".to_string()));
        answers.insert(SELLING_PRICE, FieldValue::Text("0.1".to_string()));
        answers.insert(METADATA_IPFS_CID, FieldValue::Text("bafy".to_string()));
        answers.insert(METADATA_IPFS_FILE_NAME, FieldValue::Text("meta.json".to_string()));
        answers.insert(INITIAL_SUPPLY, FieldValue::Number(1000.0));
        answers.insert(ROYALTIES, FieldValue::Omitted);
        answers.insert(TAGS, FieldValue::Text("art,sft".to_string()));
        answers.insert(URIS, FieldValue::List(vec!["ipfs://a".to_string()]));

        let args = CreateSftArgs::from_answers(&answers).unwrap();

        assert_eq!(args.initial_supply, 1000);
        assert_eq!(args.royalties, None);
        assert_eq!(args.uris, vec!["ipfs://a".to_string()]);
    }

    #[test]
    fn test_issue_args_require_both_answers() {
        let mut answers = Answers::default();
        answers.insert(TOKEN_NAME, FieldValue::Text("MyToken1".to_string()));

        assert!(IssueCollectionArgs::from_answers(&answers).is_err());
    }
}
