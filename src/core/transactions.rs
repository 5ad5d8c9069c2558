use crate::config::constants::{
    CREATE_TOKEN_FUNCTION, ISSUE_TOKEN_FUNCTION, SET_LOCAL_ROLES_FUNCTION,
};
use crate::domain::model::{Balance, CallArg, ContractCall, SmartContract, TransactionPayload};

/// `issueToken(name, ticker)` paying the issue fee.
pub fn issue_collection_transaction(
    contract: &SmartContract,
    gas_limit: u64,
    value: Balance,
    token_name: &str,
    token_ticker: &str,
) -> TransactionPayload {
    let call = ContractCall::new(
        ISSUE_TOKEN_FUNCTION,
        vec![
            CallArg::utf8(token_name.trim()),
            CallArg::utf8(token_ticker.trim()),
        ],
    );
    contract.call(call, gas_limit, value)
}

/// `setLocalRoles()`. The contract grants itself the create role only.
pub fn assign_roles_transaction(contract: &SmartContract, gas_limit: u64) -> TransactionPayload {
    contract.call(
        ContractCall::new(SET_LOCAL_ROLES_FUNCTION, Vec::new()),
        gas_limit,
        Balance::zero(),
    )
}

/// `createToken(name, price, cid, file, supply, royalties, tags, uris...)`.
///
/// `selling_price` is already in the smallest denomination and `royalties`
/// is a percentage; it goes on chain in basis points.
#[allow(clippy::too_many_arguments)]
pub fn create_sft_transaction(
    contract: &SmartContract,
    gas_limit: u64,
    display_name: &str,
    selling_price: Balance,
    metadata_ipfs_cid: &str,
    metadata_ipfs_file_name: &str,
    initial_supply: u64,
    royalties: Option<f64>,
    tags: &str,
    uris: &[String],
) -> TransactionPayload {
    let royalties_bps = royalties.map(|percent| (percent * 100.0).round() as u128);

    let mut args = vec![
        CallArg::utf8(display_name.trim()),
        CallArg::BigUint(selling_price.0),
        CallArg::utf8(metadata_ipfs_cid.trim()),
        CallArg::utf8(metadata_ipfs_file_name.trim()),
        CallArg::BigUint(initial_supply.into()),
        // omitted and zero share the empty encoding
        CallArg::BigUint(royalties_bps.unwrap_or_default()),
        CallArg::utf8(tags.trim()),
    ];
    args.extend(uris.iter().map(|uri| CallArg::utf8(uri.trim())));

    contract.call(
        ContractCall::new(CREATE_TOKEN_FUNCTION, args),
        gas_limit,
        Balance::zero(),
    )
}
