use crate::domain::ports::{NetworkProvider, TransactionSigner};
use crate::utils::error::{MinterError, Result};
use base64::Engine;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub const ADDRESS_HRP: &str = "erd";
const ADDRESS_LENGTH: usize = 62;
const PUBLIC_KEY_LENGTH: usize = 32;

/// Smallest-unit digits of one EGLD.
pub const DENOMINATION: u32 = 18;

/// A bech32 account or contract address (`erd1...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        let invalid = |reason: &str| MinterError::AddressError {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        if !value.starts_with("erd1") {
            return Err(invalid("expected an erd1 prefix"));
        }
        if value.len() != ADDRESS_LENGTH {
            return Err(invalid("expected 62 characters"));
        }

        // Checksum, alphabet and payload size.
        let (hrp, data) =
            bech32::decode(value).map_err(|e| invalid(&format!("not valid bech32: {}", e)))?;
        if hrp.to_lowercase() != ADDRESS_HRP {
            return Err(invalid("expected the erd human readable part"));
        }
        if data.len() != PUBLIC_KEY_LENGTH {
            return Err(invalid("expected a 32-byte public key"));
        }

        Ok(Self(value.to_string()))
    }

    /// The `erd1...` address of an ed25519 public key.
    pub fn from_public_key(public_key: &[u8; PUBLIC_KEY_LENGTH]) -> Result<Self> {
        let hrp = bech32::Hrp::parse(ADDRESS_HRP).map_err(|e| MinterError::AddressError {
            value: ADDRESS_HRP.to_string(),
            reason: e.to_string(),
        })?;
        let encoded = bech32::encode::<bech32::Bech32>(hrp, public_key).map_err(|e| {
            MinterError::AddressError {
                value: hex::encode(public_key),
                reason: e.to_string(),
            }
        })?;
        Ok(Self(encoded))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Address {
    type Error = MinterError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Amount in the smallest denomination. Serialized as a decimal string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Balance(pub u128);

impl Balance {
    pub fn zero() -> Self {
        Self(0)
    }

    /// Converts a human amount such as `0.05` into the smallest denomination.
    ///
    /// Plain decimals convert exactly and may carry at most 18 significant
    /// decimals. Other notations `f64` understands (`1e-3`) are scaled as
    /// floats; a positive amount that rounds to zero units is rejected.
    pub fn from_egld(amount: &str) -> Result<Self> {
        let amount = amount.trim();
        let invalid = |reason: &str| MinterError::InvalidConfigValueError {
            field: "amount".to_string(),
            value: amount.to_string(),
            reason: reason.to_string(),
        };

        if Self::is_plain_decimal(amount) {
            return Self::parse_decimal(amount).map_err(invalid);
        }

        let value: f64 = amount
            .parse()
            .map_err(|_| invalid("not a non-negative number"))?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid("not a non-negative number"));
        }

        let units = (value * 10f64.powi(DENOMINATION as i32)).round();
        // u128::MAX as f64 rounds up to 2^128, the first value that does not fit.
        if units >= u128::MAX as f64 {
            return Err(invalid("larger than the largest representable amount"));
        }
        if value > 0.0 && units == 0.0 {
            return Err(invalid("smaller than the smallest denomination"));
        }
        Ok(Self(units as u128))
    }

    fn is_plain_decimal(amount: &str) -> bool {
        amount.chars().any(|c| c.is_ascii_digit())
            && amount.chars().all(|c| c.is_ascii_digit() || c == '.')
            && amount.matches('.').count() <= 1
    }

    fn parse_decimal(amount: &str) -> std::result::Result<Self, &'static str> {
        let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));
        // Trailing zeros add no precision.
        let fraction = fraction.trim_end_matches('0');
        if fraction.len() > DENOMINATION as usize {
            return Err("more than 18 decimals");
        }

        let too_large = "larger than the largest representable amount";
        let unit = 10u128.pow(DENOMINATION);
        let whole: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| too_large)?
        };
        let padded = format!("{:0<width$}", fraction, width = DENOMINATION as usize);
        let fraction: u128 = padded.parse().map_err(|_| too_large)?;

        whole
            .checked_mul(unit)
            .and_then(|units| units.checked_add(fraction))
            .map(Self)
            .ok_or(too_large)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Balance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

/// A validated answer from the prompt engine.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    /// An optional number left empty by the operator.
    Omitted,
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// A positional smart-contract call argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArg {
    Bytes(Vec<u8>),
    BigUint(u128),
}

impl CallArg {
    pub fn utf8(text: &str) -> Self {
        CallArg::Bytes(text.as_bytes().to_vec())
    }

    /// Top-level encoding: raw bytes for buffers, minimal big-endian for
    /// integers (zero is the empty argument).
    pub fn to_hex(&self) -> String {
        match self {
            CallArg::Bytes(bytes) => hex::encode(bytes),
            CallArg::BigUint(value) => {
                let bytes = value.to_be_bytes();
                let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
                hex::encode(&bytes[first..])
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub function: String,
    pub args: Vec<CallArg>,
}

impl ContractCall {
    pub fn new(function: &str, args: Vec<CallArg>) -> Self {
        Self {
            function: function.to_string(),
            args,
        }
    }

    /// `function@arg@arg...`
    pub fn encode(&self) -> String {
        std::iter::once(self.function.clone())
            .chain(self.args.iter().map(CallArg::to_hex))
            .collect::<Vec<_>>()
            .join("@")
    }
}

/// The deployed SFT minter contract, bound to a network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartContract {
    pub address: Address,
    pub chain_id: String,
    pub gas_price: u64,
}

impl SmartContract {
    pub fn call(
        &self,
        call: ContractCall,
        gas_limit: u64,
        value: Balance,
    ) -> TransactionPayload {
        TransactionPayload {
            receiver: self.address.clone(),
            value,
            gas_limit,
            gas_price: self.gas_price,
            chain_id: self.chain_id.clone(),
            version: TRANSACTION_VERSION,
            call,
        }
    }
}

pub const TRANSACTION_VERSION: u32 = 1;

/// A built but unsigned contract call transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionPayload {
    pub receiver: Address,
    pub value: Balance,
    pub gas_limit: u64,
    pub gas_price: u64,
    pub chain_id: String,
    pub version: u32,
    pub call: ContractCall,
}

impl TransactionPayload {
    pub fn into_transaction(self, sender: Address, nonce: u64) -> Transaction {
        Transaction {
            nonce,
            value: self.value,
            receiver: self.receiver,
            sender,
            gas_price: self.gas_price,
            gas_limit: self.gas_limit,
            data: Some(base64::engine::general_purpose::STANDARD.encode(self.call.encode())),
            chain_id: self.chain_id,
            version: self.version,
            signature: None,
        }
    }
}

/// Wire form of a transaction. Field order is the signing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub nonce: u64,
    pub value: Balance,
    pub receiver: Address,
    pub sender: Address,
    pub gas_price: u64,
    pub gas_limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(rename = "chainID")]
    pub chain_id: String,
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl Transaction {
    /// Bytes covered by the signature: the JSON form without `signature`.
    pub fn serialize_for_signing(&self) -> Result<Vec<u8>> {
        let unsigned = Transaction {
            signature: None,
            ..self.clone()
        };
        Ok(serde_json::to_vec(&unsigned)?)
    }

    pub fn decoded_data(&self) -> Option<String> {
        let data = self.data.as_ref()?;
        let bytes = base64::engine::general_purpose::STANDARD.decode(data).ok()?;
        String::from_utf8(bytes).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxHash(pub String);

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionStatus(pub String);

impl TransactionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self.0.as_str(), "pending" | "received" | "partially-executed")
    }

    pub fn is_successful(&self) -> bool {
        matches!(self.0.as_str(), "success" | "successful" | "executed")
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct TransactionOutcome {
    pub hash: TxHash,
    pub status: TransactionStatus,
    pub confirmed_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub address: Address,
    pub nonce: u64,
}

impl Account {
    pub fn increment_nonce(&mut self) {
        self.nonce += 1;
    }
}

/// Everything one flow needs to reach the contract.
pub struct Session {
    pub contract: SmartContract,
    pub account: Account,
    pub signer: Box<dyn TransactionSigner>,
    pub provider: Box<dyn NetworkProvider>,
    pub explorer_url: String,
}

impl Session {
    pub fn transaction_link(&self, hash: &TxHash) -> String {
        format!("{}/transactions/{}", self.explorer_url.trim_end_matches('/'), hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th";

    #[test]
    fn test_address_parse() {
        assert!(Address::parse(ALICE).is_ok());
        assert!(Address::parse("").is_err());
        assert!(Address::parse("erd1short").is_err());
        assert!(Address::parse(&ALICE.replace("erd1", "xyz1")).is_err());
        assert!(Address::parse(&ALICE.replacen('q', "b", 1)).is_err());
    }

    #[test]
    fn test_address_parse_checks_the_checksum() {
        // last character changed, alphabet and length still valid
        let corrupted = format!("{}q", &ALICE[..ALICE.len() - 1]);
        assert!(matches!(
            Address::parse(&corrupted),
            Err(MinterError::AddressError { .. })
        ));
    }

    #[test]
    fn test_address_from_public_key() {
        let public_key = ed25519_dalek::SigningKey::from_bytes(&[42u8; 32]).verifying_key();
        let address = Address::from_public_key(public_key.as_bytes()).unwrap();

        assert_eq!(
            address.as_str(),
            "erd1r9lkkglpdjzn934tequ04n2757ymurrkk2fqxdqrn0agk0fk34ssa608ln"
        );
        assert_eq!(Address::parse(address.as_str()).unwrap(), address);
    }

    #[test]
    fn test_balance_from_egld() {
        assert_eq!(Balance::from_egld("0.05").unwrap(), Balance(50_000_000_000_000_000));
        assert_eq!(Balance::from_egld("1").unwrap(), Balance(1_000_000_000_000_000_000));
        assert_eq!(Balance::from_egld(".5").unwrap(), Balance(500_000_000_000_000_000));
        assert_eq!(Balance::from_egld("1e-3").unwrap(), Balance(1_000_000_000_000_000));
        assert_eq!(Balance::from_egld("0.000000000000000001").unwrap(), Balance(1));
        assert_eq!(Balance::from_egld("2.50000000000000000000").unwrap(), Balance(2_500_000_000_000_000_000));
        assert!(Balance::from_egld("abc").is_err());
        assert!(Balance::from_egld("-1").is_err());
        assert!(Balance::from_egld(".").is_err());
        assert!(Balance::from_egld("1.2.3").is_err());
    }

    #[test]
    fn test_balance_rejects_sub_unit_amounts() {
        assert!(Balance::from_egld("0.0000000000000000001").is_err());
        assert!(Balance::from_egld("1.0000000000000000001").is_err());
        assert!(Balance::from_egld("1e-19").is_err());
        assert_eq!(Balance::from_egld("0").unwrap(), Balance::zero());
    }

    #[test]
    fn test_balance_rejects_amounts_beyond_u128() {
        // u128::MAX / 10^18 is about 3.4e20 whole units
        assert!(Balance::from_egld("340282366920938463463").is_ok());
        assert!(Balance::from_egld("340282366920938463464").is_err());
        assert!(Balance::from_egld("1000000000000000000000").is_err());
        assert!(Balance::from_egld("1e21").is_err());
        assert!(Balance::from_egld("1e300").is_err());
    }

    #[test]
    fn test_call_arg_encoding() {
        assert_eq!(CallArg::utf8("MyToken1").to_hex(), "4d79546f6b656e31");
        assert_eq!(CallArg::BigUint(0).to_hex(), "");
        assert_eq!(CallArg::BigUint(1000).to_hex(), "03e8");
        assert_eq!(
            ContractCall::new("issueToken", vec![CallArg::utf8("AB"), CallArg::BigUint(1)]).encode(),
            "issueToken@4142@01"
        );
    }

    #[test]
    fn test_signing_bytes_skip_signature_and_keep_field_order() {
        let contract = SmartContract {
            address: Address::parse(ALICE).unwrap(),
            chain_id: "D".to_string(),
            gas_price: 1_000_000_000,
        };
        let payload = contract.call(ContractCall::new("setLocalRoles", vec![]), 60_000_000, Balance::zero());
        let mut tx = payload.into_transaction(Address::parse(ALICE).unwrap(), 7);
        tx.signature = Some("00".to_string());

        let bytes = tx.serialize_for_signing().unwrap();
        let json = String::from_utf8(bytes).unwrap();

        assert!(json.starts_with(r#"{"nonce":7,"value":"0","receiver":""#));
        assert!(json.contains(r#""gasPrice":1000000000,"gasLimit":60000000,"data":"c2V0TG9jYWxSb2xlcw==","chainID":"D","version":1}"#));
        assert!(!json.contains("signature"));
        assert_eq!(tx.decoded_data().as_deref(), Some("setLocalRoles"));
    }
}
