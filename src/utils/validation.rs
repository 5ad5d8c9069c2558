use crate::domain::model::{Balance, FieldValue};
use crate::utils::error::{MinterError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Outcome of a prompt field check; the error is shown to the operator.
pub type FieldCheck<T = ()> = std::result::Result<T, &'static str>;

const REQUIRED: &str = "Required!";

fn required_text(value: &FieldValue) -> FieldCheck<&str> {
    match value.as_text() {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(REQUIRED),
    }
}

pub fn required(value: &FieldValue) -> FieldCheck {
    required_text(value).map(|_| ())
}

pub fn collection_token_name(value: &FieldValue) -> FieldCheck {
    let name = required_text(value)?;
    if !(3..=20).contains(&name.chars().count()) {
        return Err("Length between 3 and 20 characters!");
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err("Alphanumeric characters only!");
    }
    Ok(())
}

pub fn collection_token_ticker(value: &FieldValue) -> FieldCheck {
    let ticker = required_text(value)?;
    if !(3..=10).contains(&ticker.chars().count()) {
        return Err("Length between 3 and 10 characters!");
    }
    if !ticker
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err("Alphanumeric UPPERCASE only!");
    }
    Ok(())
}

/// The price must convert to a positive on-chain amount, so more than 18
/// decimals or amounts past the `u128` range are rejected here.
pub fn selling_price(value: &FieldValue) -> FieldCheck {
    match value.as_text().map(Balance::from_egld) {
        Some(Ok(price)) if price > Balance::zero() => Ok(()),
        _ => Err("Required and greater than 0!"),
    }
}

pub fn initial_supply(value: &FieldValue) -> FieldCheck {
    // u64::MAX as f64 is 2^64, which already overflows.
    match value.as_number() {
        Some(supply) if supply >= 1.0 && supply.fract() == 0.0 && supply < u64::MAX as f64 => {
            Ok(())
        }
        _ => Err("Required whole number, min 1!"),
    }
}

pub fn royalties(value: &FieldValue) -> FieldCheck {
    match value {
        FieldValue::Omitted => Ok(()),
        FieldValue::Number(percent) if (0.0..=100.0).contains(percent) => Ok(()),
        _ => Err("Should be a number in range 0-100"),
    }
}

pub fn uri_list(value: &FieldValue) -> FieldCheck {
    match value.as_list() {
        Some(uris) if !uris.is_empty() => Ok(()),
        _ => Err("Requires at least one address!"),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MinterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MinterError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(MinterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(MinterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MinterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(MinterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}
