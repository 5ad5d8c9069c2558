use crate::config::constants::ARE_YOU_SURE_LABEL;
use crate::domain::model::FieldValue;
use crate::domain::ports::Prompter;
use crate::utils::error::{MinterError, Result};
use crate::utils::validation::FieldCheck;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Numeric input rounded to `decimals` places. Empty input is `Omitted`.
    Number { decimals: Option<u32> },
    /// Comma separated list.
    List,
}

#[derive(Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub validate: fn(&FieldValue) -> FieldCheck,
}

/// Validated answers keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers(HashMap<&'static str, FieldValue>);

impl Answers {
    pub fn insert(&mut self, name: &'static str, value: FieldValue) {
        self.0.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Result<&FieldValue> {
        self.0.get(name).ok_or_else(|| MinterError::PromptError {
            message: format!("no answer collected for '{}'", name),
        })
    }

    pub fn text(&self, name: &str) -> Result<&str> {
        self.get(name)?
            .as_text()
            .ok_or_else(|| Self::wrong_kind(name, "text"))
    }

    pub fn number(&self, name: &str) -> Result<f64> {
        self.get(name)?
            .as_number()
            .ok_or_else(|| Self::wrong_kind(name, "number"))
    }

    /// `None` when the operator skipped an optional number.
    pub fn optional_number(&self, name: &str) -> Result<Option<f64>> {
        match self.get(name)? {
            FieldValue::Omitted => Ok(None),
            FieldValue::Number(number) => Ok(Some(*number)),
            _ => Err(Self::wrong_kind(name, "number")),
        }
    }

    pub fn list(&self, name: &str) -> Result<&[String]> {
        self.get(name)?
            .as_list()
            .ok_or_else(|| Self::wrong_kind(name, "list"))
    }

    fn wrong_kind(name: &str, expected: &str) -> MinterError {
        MinterError::PromptError {
            message: format!("answer for '{}' is not a {}", name, expected),
        }
    }
}

/// Turns raw input into a value of `kind`; `Err` carries the operator message.
pub fn parse_input(kind: FieldKind, raw: &str) -> FieldCheck<FieldValue> {
    match kind {
        FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
        FieldKind::Number { decimals } => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(FieldValue::Omitted);
            }
            let number: f64 = trimmed.parse().map_err(|_| "Not a number!")?;
            if !number.is_finite() {
                return Err("Not a number!");
            }
            Ok(FieldValue::Number(match decimals {
                Some(places) => {
                    let factor = 10f64.powi(places as i32);
                    (number * factor).round() / factor
                }
                None => number,
            }))
        }
        FieldKind::List => Ok(FieldValue::List(
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        )),
    }
}

/// Asks every field in order, re-asking until its check passes.
///
/// Returns `None` when input ends before all fields are answered.
pub fn collect<P: Prompter>(prompter: &mut P, fields: &[FieldSpec]) -> Result<Option<Answers>> {
    let mut answers = Answers::default();

    for field in fields {
        let value = loop {
            let Some(raw) = prompter.ask(field.label)? else {
                tracing::debug!("Input ended while asking for '{}'", field.name);
                return Ok(None);
            };

            match parse_input(field.kind, &raw).and_then(|value| (field.validate)(&value).map(|_| value)) {
                Ok(value) => break value,
                Err(message) => {
                    tracing::debug!("Rejected '{}': {}", field.name, message);
                    prompter.reject(message)?;
                }
            }
        };
        answers.insert(field.name, value);
    }

    Ok(Some(answers))
}

/// The final gate before anything touches the network. Only `y`/`yes` passes.
pub fn confirm<P: Prompter>(prompter: &mut P) -> Result<bool> {
    let answer = prompter.ask(ARE_YOU_SURE_LABEL)?;
    Ok(matches!(
        answer.as_deref().map(|a| a.trim().to_ascii_lowercase()).as_deref(),
        Some("y") | Some("yes")
    ))
}
