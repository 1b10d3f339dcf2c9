//! Raw form input and its coercion into typed values.
//!
//! Fields arrive as optional strings. A missing field behaves like an empty one,
//! so it fails the rule that checks it: amount → `InvalidAmount`,
//! description → `MissingDescription`, kind → `InvalidKind`.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::errors::ValidationError;

/// Untyped field values as collected from the entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub kind: Option<String>,
}

/// Problems with the shape of `key=value` input, before any validation happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("expected `key=value`, got `{0}`")]
    Malformed(String),
    #[error("unknown field `{0}` (expected description, amount or type)")]
    UnknownField(String),
}

impl Submission {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            description: Some(description.into()),
            amount: Some(amount.into()),
            kind: Some(kind.into()),
        }
    }

    /// Builds a submission from `key=value` tokens. `type` and `kind` are aliases;
    /// a repeated key keeps its last value.
    pub fn from_pairs<'a, I>(tokens: I) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut submission = Submission::default();
        for token in tokens {
            let (key, value) = token
                .split_once('=')
                .ok_or_else(|| FormError::Malformed(token.to_string()))?;
            let slot = match key.trim().to_ascii_lowercase().as_str() {
                "description" => &mut submission.description,
                "amount" => &mut submission.amount,
                "type" | "kind" => &mut submission.kind,
                other => return Err(FormError::UnknownField(other.to_string())),
            };
            *slot = Some(value.to_string());
        }
        Ok(submission)
    }

    /// Parses the amount field. Anything that is not a number is `InvalidAmount`;
    /// the sign check itself happens during validation.
    pub fn amount(&self) -> Result<Decimal, ValidationError> {
        let raw = self.amount.as_deref().unwrap_or("").trim();
        parse_amount(raw).ok_or(ValidationError::InvalidAmount)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or("")
    }
}

/// Digits must survive parsing as typed: `_` separators and more than 28
/// decimal places are refused instead of being dropped or rounded away.
fn parse_amount(raw: &str) -> Option<Decimal> {
    if raw.is_empty() || raw.contains('_') {
        return None;
    }
    if raw.contains(['e', 'E']) {
        return Decimal::from_scientific(raw).ok();
    }
    Decimal::from_str_exact(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amount_parses_plain_and_scientific_numbers() {
        assert_eq!(Submission::new("x", " 2000 ", "income").amount(), Ok(dec!(2000)));
        assert_eq!(Submission::new("x", "0.01", "income").amount(), Ok(dec!(0.01)));
        assert_eq!(Submission::new("x", "1e3", "income").amount(), Ok(dec!(1000)));
    }

    #[test]
    fn malformed_or_missing_amount_is_invalid() {
        for raw in [
            "abc",
            "",
            "   ",
            "12,50",
            "$5",
            "1_000",
            "0.00000000000000000000000000000001",
        ] {
            assert_eq!(
                Submission::new("x", raw, "income").amount(),
                Err(ValidationError::InvalidAmount),
                "input {raw:?}"
            );
        }
        let missing = Submission {
            amount: None,
            ..Submission::new("x", "1", "income")
        };
        assert_eq!(missing.amount(), Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn missing_text_fields_read_as_empty() {
        let submission = Submission::default();
        assert_eq!(submission.description(), "");
        assert_eq!(submission.kind(), "");
    }

    #[test]
    fn pairs_fill_fields_with_aliases() {
        let submission =
            Submission::from_pairs(["description=Salary", "amount=2000", "type=income"]).unwrap();
        assert_eq!(submission, Submission::new("Salary", "2000", "income"));

        let submission = Submission::from_pairs(["kind=expense", "description="]).unwrap();
        assert_eq!(submission.kind.as_deref(), Some("expense"));
        assert_eq!(submission.description.as_deref(), Some(""));
        assert_eq!(submission.amount, None);
    }

    #[test]
    fn pairs_reject_unknown_or_malformed_tokens() {
        assert_eq!(
            Submission::from_pairs(["category=food"]),
            Err(FormError::UnknownField("category".into()))
        );
        assert_eq!(
            Submission::from_pairs(["amount"]),
            Err(FormError::Malformed("amount".into()))
        );
    }
}
