use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::clock::{Clock, FixedClock};
use crate::errors::ValidationError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Parses user input into a kind.
    ///
    /// Accepts `income`/`expense` in any case and the menu shortcuts `1`/`2`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "income" | "1" => Some(TransactionKind::Income),
            "expense" | "2" => Some(TransactionKind::Expense),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single accepted movement. Only obtainable through [`Transaction::validate`],
/// so every instance satisfies the entry rules.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Transaction {
    id: Uuid,
    kind: TransactionKind,
    amount: Decimal,
    description: String,
    recorded_at: DateTime<Utc>,
}

impl Transaction {
    /// Checks the entry rules in order (amount, description, kind) and builds the
    /// transaction on success. The description is stored trimmed.
    pub fn validate(
        kind: &str,
        amount: Decimal,
        description: &str,
        recorded_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Self::validate_with_clock(kind, amount, description, &FixedClock(recorded_at))
    }

    /// Same rules as [`Transaction::validate`]; the clock is read only after every
    /// rule has passed.
    pub fn validate_with_clock(
        kind: &str,
        amount: Decimal,
        description: &str,
        clock: &dyn Clock,
    ) -> Result<Self, ValidationError> {
        let (kind, amount, description) = check(kind, amount, description)?;
        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            description,
            recorded_at: clock.now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Positive magnitude, regardless of kind.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Amount with the kind's sign applied: negative for expenses.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

fn check(
    kind: &str,
    amount: Decimal,
    description: &str,
) -> Result<(TransactionKind, Decimal, String), ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount);
    }
    let description = description.trim();
    if description.is_empty() {
        return Err(ValidationError::MissingDescription);
    }
    let kind = TransactionKind::parse(kind).ok_or(ValidationError::InvalidKind)?;
    Ok((kind, amount, description.to_string()))
}
