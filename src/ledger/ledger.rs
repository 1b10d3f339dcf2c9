use std::sync::Arc;

use rust_decimal::Decimal;

use super::{
    clock::{Clock, SystemClock},
    summary::{Report, Summary},
    transaction::{Transaction, TransactionKind},
};
use crate::errors::ValidationError;
use crate::form::Submission;

/// Append-only collection of the session's transactions.
#[derive(Debug, Clone)]
pub struct Ledger {
    entries: Vec<Transaction>,
    totals: Summary,
    clock: Arc<dyn Clock>,
}

/// Outcome of a successful submission: the new entry and the refreshed totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub transaction: Transaction,
    pub summary: Summary,
}

/// Selection criteria for [`Ledger::filter`]. Empty criteria match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    /// Strict lower bound on the amount.
    pub over: Option<Decimal>,
}

impl TransactionFilter {
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |kind| txn.kind() == kind)
            && self.over.map_or(true, |over| txn.amount() > over)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Vec::new(),
            totals: Summary::ZERO,
            clock,
        }
    }

    /// Validates and appends a movement, returning the updated totals.
    ///
    /// On rejection the entries are left untouched and the validation error is
    /// handed back as is.
    pub fn add_transaction(
        &mut self,
        kind: &str,
        amount: Decimal,
        description: &str,
    ) -> Result<Summary, ValidationError> {
        self.record(kind, amount, description)
            .map(|recorded| recorded.summary)
    }

    /// Entry point for raw form input: coerces the fields, then records.
    pub fn submit(&mut self, submission: &Submission) -> Result<Recorded, ValidationError> {
        let amount = match submission.amount() {
            Ok(amount) => amount,
            Err(err) => {
                tracing::warn!(error = ?err.kind(), "submission rejected");
                return Err(err);
            }
        };
        self.record(submission.kind(), amount, submission.description())
    }

    fn record(
        &mut self,
        kind: &str,
        amount: Decimal,
        description: &str,
    ) -> Result<Recorded, ValidationError> {
        let transaction =
            match Transaction::validate_with_clock(kind, amount, description, self.clock.as_ref())
            {
                Ok(transaction) => transaction,
                Err(err) => {
                    tracing::warn!(error = ?err.kind(), "submission rejected");
                    return Err(err);
                }
            };
        let Some(summary) = self.totals.with_entry(&transaction) else {
            tracing::warn!(
                amount = %transaction.amount(),
                "submission rejected: totals out of range"
            );
            return Err(ValidationError::InvalidAmount);
        };
        tracing::info!(
            id = %transaction.id(),
            kind = %transaction.kind(),
            amount = %transaction.amount(),
            "transaction recorded"
        );
        self.entries.push(transaction.clone());
        self.totals = summary;
        Ok(Recorded {
            transaction,
            summary,
        })
    }

    pub fn summary(&self) -> Summary {
        self.totals
    }

    pub fn report(&self) -> Report {
        Report::new(&self.entries, self.totals)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn descriptions(&self) -> Vec<&str> {
        self.entries.iter().map(Transaction::description).collect()
    }

    pub fn filter(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        self.entries
            .iter()
            .filter(|txn| filter.matches(txn))
            .collect()
    }
}
