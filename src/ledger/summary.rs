use rust_decimal::Decimal;
use serde::Serialize;

use super::transaction::{Transaction, TransactionKind};

/// Running totals derived from the ledger entries.
///
/// Values are exact sums of the stored amounts; rounding to two decimals only
/// happens when rendering.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
}

impl Summary {
    pub const ZERO: Summary = Summary {
        total_income: Decimal::ZERO,
        total_expense: Decimal::ZERO,
        balance: Decimal::ZERO,
    };

    /// Totals after adding `txn`, or `None` when a total would leave the
    /// representable `Decimal` range.
    pub fn with_entry(&self, txn: &Transaction) -> Option<Self> {
        let (total_income, total_expense) = match txn.kind() {
            TransactionKind::Income => (
                self.total_income.checked_add(txn.amount())?,
                self.total_expense,
            ),
            TransactionKind::Expense => (
                self.total_income,
                self.total_expense.checked_add(txn.amount())?,
            ),
        };
        Some(Self {
            total_income,
            total_expense,
            balance: total_income.checked_sub(total_expense)?,
        })
    }

    /// Single pass over `entries`. `None` on overflow.
    pub fn from_entries(entries: &[Transaction]) -> Option<Self> {
        entries
            .iter()
            .try_fold(Self::ZERO, |summary, txn| summary.with_entry(txn))
    }
}

/// End-of-session overview: how many movements were recorded and their totals.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct Report {
    pub movements: usize,
    pub income_count: usize,
    pub expense_count: usize,
    pub summary: Summary,
}

impl Report {
    /// Counts `entries` by kind; `summary` must be their totals.
    pub fn new(entries: &[Transaction], summary: Summary) -> Self {
        let income_count = entries.iter().filter(|txn| txn.is_income()).count();
        Self {
            movements: entries.len(),
            income_count,
            expense_count: entries.len() - income_count,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn txn(kind: &str, amount: Decimal) -> Transaction {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Transaction::validate(kind, amount, "entry", at).unwrap()
    }

    #[test]
    fn empty_entries_sum_to_zero() {
        assert_eq!(Summary::from_entries(&[]), Some(Summary::ZERO));
        assert_eq!(Report::new(&[], Summary::ZERO).movements, 0);
    }

    #[test]
    fn decimal_accumulation_does_not_drift() {
        let entries = vec![txn("income", dec!(0.1)), txn("income", dec!(0.2))];
        assert_eq!(Summary::from_entries(&entries).unwrap().total_income, dec!(0.3));
    }

    #[test]
    fn balance_can_go_negative() {
        let entries = vec![txn("income", dec!(10)), txn("expense", dec!(25.5))];
        let summary = Summary::from_entries(&entries).unwrap();
        assert_eq!(summary.balance, dec!(-15.5));
    }

    #[test]
    fn report_counts_each_kind() {
        let entries = vec![
            txn("income", dec!(10)),
            txn("expense", dec!(2)),
            txn("expense", dec!(3)),
        ];
        let report = Report::new(&entries, Summary::from_entries(&entries).unwrap());
        assert_eq!(report.movements, 3);
        assert_eq!(report.income_count, 1);
        assert_eq!(report.expense_count, 2);
        assert_eq!(report.summary.total_expense, dec!(5));
    }

    #[test]
    fn totals_past_the_decimal_range_are_refused() {
        let big = txn("income", Decimal::MAX);
        let once = Summary::ZERO.with_entry(&big).unwrap();
        assert_eq!(once.balance, Decimal::MAX);
        assert_eq!(once.with_entry(&big), None);
        assert_eq!(Summary::from_entries(&[big.clone(), big]), None);
    }

    #[test]
    fn full_range_income_and_expense_still_balance() {
        let entries = vec![txn("income", Decimal::MAX), txn("expense", Decimal::MAX)];
        assert_eq!(Summary::from_entries(&entries).unwrap().balance, Decimal::ZERO);
    }
}
