//! Display-ready views of ledger data. Everything here is pure: callers decide
//! where the text goes and how tones are coloured.

pub mod table;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::Config;
use crate::ledger::{Report, Summary, Transaction, TransactionKind};

pub use table::{Alignment, Table, TableColumn};

const DESCRIPTION_MAX_WIDTH: usize = 40;

/// Colour hint for a value: income green, expense red.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    fn of(value: Decimal) -> Self {
        if value.is_zero() {
            Tone::Neutral
        } else if value.is_sign_negative() {
            Tone::Negative
        } else {
            Tone::Positive
        }
    }
}

/// Rounds half away from zero to two places.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `$1234.50`, `-$12.30`. Rounding happens here and nowhere earlier.
pub fn format_currency(value: Decimal, config: &Config) -> String {
    let rounded = round_currency(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{}{:.2}", config.currency_symbol, rounded.abs())
}

/// Like [`format_currency`] but always carries a sign: `+$100.00`, `-$40.00`.
pub fn format_signed(value: Decimal, config: &Config) -> String {
    let text = format_currency(value, config);
    if text.starts_with('-') {
        text
    } else {
        format!("+{text}")
    }
}

/// One table row for a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub description: String,
    pub amount: String,
    pub recorded_at: String,
    pub kind: &'static str,
    pub tone: Tone,
}

impl TransactionRow {
    pub fn from_transaction(txn: &Transaction, config: &Config) -> Self {
        Self {
            description: txn.description().to_string(),
            amount: format_signed(txn.signed_amount(), config),
            recorded_at: txn
                .recorded_at()
                .format(&config.timestamp_format)
                .to_string(),
            kind: txn.kind().label(),
            tone: match txn.kind() {
                TransactionKind::Income => Tone::Positive,
                TransactionKind::Expense => Tone::Negative,
            },
        }
    }
}

/// The three headline totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub balance: String,
    pub income: String,
    pub expense: String,
    pub balance_tone: Tone,
}

impl SummaryView {
    pub fn from_summary(summary: &Summary, config: &Config) -> Self {
        Self {
            balance: format_currency(summary.balance, config),
            income: format_currency(summary.total_income, config),
            expense: format_currency(summary.total_expense, config),
            balance_tone: Tone::of(round_currency(summary.balance)),
        }
    }
}

/// Builds the transactions table. `paint` styles a cell for its tone; pass a
/// function returning the text unchanged for uncoloured output.
pub fn transactions_table<F>(rows: &[TransactionRow], plain: bool, paint: F) -> Table
where
    F: Fn(Tone, &str) -> String,
{
    let mut table = Table::new(vec![
        TableColumn::new("#", Alignment::Right),
        TableColumn::new("Description", Alignment::Left).max_width(DESCRIPTION_MAX_WIDTH),
        TableColumn::new("Amount", Alignment::Right),
        TableColumn::new("Recorded", Alignment::Left),
        TableColumn::new("Type", Alignment::Left),
    ]);
    table.plain = plain;
    table.rows = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            vec![
                (idx + 1).to_string(),
                row.description.clone(),
                paint(row.tone, &row.amount),
                row.recorded_at.clone(),
                paint(row.tone, row.kind),
            ]
        })
        .collect();
    table
}

/// End-of-session summary lines.
pub fn report_lines(report: &Report, config: &Config) -> Vec<String> {
    let summary = &report.summary;
    vec![
        format!("Movements recorded: {}", report.movements),
        format!("Balance: {}", format_currency(summary.balance, config)),
        format!(
            "Income ({}): {}",
            report.income_count,
            format_currency(summary.total_income, config)
        ),
        format!(
            "Expenses ({}): {}",
            report.expense_count,
            format_currency(summary.total_expense, config)
        ),
    ]
}
