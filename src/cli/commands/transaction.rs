use std::str::FromStr;

use rust_decimal::Decimal;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::form::Submission;
use crate::ledger::{Transaction, TransactionFilter, TransactionKind};
use crate::render::{transactions_table, TransactionRow};

use super::summary::print_totals;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record a movement",
            "add <income|expense> <amount> <description...>",
            cmd_add,
        ),
        CommandEntry::new(
            "submit",
            "Record a movement from form fields",
            "submit description=<text> amount=<number> type=<income|expense>",
            cmd_submit,
        ),
        CommandEntry::new("list", "Show all movements", "list", cmd_list),
        CommandEntry::new(
            "filter",
            "Show movements by type and minimum amount",
            "filter [income|expense] [--over <amount>]",
            cmd_filter,
        ),
        CommandEntry::new(
            "names",
            "List movement descriptions in order",
            "names",
            cmd_names,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "Usage: add <income|expense> <amount> <description...>".into(),
        ));
    }
    let description = args.get(2..).map(|words| words.join(" "));
    let submission = Submission {
        kind: args.first().map(|kind| kind.to_string()),
        amount: args.get(1).map(|amount| amount.to_string()),
        description,
    };
    record(context, &submission);
    Ok(())
}

fn cmd_submit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let submission = Submission::from_pairs(args.iter().copied())?;
    record(context, &submission);
    Ok(())
}

/// Validation failures are reported to the user; they never abort the command.
fn record(context: &mut ShellContext, submission: &Submission) {
    match context.ledger.submit(submission) {
        Ok(recorded) => {
            let row = TransactionRow::from_transaction(&recorded.transaction, &context.config);
            output::success(format!(
                "Movement recorded: {} {} ({})",
                row.description,
                output::paint(row.tone, &row.amount),
                row.kind
            ));
            print_totals(context, &recorded.summary);
        }
        Err(err) => output::error(err.message()),
    }
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let entries: Vec<&Transaction> = context.ledger.entries().iter().collect();
    print_table(context, &entries, "No movements recorded yet.");
    Ok(())
}

fn cmd_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let filter = parse_filter(args)?;
    let matches = context.ledger.filter(&filter);
    print_table(context, &matches, "No movements match the filter.");
    Ok(())
}

fn cmd_names(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let names = context.ledger.descriptions();
    if names.is_empty() {
        output::info("No movements recorded yet.");
        return Ok(());
    }
    for (idx, name) in names.iter().enumerate() {
        output::raw(format!("{}. {}", idx + 1, name));
    }
    Ok(())
}

fn print_table(context: &ShellContext, entries: &[&Transaction], empty_message: &str) {
    if entries.is_empty() {
        output::info(empty_message);
        return;
    }
    let rows: Vec<TransactionRow> = entries
        .iter()
        .map(|txn| TransactionRow::from_transaction(txn, &context.config))
        .collect();
    let table = transactions_table(&rows, context.config.plain_mode, output::paint);
    output::raw(table.render());
}

pub(crate) fn parse_filter(args: &[&str]) -> Result<TransactionFilter, CommandError> {
    let mut filter = TransactionFilter::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if *arg == "--over" {
            let raw = iter.next().ok_or_else(|| {
                CommandError::InvalidArguments("`--over` needs an amount".into())
            })?;
            let over = Decimal::from_str(raw.trim()).map_err(|_| {
                CommandError::InvalidArguments(format!("`{raw}` is not a valid amount"))
            })?;
            filter.over = Some(over);
        } else if filter.kind.is_none() {
            let kind = TransactionKind::parse(arg).ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "`{arg}` is not a movement type (use income or expense)"
                ))
            })?;
            filter.kind = Some(kind);
        } else {
            return Err(CommandError::InvalidArguments(format!(
                "unexpected argument `{arg}`"
            )));
        }
    }
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn filter_arguments_in_any_order() {
        let filter = parse_filter(&["--over", "100", "expense"]).unwrap();
        assert_eq!(filter.kind, Some(TransactionKind::Expense));
        assert_eq!(filter.over, Some(dec!(100)));
        assert_eq!(parse_filter(&[]).unwrap(), TransactionFilter::default());
    }

    #[test]
    fn filter_rejects_bad_input() {
        assert!(parse_filter(&["--over"]).is_err());
        assert!(parse_filter(&["--over", "lots"]).is_err());
        assert!(parse_filter(&["transfer"]).is_err());
        assert!(parse_filter(&["income", "expense"]).is_err());
    }
}
