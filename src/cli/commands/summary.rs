use crate::cli::core::CommandResult;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::ledger::Summary;
use crate::render::{report_lines, SummaryView};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Show balance, income and expense totals",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "report",
            "Show movement count and totals by type",
            "report",
            cmd_report,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.ledger.summary();
    print_totals(context, &summary);
    Ok(())
}

fn cmd_report(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Report");
    for line in report_lines(&context.ledger.report(), &context.config) {
        output::raw(line);
    }
    Ok(())
}

pub(crate) fn print_totals(context: &ShellContext, summary: &Summary) {
    let view = SummaryView::from_summary(summary, &context.config);
    output::info(format!(
        "Balance: {} | Income: {} | Expense: {}",
        output::paint(view.balance_tone, &view.balance),
        view.income,
        view.expense
    ));
}
