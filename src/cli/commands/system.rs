use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
        CommandEntry::new("quit", "Exit the shell", "quit", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first().map(|name| name.to_lowercase()) {
        let entry = context
            .registry
            .get(&name)
            .ok_or(CommandError::UnknownCommand(name))?;
        output::section(entry.name);
        output::raw(entry.description);
        output::raw(format!("Usage: {}", entry.usage));
        return Ok(());
    }

    print_overview(&context.registry);
    Ok(())
}

fn print_overview(registry: &CommandRegistry) {
    output::section("Commands");
    let entries = registry.list();
    let width = entries
        .iter()
        .map(|entry| entry.usage.len())
        .max()
        .unwrap_or(0);
    for entry in entries {
        output::raw(format!(
            "  {:<width$}  {}",
            entry.usage,
            entry.description,
            width = width
        ));
    }
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
