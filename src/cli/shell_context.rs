use crate::{
    config::{Config, ConfigManager},
    ledger::Ledger,
};

use super::{
    commands,
    core::{CommandError, LoopControl},
    output::{self, OutputPreferences},
    registry::CommandRegistry,
    shell::parse_command_line,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Session state: the one ledger, preferences, and the command table.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger: Ledger,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode, config_manager: ConfigManager) -> Self {
        let config = match config_manager.load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "falling back to default configuration");
                output::warning(format!("Could not read configuration: {err}"));
                Config::default()
            }
        };
        Self::with_parts(mode, Ledger::new(), config_manager, config)
    }

    pub fn with_parts(
        mode: CliMode,
        ledger: Ledger,
        config_manager: ConfigManager,
        config: Config,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        let context = Self {
            mode,
            registry,
            ledger,
            config_manager,
            config,
            running: true,
        };
        context.apply_output_preferences();
        context
    }

    pub fn apply_output_preferences(&self) {
        output::set_preferences(OutputPreferences {
            plain_mode: self.config.plain_mode,
        });
    }

    pub fn prompt(&self) -> String {
        format!("pocket-ledger [{}]> ", self.ledger.len())
    }

    pub fn is_script(&self) -> bool {
        self.mode == CliMode::Script
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        match self.dispatch(&command, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let handler = self
            .registry
            .handler(command)
            .ok_or_else(|| CommandError::UnknownCommand(command.to_string()))?;
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::UnknownCommand(ref name) => {
                output::error(&err);
                match self.registry.suggest(name) {
                    Some(suggestion) => output::hint(format!("Did you mean `{suggestion}`?")),
                    None => output::hint("Type `help` to list the available commands."),
                }
            }
            CommandError::InvalidArguments(_) | CommandError::Form(_) => {
                output::error(&err);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Core(_) => output::error(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn context(temp: &TempDir) -> ShellContext {
        let mut config = Config::default();
        config.plain_mode = true;
        ShellContext::with_parts(
            CliMode::Script,
            Ledger::new(),
            ConfigManager::with_base_dir(temp.path().to_path_buf()),
            config,
        )
    }

    #[test]
    fn add_then_failed_submit_keeps_balance() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp);
        ctx.process_line("add income 2000 Salary").unwrap();
        ctx.process_line("submit description= amount=50 type=expense")
            .unwrap();
        assert_eq!(ctx.ledger.len(), 1);
        assert_eq!(ctx.ledger.summary().balance, dec!(2000));
    }

    #[test]
    fn unknown_command_is_an_error_but_not_fatal() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp);
        let err = ctx.process_line("sumary").unwrap_err();
        assert!(matches!(err, CommandError::UnknownCommand(ref name) if name == "sumary"));
        assert_eq!(ctx.registry.suggest("sumary"), Some("summary"));
        assert!(ctx.running);
        assert!(ctx.is_script());
    }

    #[test]
    fn exit_stops_the_session() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp);
        assert_eq!(ctx.process_line("exit").unwrap(), LoopControl::Exit);
        assert!(!ctx.running);
    }

    #[test]
    fn blank_and_unbalanced_lines_are_ignored() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp);
        assert_eq!(ctx.process_line("   ").unwrap(), LoopControl::Continue);
        assert_eq!(
            ctx.process_line("add income 5 \"unterminated").unwrap(),
            LoopControl::Continue
        );
        assert!(ctx.ledger.is_empty());
    }
}
