use std::sync::Arc;

use assert_cmd::Command;
use chrono::{TimeZone, Utc};
use pocket_ledger::ledger::{FixedClock, Ledger};
use tempfile::TempDir;

/// Ledger whose timestamps are pinned to 2024-06-01 10:00 UTC.
#[allow(dead_code)]
pub fn fixed_ledger() -> Ledger {
    let at = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
    Ledger::with_clock(Arc::new(FixedClock(at)))
}

/// CLI command in script mode with its own preferences directory.
#[allow(dead_code)]
pub fn script_cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pocket_ledger_cli").unwrap();
    cmd.env("POCKET_LEDGER_CLI_SCRIPT", "1")
        .env("POCKET_LEDGER_HOME", home.path())
        .env("RUST_LOG", "off");
    cmd
}
