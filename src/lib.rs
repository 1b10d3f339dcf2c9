#![doc(test(attr(deny(warnings))))]

//! Pocket Ledger records income and expense movements for a single session,
//! validates them on entry, and keeps running totals for display.

pub mod cli;
pub mod config;
pub mod errors;
pub mod form;
pub mod ledger;
pub mod render;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Pocket Ledger tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
