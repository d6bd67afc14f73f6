//! # Bizdesk Entry Point
//!
//! Loads the configured books and prints the dashboard summary as JSON.
//!
//! ```bash
//! bizdesk                                  # demo books, $ amounts
//! BIZDESK_CURRENCY_SYMBOL=€ bizdesk        # euro formatting
//! BIZDESK_CONFIG=./bizdesk.toml bizdesk    # settings from a file
//! RUST_LOG=debug bizdesk                   # verbose logs on stderr
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match bizdesk_app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bizdesk: {}", e);
            ExitCode::FAILURE
        }
    }
}
