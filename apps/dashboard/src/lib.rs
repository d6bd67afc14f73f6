//! # bizdesk-app: Dashboard Session Layer
//!
//! Wires configuration, the shared record store and the commands the
//! dashboard UI calls.
//!
//! ## Module Organization
//! ```text
//! bizdesk_app/
//! ├── lib.rs          ◄─── You are here (startup & logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Shared record store
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/       ◄─── Company / expense / invoice / dashboard / export
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, StoreState};

/// Runs the `bizdesk` binary: prints the dashboard of the configured books.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info, debug for bizdesk crates; RUST_LOG overrides       │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → BIZDESK_CONFIG file → BIZDESK_* variables              │
/// │                                                                         │
/// │  3. Initialize Store ─────────────────────────────────────────────────► │
/// │     • demo books or empty, per seed_mock_data                           │
/// │                                                                         │
/// │  4. Print Dashboard ──────────────────────────────────────────────────► │
/// │     • get_dashboard as pretty JSON on stdout                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Bizdesk");

    let config = ConfigState::load(None)?;
    info!(
        currency = %config.currency_symbol,
        top_companies = config.top_companies_limit,
        seeded = config.seed_mock_data,
        "Configuration loaded"
    );

    let store = StoreState::from_config(&config);
    store.with_store(|s| {
        for (kind, count) in s.counts() {
            info!(%kind, count, "Store ready");
        }
    });

    let dashboard = commands::dashboard::get_dashboard(&store, &config);
    println!("{}", serde_json::to_string_pretty(&dashboard)?);

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bizdesk_store=trace` - Trace the store only
/// - Default: `info`, `debug` for the bizdesk crates
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,bizdesk_core=debug,bizdesk_store=debug,bizdesk_app=debug")
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
