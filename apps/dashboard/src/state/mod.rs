//! # State Module
//!
//! Session state for the dashboard.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────────────────────────┐                      │
//! │          │             bizdesk::run              │                      │
//! │          │  config = ConfigState::load(..)       │                      │
//! │          │  store  = StoreState::from_config(..) │                      │
//! │          └──────────────────┬───────────────────┘                      │
//! │                  ┌──────────┴──────────┐                                │
//! │                  ▼                     ▼                                │
//! │  ┌──────────────────────────┐  ┌──────────────────────┐                │
//! │  │       StoreState         │  │     ConfigState      │                │
//! │  │  Arc<Mutex<RecordStore>> │  │  currency_symbol     │                │
//! │  │                          │  │  top_companies_limit │                │
//! │  └──────────────────────────┘  └──────────────────────┘                │
//! │                                                                         │
//! │  Commands take `&StoreState` / `&ConfigState` explicitly; there is no  │
//! │  global store.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;

pub use config::{ConfigError, ConfigResult, ConfigState, CONFIG_PATH_VAR};
pub use store::StoreState;
