//! notedesk library
//!
//! Persistence core for a desktop notes application: a SQLite-backed store
//! for notes and a singleton settings record, input validation ahead of every
//! write, and CSV export. The GUI shell lives outside this crate and consumes
//! these modules directly.

pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod validation;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for the embedding application.
///
/// Respects `RUST_LOG` when set; defaults to debug output for this crate
/// and info elsewhere. Call once at process start.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notedesk=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
