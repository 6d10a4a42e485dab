//! Rehnuma — deterministic bilingual (English/Urdu) medical intake and
//! triage engine. Hard-coded clinical rules drive question sequencing,
//! answer validation, emergency screening, and triage; an external LLM
//! summarizer is consulted only after the deterministic pipeline has
//! ruled, and only as an advisory narrative layer.

pub mod catalog;
pub mod config;
pub mod intake;
pub mod models;
pub mod safety;
pub mod summarizer;
pub mod triage;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for embedding applications. Respects `RUST_LOG`,
/// falling back to the crate default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
    tracing::info!(app = config::APP_NAME, "Tracing initialized");
}
