//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole system.
//!
//! The service task logs every request (`debug!`) and every mutation with the
//! resulting collection size (`info!`); store commands are wrapped in
//! `#[instrument]` spans, so a log line like `fetch_items: List size=8` shows
//! which command triggered which service operation.
//!
//! Levels are controlled through `RUST_LOG`:
//!
//! ```bash
//! # Mutations and lifecycle only
//! RUST_LOG=info cargo run
//!
//! # Full request payloads
//! RUST_LOG=debug cargo run
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add noise; the span names carry the context
        .compact()
        .init();
}
