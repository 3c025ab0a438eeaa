//! Runtime orchestration: wiring the store to the service task and setting up
//! observability.
//!
//! # Main Components
//!
//! - [`MenuSystem`] - spawns the mock service and hands out the wired store
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use system::*;
