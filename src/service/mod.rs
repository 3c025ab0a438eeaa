//! The data-service layer: the in-memory mock backend, its client, and the
//! [`MenuApi`] contract a real backend would implement instead.

pub mod api;
pub mod error;
pub mod mock;
pub mod seed;

pub use api::*;
pub use error::*;
pub use seed::seed_items;

/// Creates a seeded mock service and its client.
pub fn new(latency: ApiLatency) -> (MenuService, ApiClient) {
    MenuService::new(32, seed_items(), latency)
}
