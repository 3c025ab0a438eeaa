//! # Menu Admin Core
//!
//! The state-management core of a restaurant menu admin interface: a
//! reducer-driven state container synchronized against an in-memory mock
//! backend. The UI layer (tables, forms, navigation) renders from the store's
//! state and drives it through a small set of commands; everything below that
//! boundary lives here.
//!
//! ## Architecture
//!
//! Two collaborating pieces:
//!
//! - **[`store`]** — holds the canonical item list plus request-lifecycle
//!   flags (`loading`, `error`, `selected_item`). All mutation flows through
//!   a pure transition function ([`store::reduce`]); the async commands
//!   ([`store::MenuStore`]) couple each data-service call to the right
//!   transitions.
//! - **[`service`]** — the mock backend: one Tokio task owning the collection
//!   and the id counter, reached over a channel-backed client. The
//!   [`service::MenuApi`] trait is the seam where a real backend would plug
//!   in.
//!
//! Control flow for every command:
//!
//! ```text
//! UI trigger → store command → SetLoading(true) → service call
//!            → SetItems / AddItem / UpdateItem / DeleteItem  (on success)
//!            → SetError(message)                             (on failure)
//! ```
//!
//! Failure never leaves `loading` set and never panics the caller; commands
//! return a `Result` the UI branches on, and the error string lands in shared
//! state for rendering.
//!
//! ## Concurrency Model
//!
//! The service task processes requests sequentially, so its collection needs
//! no locks. The store takes `&mut self` for each command, so a single store
//! has at most one call in flight. There is deliberately no sequencing across
//! overlapping commands from multiple handles; a real backend would want a
//! per-item version token before relying on that.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod lifecycle;
pub mod model;
pub mod service;
pub mod store;
