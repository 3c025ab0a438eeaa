//! The client-side state container: shared state, the pure transition
//! function that is the only way to change it, and the async commands that
//! couple data-service calls to transitions.

pub mod commands;
pub mod state;
pub mod transition;

pub use commands::MenuStore;
pub use state::MenuState;
pub use transition::{reduce, Transition};
