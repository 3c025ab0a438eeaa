//! Pure data structures for the menu domain: the [`MenuItem`] entity and the
//! DTOs used to create and update it.

pub mod menu_item;

pub use menu_item::*;
