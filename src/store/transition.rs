//! The store's pure state-update step.
//!
//! Every mutation of [`MenuState`] goes through [`reduce`], a pure function
//! from the previous state and a [`Transition`] to the next state. The async
//! command layer in [`commands`](crate::store::commands) decides *which*
//! transitions to apply; this module only knows *how* each one changes state.

use crate::model::MenuItem;
use crate::store::state::MenuState;

/// A named state update.
#[derive(Debug, Clone)]
pub enum Transition {
    /// Replace the `loading` flag.
    SetLoading(bool),
    /// Replace the whole collection; clears `loading` and `error`.
    SetItems(Vec<MenuItem>),
    /// Append one item to the collection.
    AddItem(MenuItem),
    /// Replace the element with the same id; no-op if absent.
    UpdateItem(MenuItem),
    /// Remove the element with the given id; no-op if absent.
    DeleteItem(u64),
    /// Replace `error`; clears `loading`.
    SetError(String),
    /// Replace the UI-focus pointer.
    SetSelectedItem(Option<MenuItem>),
}

/// Applies one transition, returning the next state.
pub fn reduce(state: MenuState, transition: Transition) -> MenuState {
    match transition {
        Transition::SetLoading(loading) => MenuState { loading, ..state },
        Transition::SetItems(items) => MenuState {
            items,
            loading: false,
            error: None,
            ..state
        },
        Transition::AddItem(item) => {
            let mut items = state.items;
            items.push(item);
            MenuState { items, ..state }
        }
        Transition::UpdateItem(updated) => {
            let items = state
                .items
                .into_iter()
                .map(|item| if item.id == updated.id { updated.clone() } else { item })
                .collect();
            MenuState { items, ..state }
        }
        Transition::DeleteItem(id) => {
            let items = state
                .items
                .into_iter()
                .filter(|item| item.id != id)
                .collect();
            MenuState { items, ..state }
        }
        Transition::SetError(error) => MenuState {
            error: Some(error),
            loading: false,
            ..state
        },
        Transition::SetSelectedItem(selected_item) => MenuState {
            selected_item,
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, ItemStatus};

    fn sample(id: u64, name: &str) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            category: Category::Lunch,
            description: String::new(),
            price: 10.0,
            image: String::new(),
            status: ItemStatus::Active,
        }
    }

    fn state_with(items: Vec<MenuItem>) -> MenuState {
        MenuState {
            items,
            ..MenuState::default()
        }
    }

    #[test]
    fn set_items_clears_loading_and_error() {
        let state = MenuState {
            loading: true,
            error: Some("boom".into()),
            ..MenuState::default()
        };

        let next = reduce(state, Transition::SetItems(vec![sample(1, "Soup")]));

        assert_eq!(next.items.len(), 1);
        assert!(!next.loading);
        assert_eq!(next.error, None);
    }

    #[test]
    fn set_error_clears_loading_but_keeps_items() {
        let state = MenuState {
            loading: true,
            ..state_with(vec![sample(1, "Soup")])
        };

        let next = reduce(state, Transition::SetError("boom".into()));

        assert!(!next.loading);
        assert_eq!(next.error.as_deref(), Some("boom"));
        assert_eq!(next.items.len(), 1);
    }

    #[test]
    fn add_item_appends() {
        let next = reduce(
            state_with(vec![sample(1, "Soup")]),
            Transition::AddItem(sample(2, "Stew")),
        );
        assert_eq!(next.items.len(), 2);
        assert_eq!(next.items[1].name, "Stew");
    }

    #[test]
    fn update_item_replaces_matching_id_only() {
        let state = state_with(vec![sample(1, "Soup"), sample(2, "Stew")]);

        let next = reduce(state, Transition::UpdateItem(sample(2, "Goulash")));

        assert_eq!(next.items[0].name, "Soup");
        assert_eq!(next.items[1].name, "Goulash");
    }

    #[test]
    fn update_item_with_unknown_id_is_a_no_op() {
        let state = state_with(vec![sample(1, "Soup")]);
        let next = reduce(state.clone(), Transition::UpdateItem(sample(9, "Ghost")));
        assert_eq!(next, state);
    }

    #[test]
    fn delete_item_removes_matching_id() {
        let state = state_with(vec![sample(1, "Soup"), sample(2, "Stew")]);
        let next = reduce(state, Transition::DeleteItem(1));
        assert_eq!(next.items.len(), 1);
        assert_eq!(next.items[0].id, 2);
    }

    #[test]
    fn delete_item_with_unknown_id_is_a_no_op() {
        let state = state_with(vec![sample(1, "Soup")]);
        let next = reduce(state.clone(), Transition::DeleteItem(9));
        assert_eq!(next, state);
    }

    #[test]
    fn set_selected_item_round_trips() {
        let next = reduce(
            MenuState::default(),
            Transition::SetSelectedItem(Some(sample(1, "Soup"))),
        );
        assert_eq!(next.selected_item.as_ref().map(|i| i.id), Some(1));

        let cleared = reduce(next, Transition::SetSelectedItem(None));
        assert_eq!(cleared.selected_item, None);
    }

    #[test]
    fn set_loading_touches_nothing_else() {
        let state = state_with(vec![sample(1, "Soup")]);
        let next = reduce(state, Transition::SetLoading(true));
        assert!(next.loading);
        assert_eq!(next.items.len(), 1);
        assert_eq!(next.error, None);
    }
}
