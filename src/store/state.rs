use crate::model::MenuItem;

/// Shared state the UI renders from.
///
/// `items` mirrors the data service's collection after the last successful
/// fetch or mutation. `loading` and `error` track the lifecycle of the most
/// recent command; `selected_item` is a UI-focus pointer with no business
/// meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuState {
    pub items: Vec<MenuItem>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_item: Option<MenuItem>,
}

impl MenuState {
    /// Whether an initial fetch should be issued: nothing loaded yet, no
    /// fetch outstanding, and no failure waiting to be shown.
    pub fn should_fetch(&self) -> bool {
        self.items.is_empty() && !self.loading && self.error.is_none()
    }
}
