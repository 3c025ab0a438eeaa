//! The store's async command layer.
//!
//! Each command couples one data-service call to a loading/error lifecycle:
//! set `loading`, await the backend, apply the matching transition. Commands
//! report their outcome as a `Result` so callers can branch on it (e.g. close
//! a form only on success), and they never leave `loading` set behind — every
//! failure path goes through [`Transition::SetError`], which clears it.

use std::mem;
use tracing::{debug, instrument};

use crate::model::{MenuItem, MenuItemDraft, MenuItemPatch};
use crate::service::{MenuApi, ServiceError};
use crate::store::state::MenuState;
use crate::store::transition::{reduce, Transition};

/// The state container the UI drives.
///
/// Owns a [`MenuState`] and the backend client it synchronizes against. The
/// backend is injected by the composition root, so tests can swap in a
/// [`MockApi`](crate::service::mock::MockApi) behind the same [`MenuApi`]
/// seam.
///
/// Commands are `&mut self`, so one store never has two calls in flight at
/// once. Overlapping commands across store clones would settle in response
/// order with the last one winning; nothing here sequences them.
pub struct MenuStore<A: MenuApi> {
    state: MenuState,
    api: A,
}

impl<A: MenuApi> MenuStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            state: MenuState::default(),
            api,
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// Whether the initial fetch should be issued (see [`MenuState::should_fetch`]).
    pub fn should_fetch(&self) -> bool {
        self.state.should_fetch()
    }

    fn apply(&mut self, transition: Transition) {
        self.state = reduce(mem::take(&mut self.state), transition);
    }

    fn fail(&mut self, error: ServiceError) -> Result<(), ServiceError> {
        self.apply(Transition::SetError(error.to_string()));
        Err(error)
    }

    /// Replaces `items` with the service's current collection.
    #[instrument(skip(self))]
    pub async fn fetch_items(&mut self) -> Result<(), ServiceError> {
        debug!("Fetching items");
        self.apply(Transition::SetLoading(true));
        match self.api.list().await {
            Ok(items) => {
                self.apply(Transition::SetItems(items));
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    /// Creates an item and appends the server-assigned record to `items`.
    ///
    /// The draft's fields are what the caller proposed; only the record that
    /// comes back carries a valid id.
    #[instrument(skip(self, draft))]
    pub async fn add_item(&mut self, draft: MenuItemDraft) -> Result<(), ServiceError> {
        debug!(name = %draft.name, "Adding item");
        self.apply(Transition::SetLoading(true));
        match self.api.create(draft).await {
            Ok(item) => {
                self.apply(Transition::AddItem(item));
                self.apply(Transition::SetLoading(false));
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    /// Patches an item and replaces it in `items` with the merged record.
    #[instrument(skip(self, patch))]
    pub async fn update_item(&mut self, id: u64, patch: MenuItemPatch) -> Result<(), ServiceError> {
        debug!(id, "Updating item");
        self.apply(Transition::SetLoading(true));
        match self.api.update(id, patch).await {
            Ok(item) => {
                self.apply(Transition::UpdateItem(item));
                self.apply(Transition::SetLoading(false));
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    /// Deletes an item and removes it from `items`.
    #[instrument(skip(self))]
    pub async fn delete_item(&mut self, id: u64) -> Result<(), ServiceError> {
        debug!(id, "Deleting item");
        self.apply(Transition::SetLoading(true));
        match self.api.delete(id).await {
            Ok(_removed) => {
                self.apply(Transition::DeleteItem(id));
                self.apply(Transition::SetLoading(false));
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    /// Moves the UI-focus pointer. Synchronous; no service call.
    pub fn set_selected_item(&mut self, item: Option<MenuItem>) {
        self.apply(Transition::SetSelectedItem(item));
    }
}
