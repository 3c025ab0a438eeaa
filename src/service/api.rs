//! # Mock Data Service
//!
//! An in-memory stand-in for the menu backend. The service runs as a single
//! Tokio task that owns the collection and the id counter; callers talk to it
//! through [`ApiClient`], which implements the [`MenuApi`] contract any real
//! backend must satisfy.
//!
//! ## Key Types
//!
//! - [`MenuApi`]: The five-operation backend contract (list/create/update/delete/get).
//! - [`MenuService`]: The task that owns the backing collection.
//! - [`ApiClient`]: The channel-backed client handed to the store.
//! - [`ApiLatency`]: Per-operation artificial delays emulating network round-trips.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::model::{ItemStatus, MenuItem, MenuItemDraft, MenuItemPatch};
use crate::service::error::ServiceError;

// =============================================================================
// 1. THE BACKEND CONTRACT
// =============================================================================

/// The contract between the store and whatever backend serves menu data.
///
/// The store only ever calls these five operations, so any real backend that
/// implements them with the same success/failure semantics is a drop-in
/// replacement for the mock.
#[async_trait]
pub trait MenuApi: Send + Sync {
    /// Returns the full current collection.
    async fn list(&self) -> Result<Vec<MenuItem>, ServiceError>;

    /// Stores a new item, assigning its id; returns the stored record.
    async fn create(&self, draft: MenuItemDraft) -> Result<MenuItem, ServiceError>;

    /// Shallow-merges `patch` onto the record with `id`; returns the merged record.
    async fn update(&self, id: u64, patch: MenuItemPatch) -> Result<MenuItem, ServiceError>;

    /// Removes the record with `id`; returns the removed record.
    async fn delete(&self, id: u64) -> Result<MenuItem, ServiceError>;

    /// Returns the record with `id`.
    async fn get(&self, id: u64) -> Result<MenuItem, ServiceError>;
}

// =============================================================================
// 2. MESSAGES & LATENCY
// =============================================================================

/// One-shot reply channel carried by every request.
pub type ApiResponse<T> = oneshot::Sender<Result<T, ServiceError>>;

/// Requests the client sends to the service task.
#[derive(Debug)]
pub enum ApiRequest {
    List {
        respond_to: ApiResponse<Vec<MenuItem>>,
    },
    Create {
        draft: MenuItemDraft,
        respond_to: ApiResponse<MenuItem>,
    },
    Update {
        id: u64,
        patch: MenuItemPatch,
        respond_to: ApiResponse<MenuItem>,
    },
    Delete {
        id: u64,
        respond_to: ApiResponse<MenuItem>,
    },
    Get {
        id: u64,
        respond_to: ApiResponse<MenuItem>,
    },
}

/// Artificial per-operation delay emulating network round-trips.
///
/// Only the presence and ordering of the delays matter; the values copy the
/// original backend stub. Use [`ApiLatency::none`] in tests.
#[derive(Debug, Clone, Copy)]
pub struct ApiLatency {
    pub list: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
    pub get: Duration,
}

impl Default for ApiLatency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(300),
            create: Duration::from_millis(500),
            update: Duration::from_millis(500),
            delete: Duration::from_millis(300),
            get: Duration::from_millis(200),
        }
    }
}

impl ApiLatency {
    /// Zero delay everywhere, so tests settle without timers.
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
            get: Duration::ZERO,
        }
    }
}

// =============================================================================
// 3. THE SERVICE TASK
// =============================================================================

/// The in-memory service that owns the menu collection.
///
/// The task processes requests sequentially, so the collection and the id
/// counter need no locking. Ids are assigned from a counter initialized to
/// `seed.len() + 1` and never reused, even after deletions.
pub struct MenuService {
    receiver: mpsc::Receiver<ApiRequest>,
    items: Vec<MenuItem>,
    next_id: u64,
    latency: ApiLatency,
}

impl MenuService {
    pub fn new(
        buffer_size: usize,
        seed: Vec<MenuItem>,
        latency: ApiLatency,
    ) -> (Self, ApiClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let next_id = seed.len() as u64 + 1;
        let service = Self {
            receiver,
            items: seed,
            next_id,
            latency,
        };
        (service, ApiClient::new(sender))
    }

    /// Runs the service loop, processing requests until every client is dropped.
    pub async fn run(mut self) {
        info!(size = self.items.len(), "Menu service started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ApiRequest::List { respond_to } => {
                    sleep(self.latency.list).await;
                    debug!(size = self.items.len(), "List");
                    let _ = respond_to.send(Ok(self.items.clone()));
                }
                ApiRequest::Create { draft, respond_to } => {
                    sleep(self.latency.create).await;
                    debug!(?draft, "Create");
                    let item = self.insert(draft);
                    info!(id = item.id, size = self.items.len(), "Created");
                    let _ = respond_to.send(Ok(item));
                }
                ApiRequest::Update {
                    id,
                    patch,
                    respond_to,
                } => {
                    sleep(self.latency.update).await;
                    debug!(id, ?patch, "Update");
                    match self.items.iter_mut().find(|item| item.id == id) {
                        Some(item) => {
                            merge(item, patch);
                            info!(id, "Updated");
                            let _ = respond_to.send(Ok(item.clone()));
                        }
                        None => {
                            warn!(id, "Not found");
                            let _ = respond_to.send(Err(ServiceError::NotFound(id)));
                        }
                    }
                }
                ApiRequest::Delete { id, respond_to } => {
                    sleep(self.latency.delete).await;
                    debug!(id, "Delete");
                    match self.items.iter().position(|item| item.id == id) {
                        Some(index) => {
                            let removed = self.items.remove(index);
                            info!(id, size = self.items.len(), "Deleted");
                            let _ = respond_to.send(Ok(removed));
                        }
                        None => {
                            warn!(id, "Not found");
                            let _ = respond_to.send(Err(ServiceError::NotFound(id)));
                        }
                    }
                }
                ApiRequest::Get { id, respond_to } => {
                    sleep(self.latency.get).await;
                    let item = self.items.iter().find(|item| item.id == id).cloned();
                    debug!(id, found = item.is_some(), "Get");
                    let _ = respond_to.send(item.ok_or(ServiceError::NotFound(id)));
                }
            }
        }

        info!(size = self.items.len(), "Menu service shutdown");
    }

    fn insert(&mut self, draft: MenuItemDraft) -> MenuItem {
        let item = MenuItem {
            id: self.next_id,
            name: draft.name,
            category: draft.category,
            description: draft.description,
            price: draft.price,
            image: draft.image,
            status: draft.status.unwrap_or(ItemStatus::Active),
        };
        self.next_id += 1;
        self.items.push(item.clone());
        item
    }
}

/// Shallow merge: fields present in the patch overwrite, absent fields are
/// retained. The id is never touched.
fn merge(item: &mut MenuItem, patch: MenuItemPatch) {
    if let Some(name) = patch.name {
        item.name = name;
    }
    if let Some(category) = patch.category {
        item.category = category;
    }
    if let Some(description) = patch.description {
        item.description = description;
    }
    if let Some(price) = patch.price {
        item.price = price;
    }
    if let Some(image) = patch.image {
        item.image = image;
    }
    if let Some(status) = patch.status {
        item.status = status;
    }
}

// =============================================================================
// 4. THE CLIENT
// =============================================================================

/// Channel-backed handle to a running [`MenuService`].
///
/// Cloning is cheap; all clones feed the same service task. Dropping every
/// clone closes the channel and ends the service loop.
#[derive(Clone)]
pub struct ApiClient {
    sender: mpsc::Sender<ApiRequest>,
}

impl ApiClient {
    pub fn new(sender: mpsc::Sender<ApiRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(ApiResponse<T>) -> ApiRequest,
    ) -> Result<T, ServiceError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ServiceError::Transport("service channel closed".into()))?;
        response
            .await
            .map_err(|_| ServiceError::Transport("service dropped the response".into()))?
    }
}

#[async_trait]
impl MenuApi for ApiClient {
    async fn list(&self) -> Result<Vec<MenuItem>, ServiceError> {
        self.request(|respond_to| ApiRequest::List { respond_to }).await
    }

    async fn create(&self, draft: MenuItemDraft) -> Result<MenuItem, ServiceError> {
        self.request(|respond_to| ApiRequest::Create { draft, respond_to })
            .await
    }

    async fn update(&self, id: u64, patch: MenuItemPatch) -> Result<MenuItem, ServiceError> {
        self.request(|respond_to| ApiRequest::Update {
            id,
            patch,
            respond_to,
        })
        .await
    }

    async fn delete(&self, id: u64) -> Result<MenuItem, ServiceError> {
        self.request(|respond_to| ApiRequest::Delete { id, respond_to })
            .await
    }

    async fn get(&self, id: u64) -> Result<MenuItem, ServiceError> {
        self.request(|respond_to| ApiRequest::Get { id, respond_to })
            .await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::service::seed::seed_items;

    fn draft(name: &str) -> MenuItemDraft {
        MenuItemDraft {
            name: name.to_string(),
            category: Category::FastFood,
            description: String::new(),
            price: 5.0,
            image: String::new(),
            status: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids_across_deletes() {
        let (service, client) = MenuService::new(10, seed_items(), ApiLatency::none());
        tokio::spawn(service.run());

        let first = client.create(draft("Taco")).await.unwrap();
        assert_eq!(first.id, 9);

        client.delete(first.id).await.unwrap();

        // Deleted ids are never reused.
        let second = client.create(draft("Burrito")).await.unwrap();
        assert_eq!(second.id, 10);
    }

    #[tokio::test]
    async fn update_merges_only_present_fields() {
        let (service, client) = MenuService::new(10, seed_items(), ApiLatency::none());
        tokio::spawn(service.run());

        let before = client.get(3).await.unwrap();
        let merged = client
            .update(3, MenuItemPatch::status(ItemStatus::Active))
            .await
            .unwrap();

        assert_eq!(merged.status, ItemStatus::Active);
        assert_eq!(merged.name, before.name);
        assert_eq!(merged.category, before.category);
        assert_eq!(merged.price, before.price);
        assert_eq!(merged.image, before.image);
    }

    #[tokio::test]
    async fn missing_ids_fail_without_mutating() {
        let (service, client) = MenuService::new(10, seed_items(), ApiLatency::none());
        tokio::spawn(service.run());

        assert_eq!(
            client.update(999, MenuItemPatch::default()).await,
            Err(ServiceError::NotFound(999))
        );
        assert_eq!(client.delete(999).await, Err(ServiceError::NotFound(999)));
        assert_eq!(client.get(999).await, Err(ServiceError::NotFound(999)));

        assert_eq!(client.list().await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn dropped_service_reports_transport_failure() {
        let (service, client) = MenuService::new(10, seed_items(), ApiLatency::none());
        drop(service);

        match client.list().await {
            Err(ServiceError::Transport(_)) => {}
            other => panic!("expected transport failure, got {:?}", other),
        }
    }
}
