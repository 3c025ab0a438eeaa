use tracing::{error, info};

use crate::service::{self, ApiClient, ApiLatency};
use crate::store::MenuStore;

/// The composition root for the menu admin core.
///
/// `MenuSystem` owns the two collaborating pieces: the mock data-service task
/// and the [`MenuStore`] wired to it. The service's backing collection and id
/// counter live inside the spawned task, not in process-wide state, so every
/// `MenuSystem` is fully isolated — tests can run several side by side.
///
/// # Example
///
/// ```ignore
/// let mut system = MenuSystem::new(ApiLatency::default());
/// system.store.fetch_items().await?;
/// // ... drive commands from the UI ...
/// system.shutdown().await?;
/// ```
pub struct MenuSystem {
    /// The state container the UI reads from and issues commands through.
    pub store: MenuStore<ApiClient>,

    /// Handle to the service task, used for graceful shutdown.
    handle: tokio::task::JoinHandle<()>,
}

impl MenuSystem {
    /// Spawns a seeded mock service and returns a store wired to it.
    pub fn new(latency: ApiLatency) -> Self {
        let (service, client) = service::new(latency);
        let handle = tokio::spawn(service.run());

        Self {
            store: MenuStore::new(client),
            handle,
        }
    }

    /// Gracefully shuts the system down.
    ///
    /// Dropping the store drops the last client, which closes the request
    /// channel; the service task notices and exits its loop. A panic inside
    /// the service task surfaces here as an error.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down menu system...");
        drop(self.store);

        if let Err(e) = self.handle.await {
            error!("Service task failed: {:?}", e);
            return Err(format!("Service task failed: {:?}", e));
        }

        info!("Menu system shutdown complete.");
        Ok(())
    }
}
