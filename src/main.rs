//! Demo driving the menu admin core end to end: fetch the seeded menu, add an
//! item, toggle a status, delete, and shut down.
//!
//! Run with `RUST_LOG=info cargo run` to watch the service and store traces.

use menu_admin::lifecycle::{setup_tracing, MenuSystem};
use menu_admin::model::{coerce_price, Category, ItemStatus, MenuItemDraft, MenuItemPatch};
use menu_admin::service::ApiLatency;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let mut system = MenuSystem::new(ApiLatency::default());
    let store = &mut system.store;

    if store.should_fetch() {
        store.fetch_items().await?;
    }
    println!("Fetched {} menu items", store.state().items.len());

    // Add a new dish the way the form would submit it: price as raw text.
    let draft = MenuItemDraft {
        name: "Taco".to_string(),
        category: Category::FastFood,
        description: "Crispy shell with seasoned beef".to_string(),
        price: coerce_price("5.50"),
        image: String::new(),
        status: None,
    };
    store.add_item(draft).await?;
    let added_id = store.state().items.last().expect("just added").id;
    println!("Added 'Taco' with id {}", added_id);

    // Item 3 is seeded inactive; flip it live.
    store
        .update_item(3, MenuItemPatch::status(ItemStatus::Active))
        .await?;
    println!("Activated item 3");

    // Deleting a missing id fails without touching the collection.
    if store.delete_item(999).await.is_err() {
        println!(
            "Delete of missing id rejected: {}",
            store.state().error.as_deref().unwrap_or_default()
        );
    }

    store.delete_item(added_id).await?;
    println!("{} items remaining", store.state().items.len());

    system.shutdown().await?;
    Ok(())
}
