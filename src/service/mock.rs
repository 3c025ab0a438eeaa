//! # Mock Backend
//!
//! Utilities for testing the store in isolation.
//!
//! [`MockApi`] implements [`MenuApi`] from a queue of expectations, so store
//! tests can script success and failure responses without spinning up a
//! [`MenuService`](crate::service::MenuService) task.
//!
//! # Example
//! ```ignore
//! let mock = MockApi::new();
//! mock.expect_list().return_err(ServiceError::Transport("offline".into()));
//!
//! let mut store = MenuStore::new(mock.clone());
//! assert!(store.fetch_items().await.is_err());
//! mock.verify(); // Ensures all expectations were consumed
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::model::{MenuItem, MenuItemDraft, MenuItemPatch};
use crate::service::api::MenuApi;
use crate::service::error::ServiceError;

/// An expected request and the response it should produce.
enum Expectation {
    List(Result<Vec<MenuItem>, ServiceError>),
    Create(Result<MenuItem, ServiceError>),
    Update {
        id: u64,
        response: Result<MenuItem, ServiceError>,
    },
    Delete {
        id: u64,
        response: Result<MenuItem, ServiceError>,
    },
    Get {
        id: u64,
        response: Result<MenuItem, ServiceError>,
    },
}

impl Expectation {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::List(_) => "list",
            Expectation::Create(_) => "create",
            Expectation::Update { .. } => "update",
            Expectation::Delete { .. } => "delete",
            Expectation::Get { .. } => "get",
        }
    }
}

/// A scripted [`MenuApi`] implementation with expectation tracking.
///
/// Clones share the same queue: hand one clone to the store and keep another
/// to call [`MockApi::verify`] at the end of the test.
#[derive(Clone, Default)]
pub struct MockApi {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl MockApi {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `list` operation.
    pub fn expect_list(&self) -> ExpectationBuilder<'_, Vec<MenuItem>> {
        ExpectationBuilder {
            mock: self,
            wrap: Box::new(Expectation::List),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&self) -> ExpectationBuilder<'_, MenuItem> {
        ExpectationBuilder {
            mock: self,
            wrap: Box::new(Expectation::Create),
        }
    }

    /// Expects an `update` of the given id.
    pub fn expect_update(&self, id: u64) -> ExpectationBuilder<'_, MenuItem> {
        ExpectationBuilder {
            mock: self,
            wrap: Box::new(move |response| Expectation::Update { id, response }),
        }
    }

    /// Expects a `delete` of the given id.
    pub fn expect_delete(&self, id: u64) -> ExpectationBuilder<'_, MenuItem> {
        ExpectationBuilder {
            mock: self,
            wrap: Box::new(move |response| Expectation::Delete { id, response }),
        }
    }

    /// Expects a `get` of the given id.
    pub fn expect_get(&self, id: u64) -> ExpectationBuilder<'_, MenuItem> {
        ExpectationBuilder {
            mock: self,
            wrap: Box::new(move |response| Expectation::Get { id, response }),
        }
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn next(&self, requested: &str) -> Expectation {
        let mut exps = self.expectations.lock().unwrap();
        match exps.pop_front() {
            Some(exp) => exp,
            None => panic!("Unexpected {} request: no expectations queued", requested),
        }
    }
}

/// Builder that attaches a response to a queued expectation.
pub struct ExpectationBuilder<'a, T> {
    mock: &'a MockApi,
    wrap: Box<dyn FnOnce(Result<T, ServiceError>) -> Expectation>,
}

impl<T> ExpectationBuilder<'_, T> {
    /// Queues a successful response.
    pub fn return_ok(self, value: T) {
        let Self { mock, wrap } = self;
        mock.expectations.lock().unwrap().push_back(wrap(Ok(value)));
    }

    /// Queues a failure response.
    pub fn return_err(self, error: ServiceError) {
        let Self { mock, wrap } = self;
        mock.expectations.lock().unwrap().push_back(wrap(Err(error)));
    }
}

#[async_trait]
impl MenuApi for MockApi {
    async fn list(&self) -> Result<Vec<MenuItem>, ServiceError> {
        match self.next("list") {
            Expectation::List(response) => response,
            other => panic!("Expected {} request, got list", other.kind()),
        }
    }

    async fn create(&self, _draft: MenuItemDraft) -> Result<MenuItem, ServiceError> {
        match self.next("create") {
            Expectation::Create(response) => response,
            other => panic!("Expected {} request, got create", other.kind()),
        }
    }

    async fn update(&self, id: u64, _patch: MenuItemPatch) -> Result<MenuItem, ServiceError> {
        match self.next("update") {
            Expectation::Update {
                id: expected,
                response,
            } => {
                assert_eq!(expected, id, "update id mismatch");
                response
            }
            other => panic!("Expected {} request, got update", other.kind()),
        }
    }

    async fn delete(&self, id: u64) -> Result<MenuItem, ServiceError> {
        match self.next("delete") {
            Expectation::Delete {
                id: expected,
                response,
            } => {
                assert_eq!(expected, id, "delete id mismatch");
                response
            }
            other => panic!("Expected {} request, got delete", other.kind()),
        }
    }

    async fn get(&self, id: u64) -> Result<MenuItem, ServiceError> {
        match self.next("get") {
            Expectation::Get {
                id: expected,
                response,
            } => {
                assert_eq!(expected, id, "get id mismatch");
                response
            }
            other => panic!("Expected {} request, got get", other.kind()),
        }
    }
}
