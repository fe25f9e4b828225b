//! In-memory todo gateway for tests and offline probes.
//!
//! # Responsibility
//! - Provide a deterministic `TodoGateway` with no network dependency.
//! - Support one-shot failure injection to exercise error boundaries.
//!
//! # Invariants
//! - Ids are monotonically increasing stringified integers, like upstream.
//! - An armed failure fires exactly once, on the next matching call.

use crate::gateway::{GatewayError, GatewayResult, TodoGateway, TodoItem};
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

/// Which operation the next injected failure should hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailNext {
    List,
    Create,
    Rename,
    Delete,
}

struct MemoryInner {
    items: Vec<TodoItem>,
    next_id: u64,
    armed_failures: Vec<FailNext>,
}

/// Deterministic in-process todo gateway.
pub struct InMemoryTodoGateway {
    inner: Mutex<MemoryInner>,
}

impl Default for InMemoryTodoGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTodoGateway {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MemoryInner {
                items: Vec::new(),
                next_id: 1,
                armed_failures: Vec::new(),
            }),
        }
    }

    /// Creates a gateway pre-seeded with one item per title.
    pub fn with_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let gateway = Self::new();
        {
            let mut inner = gateway.lock();
            for title in titles {
                let id = inner.next_id;
                inner.next_id += 1;
                inner.items.push(TodoItem {
                    id: id.to_string(),
                    title: title.into(),
                });
            }
        }
        gateway
    }

    /// Arms a one-shot failure for the next call of the given operation.
    pub fn fail_next(&self, operation: FailNext) {
        self.lock().armed_failures.push(operation);
    }

    /// Snapshot of the items currently held upstream.
    pub fn items(&self) -> Vec<TodoItem> {
        self.lock().items.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn take_failure(inner: &mut MemoryInner, operation: FailNext) -> GatewayResult<()> {
        if let Some(position) = inner
            .armed_failures
            .iter()
            .position(|armed| *armed == operation)
        {
            inner.armed_failures.remove(position);
            return Err(GatewayError::Http {
                status: 500,
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TodoGateway for InMemoryTodoGateway {
    async fn list(&self) -> GatewayResult<Vec<TodoItem>> {
        let mut inner = self.lock();
        Self::take_failure(&mut inner, FailNext::List)?;
        Ok(inner.items.clone())
    }

    async fn create(&self, title: &str) -> GatewayResult<TodoItem> {
        let mut inner = self.lock();
        Self::take_failure(&mut inner, FailNext::Create)?;
        let id = inner.next_id;
        inner.next_id += 1;
        let item = TodoItem {
            id: id.to_string(),
            title: title.to_string(),
        };
        inner.items.push(item.clone());
        Ok(item)
    }

    async fn rename(&self, id: &str, title: &str) -> GatewayResult<TodoItem> {
        let mut inner = self.lock();
        Self::take_failure(&mut inner, FailNext::Rename)?;
        let item = inner
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| GatewayError::Http {
                status: 404,
                message: format!("todo not found: {id}"),
            })?;
        item.title = title.to_string();
        Ok(item.clone())
    }

    async fn delete(&self, id: &str) -> GatewayResult<()> {
        let mut inner = self.lock();
        Self::take_failure(&mut inner, FailNext::Delete)?;
        let before = inner.items.len();
        inner.items.retain(|item| item.id != id);
        if inner.items.len() == before {
            return Err(GatewayError::Http {
                status: 404,
                message: format!("todo not found: {id}"),
            });
        }
        Ok(())
    }
}
