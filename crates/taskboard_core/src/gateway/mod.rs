//! Remote todo gateway contracts and implementations.
//!
//! # Responsibility
//! - Define the capability surface the core consumes from the upstream todo
//!   service: list, create, rename, delete of flat items.
//! - Keep wire/transport details inside the gateway boundary.
//!
//! # Invariants
//! - The upstream service has no notion of columns, colors or board
//!   structure; it only mints ids and mirrors single-item title changes.
//! - Gateway failures are semantic errors for the caller to absorb; nothing
//!   in this module panics on upstream misbehavior.

use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod http;
mod memory;

pub use http::{GatewayConfig, HttpTodoGateway};
pub use memory::{FailNext, InMemoryTodoGateway};

pub type GatewayResult<T> = Result<T, GatewayError>;

/// One flat item as seen at the gateway boundary.
///
/// Ids are stringified here; the upstream wire uses integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: String,
    pub title: String,
}

/// Errors from gateway operations.
#[derive(Debug)]
pub enum GatewayError {
    /// Upstream answered with a non-success status.
    Http { status: u16, message: String },
    /// Transport-level failure (connect, timeout, body read).
    Network(reqwest::Error),
    /// Upstream answered success but the payload was not usable.
    InvalidResponse(String),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http { status, message } => {
                write!(f, "gateway returned status {status}: {message}")
            }
            Self::Network(err) => write!(f, "gateway request failed: {err}"),
            Self::InvalidResponse(message) => {
                write!(f, "gateway response was not usable: {message}")
            }
        }
    }
}

impl Error for GatewayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Network(err) => Some(err),
            Self::Http { .. } | Self::InvalidResponse(_) => None,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value)
    }
}

/// Capability surface of the remote todo service.
///
/// # Contract
/// - `list` is consumed once at hydration; there is no later reconciliation.
/// - `create`/`rename`/`delete` are best-effort single-item mirrors; the
///   board drifts from upstream state by design after hydration.
#[async_trait]
pub trait TodoGateway: Send + Sync {
    async fn list(&self) -> GatewayResult<Vec<TodoItem>>;
    async fn create(&self, title: &str) -> GatewayResult<TodoItem>;
    async fn rename(&self, id: &str, title: &str) -> GatewayResult<TodoItem>;
    async fn delete(&self, id: &str) -> GatewayResult<()>;
}
