//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store transforms and gateway calls into operation-level
//!   APIs for the view layer.
//! - Keep callers decoupled from wire and locking details.

pub mod column_service;
pub mod hydration;
pub mod task_service;
