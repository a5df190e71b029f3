//! # taskdeck
//!
//! A minimal task-management HTTP API backed by in-memory storage.
//!
//! This library provides:
//! - An HTTP API for creating, listing, updating and deleting tasks
//! - An in-memory task store with pagination and input validation
//!
//! ## Request Flow
//! 1. Receive request via the axum router
//! 2. Translate it into a call on the task store
//! 3. Serialize the result (or error) back to JSON
//!
//! ## Modules
//! - `api`: router, handlers, and server startup
//! - `config`: environment-driven server configuration
//! - `store`: the task store (CRUD, pagination, validation)

pub mod api;
pub mod config;
pub mod store;

pub use config::Config;
pub use store::{Task, TaskError, TaskStore};
