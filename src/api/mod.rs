//! HTTP API surface.

pub mod routes;
pub mod tasks;

pub use routes::{serve, AppState};
