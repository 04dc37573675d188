//! HTTP API: router, handlers and request/response plumbing

pub mod handler;
pub mod helpers;
pub mod parsing;

pub use handler::{AppState, build_router};
