//! HTTP layer translating request paths into redirect operations.
//!
//! - [`handlers`] - Request classification and per-operation handlers
//! - [`middleware`] - Request tracing

pub mod handlers;
pub mod middleware;
