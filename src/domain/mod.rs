//! Domain layer containing business entities and contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`route_request`] - Classification of request paths into operations
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers.

pub mod entities;
pub mod repositories;
pub mod route_request;
