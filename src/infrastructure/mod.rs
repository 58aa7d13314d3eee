//! Infrastructure layer implementing the interfaces defined by the domain
//! layer.
//!
//! - [`persistence`] - File-backed repository implementations

pub mod persistence;
