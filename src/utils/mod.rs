//! Utility functions used across the application.
//!
//! - [`url_normalizer`] - Destination normalization

pub mod url_normalizer;
