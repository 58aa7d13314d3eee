//! Redirect repository implementations.
//!
//! - [`JsonFileRedirectRepository`] - Whole mapping kept in memory and mirrored
//!   to a JSON file

pub mod json_file_repository;

pub use json_file_repository::JsonFileRedirectRepository;
