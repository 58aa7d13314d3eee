//! Core domain entities.
//!
//! - [`Redirect`] - A short name and its normalized destination

pub mod redirect;

pub use redirect::Redirect;
