//! HTTP request handlers.
//!
//! [`route_handler`] receives every request and hands it to the handler of
//! the operation encoded in the path.

pub mod add;
pub mod delete;
pub mod list;
pub mod redirect;
pub mod route;
pub mod welcome;

pub use add::add_handler;
pub use delete::delete_handler;
pub use list::list_handler;
pub use redirect::redirect_handler;
pub use route::route_handler;
pub use welcome::welcome_handler;
