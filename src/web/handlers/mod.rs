//! HTML template rendering handlers.

mod home;

pub use home::{home_handler, not_found_page, submit_handler};
