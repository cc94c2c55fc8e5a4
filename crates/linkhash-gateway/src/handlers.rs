mod health;
mod link;

pub use health::health_handler;
pub use link::{delete_link_handler, resolve_link_handler, shorten_link_handler};
