//! HTTP API handlers for bandex-ui

pub mod buildinfo;
pub mod health;
pub mod items;
pub mod ui;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use items::list_items;
pub use ui::{serve_app_js, serve_index};
