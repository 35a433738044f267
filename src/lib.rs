pub mod api;
pub mod app;
pub mod config;
pub mod server;
pub mod store;
pub mod ui;
