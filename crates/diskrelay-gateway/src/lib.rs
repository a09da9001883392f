//! HTTP surface for the public-share relay.

pub mod app;
pub mod config;
pub mod handlers;
pub mod pages;
pub mod state;

pub use app::App;
pub use config::Config;
pub use state::AppState;
