pub mod ping;
pub mod share;

pub use ping::ping_handler;
pub use share::{home_handler, share_handler, share_sub_path_handler};
