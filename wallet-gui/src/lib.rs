pub mod app;
pub mod backend;
pub mod dir;
pub mod gui;
pub mod logger;
pub mod utils;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
