pub mod app;
pub mod color;
pub mod dir;
pub mod logger;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
