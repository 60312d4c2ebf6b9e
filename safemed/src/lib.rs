//! SafeMed core
//!
//! Domain logic shared by the SafeMed clients: the form-submission state
//! machine behind the login and register screens, and the navigation
//! model deciding where the bottom bar is shown.

pub mod form;
pub mod navigation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
