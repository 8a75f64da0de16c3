pub mod config;
pub mod display;
pub mod logging;
pub mod prompt;
pub mod session;
