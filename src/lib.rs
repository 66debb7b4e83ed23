// Main library entry point for crashstack.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ports;

pub use config::ParserConfig;
pub use domain::callstack::{CallstackContainer, DisplayOptions};
pub use domain::crash::{CrashRecord, CrashType};
pub use domain::dialect::Dialect;
pub use domain::frame::Frame;
