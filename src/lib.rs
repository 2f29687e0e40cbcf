pub mod cli;
pub mod config;
pub mod error;
pub mod substitution;
pub mod targets;
pub mod ui;
pub mod updater;
pub mod version;
pub mod warning;

pub use error::{Result, SetVersionError};
