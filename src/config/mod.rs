//! Configuration module for dfmis-periods
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DfmisPaths;
pub use settings::{OutputFormat, Settings};
