//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod periods;

pub use periods::{
    handle_allocate_command, handle_generate_command, handle_status_command, AllocateArgs,
    GenerateArgs, StatusArgs,
};
