//! Core types for the MineCode client.
//!
//! This module provides foundational types used throughout the crate:
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Launch parameters for the spawned server process

mod config;
mod errors;

pub use config::ServerLaunchConfig;
pub use errors::{Error, Result};
