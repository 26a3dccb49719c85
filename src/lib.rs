//! # MineCode Smoke-Test Client
//!
//! Client crate for the MineCode tool server providing:
//! - A stdio channel that spawns the server process and speaks
//!   newline-delimited JSON-RPC 2.0 over its stdin/stdout
//! - Tool discovery (`tools/list`) and invocation (`tools/call`)
//! - A fixed six-call smoke-test script with per-call error containment
//! - A raw-byte inspector for configuration files
//!
//! ## Architecture
//!
//! The runner only ever sees the `ToolChannel` trait; the process transport
//! is injected behind it:
//! ```text
//!   run_smoke_test ──► ToolChannel ──► RpcChannel ──► JsonRpcPeer
//!                          │                              │
//!                    (fake in tests)               child stdin/stdout
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod channel;
pub mod inspect;
pub mod rpc;
pub mod runner;
pub mod types;

// Internal utilities
pub mod observability;

pub use types::{Error, Result, ServerLaunchConfig};
