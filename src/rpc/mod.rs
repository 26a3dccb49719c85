//! Newline-delimited JSON-RPC 2.0 transport layer.
//!
//! Implements the client half of the wire protocol the MineCode server
//! speaks over its stdin/stdout: one JSON object per line.

pub mod codec;
pub mod peer;
pub mod protocol;

pub use peer::JsonRpcPeer;
