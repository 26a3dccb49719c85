//! Tool channel — the capability the smoke runner is written against.
//!
//! `ToolChannel` covers the three operations the client exercises:
//! the initialization handshake, catalog listing, and tool invocation.
//! `RpcChannel` implements it over any pair of byte streams; `StdioChannel`
//! binds that to a spawned server process. Tests inject a fake instead.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::Result;

mod rpc;
mod stdio;

pub use rpc::RpcChannel;
pub use stdio::StdioChannel;

/// What the server reports about itself during the handshake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
    pub protocol_version: String,
}

/// One entry of the server's tool catalog. Read-only; printed in the order
/// the server returned it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// JSON Schema for the tool's arguments. Opaque to this client.
    #[serde(rename = "inputSchema", default)]
    pub input_schema: Value,
}

/// One item of a call result's `content` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// Result payload of a `tools/call`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolResult {
    #[serde(default)]
    pub content: Vec<ContentItem>,
    /// Tool-level failure flag. Carried through and printed like any other
    /// payload; only transport and JSON-RPC errors abort a call.
    #[serde(rename = "isError", default)]
    pub is_error: bool,
}

impl CallToolResult {
    /// Text of the first `text` content item, if any.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|item| item.kind == "text")
            .and_then(|item| item.text.as_deref())
    }

    /// Convenience constructor for a single-text result.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem {
                kind: "text".to_string(),
                text: Some(text.into()),
            }],
            is_error: false,
        }
    }
}

/// Bidirectional channel to a tool-serving process.
///
/// One connection, strictly sequential: callers await each operation before
/// issuing the next.
#[async_trait]
pub trait ToolChannel {
    /// Perform the protocol's initialization handshake.
    async fn initialize(&mut self) -> Result<ServerInfo>;

    /// Fetch the full tool catalog, in server order.
    async fn list_tools(&mut self) -> Result<Vec<ToolDescriptor>>;

    /// Invoke one tool by name with an argument mapping.
    async fn call_tool(&mut self, name: &str, arguments: Value) -> Result<CallToolResult>;
}
