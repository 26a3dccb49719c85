//! `ToolChannel` over any pair of byte streams.
//!
//! Maps the three channel operations onto the wire methods `initialize`,
//! `tools/list`, and `tools/call`. Transport-agnostic so the integration
//! tests can drive it over in-memory duplex pipes.

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::channel::{CallToolResult, ServerInfo, ToolChannel, ToolDescriptor};
use crate::rpc::JsonRpcPeer;
use crate::types::Result;

const PROTOCOL_VERSION: &str = "2024-11-05";
const CLIENT_NAME: &str = "minecode-client";

/// JSON-RPC tool channel over arbitrary reader/writer streams.
#[derive(Debug)]
pub struct RpcChannel<R, W> {
    peer: JsonRpcPeer<R, W>,
}

impl<R, W> RpcChannel<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            peer: JsonRpcPeer::new(reader, writer),
        }
    }
}

#[async_trait]
impl<R, W> ToolChannel for RpcChannel<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn initialize(&mut self) -> Result<ServerInfo> {
        let result = self
            .peer
            .request(
                "initialize",
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": {},
                    "clientInfo": {
                        "name": CLIENT_NAME,
                        "version": env!("CARGO_PKG_VERSION"),
                    },
                }),
            )
            .await?;

        // Handshake completes with the initialized notification.
        self.peer
            .notify("notifications/initialized", Value::Null)
            .await?;

        Ok(ServerInfo {
            name: result
                .pointer("/serverInfo/name")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string(),
            version: result
                .pointer("/serverInfo/version")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string(),
            protocol_version: result
                .get("protocolVersion")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string(),
        })
    }

    async fn list_tools(&mut self) -> Result<Vec<ToolDescriptor>> {
        let result = self.peer.request("tools/list", json!({})).await?;
        let tools = result.get("tools").cloned().unwrap_or_else(|| json!([]));
        Ok(serde_json::from_value(tools)?)
    }

    async fn call_tool(&mut self, name: &str, arguments: Value) -> Result<CallToolResult> {
        let result = self
            .peer
            .request(
                "tools/call",
                json!({
                    "name": name,
                    "arguments": arguments,
                }),
            )
            .await?;
        Ok(serde_json::from_value(result)?)
    }
}
