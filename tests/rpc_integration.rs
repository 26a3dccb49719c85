//! RPC integration tests — validates the codec→peer→channel round-trip
//! against a scripted in-memory server speaking the real wire protocol.

use minecode_client::channel::{RpcChannel, ToolChannel};
use minecode_client::rpc::protocol::Response;
use minecode_client::runner::run_smoke_test;
use minecode_client::types::Error;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream, ReadHalf, WriteHalf};

type TestChannel = RpcChannel<BufReader<ReadHalf<DuplexStream>>, WriteHalf<DuplexStream>>;

/// Helper: wire an `RpcChannel` to a scripted server task over duplex pipes.
fn connect_scripted_server() -> TestChannel {
    let (client_side, server_side) = tokio::io::duplex(64 * 1024);

    tokio::spawn(async move {
        serve_minecode(server_side).await;
    });

    let (read, write) = tokio::io::split(client_side);
    RpcChannel::new(BufReader::new(read), write)
}

/// Minimal MineCode server: initialize gate, tool catalog, canned tool calls.
async fn serve_minecode(stream: DuplexStream) {
    let (read, mut write) = tokio::io::split(stream);
    let mut lines = BufReader::new(read).lines();
    let mut initialized = false;

    while let Ok(Some(line)) = lines.next_line().await {
        if line.trim().is_empty() {
            continue;
        }
        let message: Value = serde_json::from_str(&line).expect("client sent invalid JSON");
        let method = message["method"].as_str().unwrap_or("");

        // Notifications carry no id and get no response.
        let id = match message["id"].as_u64() {
            Some(id) => id,
            None => {
                if method == "notifications/initialized" {
                    initialized = true;
                }
                continue;
            }
        };

        let response = match method {
            "initialize" => Response::success(
                id,
                json!({
                    "protocolVersion": "2024-11-05",
                    "capabilities": {"tools": {}},
                    "serverInfo": {"name": "minecode", "version": "1.0.0"},
                }),
            ),
            _ if !initialized => {
                Response::error(id, -32002, "server not initialized")
            }
            "tools/list" => Response::success(
                id,
                json!({
                    "tools": [
                        {
                            "name": "hello_world",
                            "description": "Say hello",
                            "inputSchema": {"type": "object", "properties": {}},
                        },
                        {
                            "name": "get_minecraft_version",
                            "description": "Version metadata",
                            "inputSchema": {"type": "object"},
                        },
                        {"name": "search_wiki", "inputSchema": {"type": "object"}},
                        {"name": "list_commands", "inputSchema": {"type": "object"}},
                        {"name": "validate_datapack", "inputSchema": {"type": "object"}},
                    ],
                }),
            ),
            "tools/call" => handle_call(id, &message["params"]),
            other => Response::error(id, -32601, format!("Unknown method: {other}")),
        };

        let mut encoded = serde_json::to_vec(&response).expect("response serializes");
        encoded.push(b'\n');
        write.write_all(&encoded).await.expect("write response");
    }
}

fn handle_call(id: u64, params: &Value) -> Response {
    let name = params["name"].as_str().unwrap_or("");
    let arguments = &params["arguments"];

    let text = match name {
        "hello_world" => match arguments.get("name").and_then(Value::as_str) {
            Some(who) => format!("Hello, {who}! Welcome to MineCode Server."),
            None => "Hello, World! Welcome to MineCode Server.".to_string(),
        },
        "get_minecraft_version" => json!({"version": "1.20.1", "stable": true}).to_string(),
        "search_wiki" => json!({"query": "command", "results": ["/give"]}).to_string(),
        "list_commands" => {
            json!({"version": "1.20.1", "category": "admin", "commands": ["/ban"]}).to_string()
        }
        "validate_datapack" => json!({"valid": false, "errors": ["pack.mcmeta missing"]}).to_string(),
        other => return Response::error(id, -32602, format!("Unknown tool: {other}")),
    };

    Response::success(
        id,
        json!({"content": [{"type": "text", "text": text}], "isError": false}),
    )
}

// =============================================================================
// Handshake
// =============================================================================

#[tokio::test]
async fn initialize_returns_server_info() {
    let mut channel = connect_scripted_server();
    let server = channel.initialize().await.unwrap();
    assert_eq!(server.name, "minecode");
    assert_eq!(server.version, "1.0.0");
    assert_eq!(server.protocol_version, "2024-11-05");
}

#[tokio::test]
async fn requests_before_handshake_are_rejected() {
    // The scripted server gates everything on notifications/initialized, so
    // this doubles as proof the client actually sends the notification.
    let mut channel = connect_scripted_server();
    let err = channel.list_tools().await.unwrap_err();
    match err {
        Error::Rpc { code, message } => {
            assert_eq!(code, -32002);
            assert!(message.contains("not initialized"));
        }
        other => panic!("expected Rpc error, got {other:?}"),
    }
}

// =============================================================================
// Catalog and calls
// =============================================================================

#[tokio::test]
async fn list_tools_preserves_server_order() {
    let mut channel = connect_scripted_server();
    channel.initialize().await.unwrap();

    let tools = channel.list_tools().await.unwrap();
    let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "hello_world",
            "get_minecraft_version",
            "search_wiki",
            "list_commands",
            "validate_datapack",
        ]
    );
    assert_eq!(tools[0].description.as_deref(), Some("Say hello"));
    assert!(tools[2].description.is_none());
}

#[tokio::test]
async fn call_tool_extracts_text_payload() {
    let mut channel = connect_scripted_server();
    channel.initialize().await.unwrap();

    let result = channel
        .call_tool("hello_world", json!({"name": "MineCode Developer"}))
        .await
        .unwrap();
    assert_eq!(
        result.text(),
        Some("Hello, MineCode Developer! Welcome to MineCode Server.")
    );
    assert!(!result.is_error);
}

#[tokio::test]
async fn unknown_tool_maps_to_rpc_error() {
    let mut channel = connect_scripted_server();
    channel.initialize().await.unwrap();

    let err = channel.call_tool("bogus", json!({})).await.unwrap_err();
    match err {
        Error::Rpc { code, message } => {
            assert_eq!(code, -32602);
            assert!(message.contains("bogus"));
        }
        other => panic!("expected Rpc error, got {other:?}"),
    }
}

// =============================================================================
// Full script over the wire
// =============================================================================

#[tokio::test]
async fn whole_smoke_script_runs_over_the_wire() {
    let mut channel = connect_scripted_server();
    let mut out = Vec::new();
    run_smoke_test(&mut channel, &mut out).await.unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Available Tools on MineCode Server:"));
    assert!(output.contains("📌 hello_world"));
    for index in 1..=6 {
        assert!(output.contains(&format!("🧪 Test {index}: ")));
    }
    assert!(output.contains("   Result: Hello, World! Welcome to MineCode Server."));
    assert!(output.contains("\n  \"category\": \"admin\""));
    assert!(output.contains("✅ All tests completed!"));
}
