//! JSON-RPC 2.0 message types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

/// A request carrying an id; the server must answer it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub params: Value,
}

impl Request {
    pub fn new(id: u64, method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}

/// A notification: no id, never answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub params: Value,
}

impl Notification {
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
        }
    }
}

/// A response: carries `result` or `error`, never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub jsonrpc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl Response {
    pub fn success(id: u64, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: Some(Value::from(id)),
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: u64, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: Some(Value::from(id)),
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// The `error` member of a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_wire_shape() {
        let req = Request::new(7, "tools/call", json!({"name": "hello_world"}));
        let wire = serde_json::to_value(&req).unwrap();
        assert_eq!(
            wire,
            json!({
                "jsonrpc": "2.0",
                "id": 7,
                "method": "tools/call",
                "params": {"name": "hello_world"},
            })
        );
    }

    #[test]
    fn request_omits_null_params() {
        let req = Request::new(1, "tools/list", Value::Null);
        let wire = serde_json::to_value(&req).unwrap();
        assert!(wire.get("params").is_none());
    }

    #[test]
    fn notification_has_no_id() {
        let note = Notification::new("notifications/initialized", Value::Null);
        let wire = serde_json::to_value(&note).unwrap();
        assert!(wire.get("id").is_none());
        assert_eq!(wire["method"], "notifications/initialized");
    }

    #[test]
    fn response_success_parses() {
        let wire = r#"{"jsonrpc":"2.0","id":3,"result":{"tools":[]}}"#;
        let resp: Response = serde_json::from_str(wire).unwrap();
        assert_eq!(resp.id, Some(json!(3)));
        assert!(resp.error.is_none());
        assert_eq!(resp.result, Some(json!({"tools": []})));
    }

    #[test]
    fn response_error_parses() {
        let wire = r#"{"jsonrpc":"2.0","id":3,"error":{"code":-32601,"message":"Unknown method"}}"#;
        let resp: Response = serde_json::from_str(wire).unwrap();
        let error = resp.error.unwrap();
        assert_eq!(error.code, -32601);
        assert_eq!(error.message, "Unknown method");
        assert!(resp.result.is_none());
    }
}
