//! JSON-RPC 2.0 framing and method dispatch

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};
use converto_core::ConvertoError;
use converto_units::UnitRegistry;
use crate::config::Config;
use crate::tools::{tool_definitions, ToolContext};

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const SERVER_NAME: &str = "converto";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

#[derive(Debug, Deserialize)]
pub struct McpRequest {
    pub jsonrpc: String,
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    /// `null` when the request id could not be read
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl McpError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        McpError { code, message: message.into(), data: None }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }

    /// Invalid params carrying the structured error as `data`
    pub fn from_error(err: ConvertoError) -> Self {
        McpError {
            code: INVALID_PARAMS,
            message: err.to_string(),
            data: serde_json::to_value(&err).ok(),
        }
    }
}

impl McpResponse {
    fn success(id: Option<JsonValue>, result: JsonValue) -> Self {
        McpResponse { jsonrpc: "2.0".to_string(), id, result: Some(result), error: None }
    }

    fn failure(id: Option<JsonValue>, error: McpError) -> Self {
        McpResponse { jsonrpc: "2.0".to_string(), id, result: None, error: Some(error) }
    }
}

/// One client connection
pub struct Server {
    tools: ToolContext,
}

impl Server {
    pub fn new(registry: &'static UnitRegistry, config: &Config) -> Self {
        Server {
            tools: ToolContext::new(registry, config.history_limit),
        }
    }

    /// Handle one protocol line. Returns the serialized response, or
    /// `None` for notifications.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        let response = match serde_json::from_str::<JsonValue>(line) {
            Ok(message) => {
                let id = message.get("id").cloned().filter(|id| !id.is_null());
                match serde_json::from_value::<McpRequest>(message) {
                    Ok(request) => {
                        debug!(method = %request.method, "processing");
                        let response = self.handle_request(&request);
                        if request.id.is_none() {
                            debug!(method = %request.method, "notification processed (no response)");
                            return None;
                        }
                        response
                    }
                    Err(e) => {
                        warn!(error = %e, "invalid request");
                        McpResponse::failure(id, McpError::new(INVALID_REQUEST, format!("Invalid request: {}", e)))
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "unparseable request");
                McpResponse::failure(None, McpError::new(PARSE_ERROR, format!("Parse error: {}", e)))
            }
        };

        match serde_json::to_string(&response) {
            Ok(json) => Some(json),
            Err(e) => {
                error!(error = %e, "failed to serialize response");
                Some(format!(
                    r#"{{"jsonrpc":"2.0","id":null,"error":{{"code":{},"message":"Internal error"}}}}"#,
                    INTERNAL_ERROR
                ))
            }
        }
    }

    pub fn handle_request(&mut self, request: &McpRequest) -> McpResponse {
        if request.jsonrpc != "2.0" {
            return McpResponse::failure(
                request.id.clone(),
                McpError::new(INVALID_REQUEST, format!("Unsupported jsonrpc version: {}", request.jsonrpc)),
            );
        }

        let result = match request.method.as_str() {
            // Lifecycle
            "initialize" => handle_initialize(&request.params),
            "initialized" | "notifications/initialized" => Ok(json!({})),
            "ping" => Ok(json!({})),

            // Tools
            "tools/list" => Ok(json!({ "tools": tool_definitions() })),
            "tools/call" => self.handle_tool_call(&request.params),

            _ => Err(McpError::new(METHOD_NOT_FOUND, format!("Method not found: {}", request.method))),
        };

        match result {
            Ok(r) => McpResponse::success(request.id.clone(), r),
            Err(e) => McpResponse::failure(request.id.clone(), e),
        }
    }

    fn handle_tool_call(&mut self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let params = params.as_ref()
            .ok_or_else(|| McpError::invalid_params("Missing params"))?;

        let name = params.get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

        let args = params.get("arguments").cloned().unwrap_or(json!({}));
        self.tools.call(name, &args)
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Answer with the client's protocol version when it sends one
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit conversion across 18 measurement categories"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Use 'convert' with category and unit keys, or 'query' with text like '5 kilometer to mile'. 'list_categories' and 'get_category' show the available keys. The session_* tools keep an interactive converter with a short history."
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use converto_units::REGISTRY;

    fn server() -> Server {
        Server::new(&REGISTRY, &Config::default())
    }

    fn call(server: &mut Server, line: &str) -> JsonValue {
        let response = server.handle_line(line).unwrap();
        serde_json::from_str(&response).unwrap()
    }

    #[test]
    fn test_initialize() {
        let mut s = server();
        let response = call(&mut s, r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","clientInfo":{"name":"test"}}}"#);
        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(response["result"]["serverInfo"]["name"], "converto");
    }

    #[test]
    fn test_notification_gets_no_response() {
        let mut s = server();
        assert!(s.handle_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#).is_none());
        assert!(s.handle_line(r#"{"jsonrpc":"2.0","method":"no/such/method"}"#).is_none());
    }

    #[test]
    fn test_ping_and_tools_list() {
        let mut s = server();
        let response = call(&mut s, r#"{"jsonrpc":"2.0","id":"a","method":"ping"}"#);
        assert_eq!(response["result"], json!({}));

        let response = call(&mut s, r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#);
        let names: Vec<&str> = response["result"]["tools"].as_array().unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec![
            "convert", "query", "list_categories", "get_category",
            "session_open", "session_update", "session_swap", "session_state",
        ]);
    }

    #[test]
    fn test_error_codes() {
        let mut s = server();
        let response = call(&mut s, "{not json");
        assert_eq!(response["error"]["code"], PARSE_ERROR);
        assert_eq!(response.get("id"), Some(&JsonValue::Null));

        let response = call(&mut s, r#"{"jsonrpc":"2.0","id":3,"method":"resources/list"}"#);
        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);

        let response = call(&mut s, r#"{"jsonrpc":"2.0","id":4,"method":"tools/call"}"#);
        assert_eq!(response["error"]["code"], INVALID_PARAMS);

        let response = call(&mut s, r#"{"jsonrpc":"1.0","id":5,"method":"ping"}"#);
        assert_eq!(response["error"]["code"], INVALID_REQUEST);
    }

    #[test]
    fn test_request_without_method_is_invalid() {
        let mut s = server();
        let response = call(&mut s, r#"{"jsonrpc":"2.0","id":8}"#);
        assert_eq!(response["error"]["code"], INVALID_REQUEST);
        assert_eq!(response["id"], 8);

        let response = call(&mut s, r#"[1, 2, 3]"#);
        assert_eq!(response["error"]["code"], INVALID_REQUEST);
        assert_eq!(response.get("id"), Some(&JsonValue::Null));
    }

    #[test]
    fn test_tool_call_round_trip() {
        let mut s = server();
        let response = call(&mut s, r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{"name":"convert","arguments":{"category":"data","from":"gigabyte","to":"byte","value":"1"}}}"#);
        assert_eq!(response["result"]["data"]["display"], "1073741824");
        assert_eq!(response["result"]["isError"], false);

        let response = call(&mut s, r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":{"name":"convert","arguments":{"category":"nope","from":"a","to":"b","value":"1"}}}"#);
        assert_eq!(response["result"]["isError"], true);
        assert!(response.get("error").is_none());
    }

    #[test]
    fn test_session_persists_across_requests() {
        let mut s = server();
        call(&mut s, r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"session_open","arguments":{"category":"length"}}}"#);
        call(&mut s, r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"session_update","arguments":{"value":"1500"}}}"#);
        let response = call(&mut s, r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"session_state"}}"#);
        assert_eq!(response["result"]["data"]["result"]["display"], "1.5");
        assert_eq!(response["result"]["content"][0]["text"], "1500 m = 1.5 km");
    }
}
