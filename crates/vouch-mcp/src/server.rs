//! MCP server implementation

use serde::Serialize;
use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Write};
use tokio::runtime::Runtime;
use tracing::{debug, error, info};
use vouch_gatekeeper::{GateConfig, RiskGate};
use vouch_sdk::{ClientConfig, RegistryClient};

use crate::error::McpError;
use crate::protocol::*;
use crate::tools;

/// MCP Server
///
/// Handles Model Context Protocol requests via stdio transport.
pub struct McpServer {
    gate: RiskGate<RegistryClient>,
    runtime: Runtime,
}

impl McpServer {
    /// Create a new MCP server for the registry described by `config`
    pub fn new(config: ClientConfig, gate_config: GateConfig) -> Result<Self, McpError> {
        gate_config.validate()?;

        let runtime = Runtime::new()?;
        let client = RegistryClient::new(config)?;

        Ok(Self {
            gate: RiskGate::new(client, gate_config),
            runtime,
        })
    }

    /// Run the MCP server (stdio transport)
    ///
    /// Reads JSON-RPC requests from stdin and writes responses to stdout
    /// until stdin closes.
    pub fn run(&self) -> Result<(), McpError> {
        info!(registry = self.gate.registry().base_url(), "MCP server started");

        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());
        let mut stdout = std::io::stdout();

        for line in reader.lines() {
            let line = line?;
            if let Some(response) = self.handle_message(&line) {
                self.write_response(&mut stdout, &response)?;
            }
        }

        info!("MCP server stopped");
        Ok(())
    }

    /// Handle one line of input
    ///
    /// Returns `None` for blank lines and notifications, which get no reply.
    pub fn handle_message(&self, line: &str) -> Option<Value> {
        if line.trim().is_empty() {
            return None;
        }

        debug!("Received request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse request: {}", e);
                return Some(to_json(&JsonRpcError::new(
                    None,
                    -32700,
                    format!("Parse error: {}", e),
                )));
            }
        };

        if request.jsonrpc != "2.0" {
            let err = McpError::InvalidRequest(format!("Unsupported jsonrpc version '{}'", request.jsonrpc));
            return Some(respond(request.id, Err(err)));
        }

        if request.id.is_none() {
            debug!(method = %request.method, "Ignoring notification");
            return None;
        }

        Some(self.handle_request(request))
    }

    /// Handle a JSON-RPC request
    fn handle_request(&self, request: JsonRpcRequest) -> Value {
        let id = request.id;

        match request.method.as_str() {
            "initialize" => respond(id, Ok(self.handle_initialize())),
            "tools/list" => respond(id, Ok(to_json(&tool_list()))),
            "tools/call" => respond(id, self.handle_tool_call(request.params)),
            "ping" => respond(id, Ok(json!({}))),
            _ => to_json(&JsonRpcError::new(
                id,
                -32601,
                format!("Method not found: {}", request.method),
            )),
        }
    }

    /// Handle initialize request
    fn handle_initialize(&self) -> Value {
        to_json(&InitializeResponse {
            protocol_version: PROTOCOL_VERSION,
            server_info: ServerInfo {
                name: "vouch-mcp",
                version: env!("CARGO_PKG_VERSION"),
            },
            capabilities: Capabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
        })
    }

    /// Handle tools/call request
    fn handle_tool_call(&self, params: Value) -> Result<Value, McpError> {
        let call: ToolCallParams =
            serde_json::from_value(params).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        debug!(tool = %call.name, "Tool call");

        let result = match call.name.as_str() {
            "vouch_check_transaction" => {
                let params = parse_arguments(call.arguments)?;
                to_json(&self.runtime.block_on(tools::handle_check_transaction(&self.gate, params))?)
            }
            "vouch_get_trust" => {
                let params = parse_arguments(call.arguments)?;
                to_json(&self.runtime.block_on(tools::handle_get_trust(self.gate.registry(), params))?)
            }
            "vouch_get_agent" => {
                let params = parse_arguments(call.arguments)?;
                to_json(&self.runtime.block_on(tools::handle_get_agent(self.gate.registry(), params))?)
            }
            other => return Err(McpError::ToolNotFound(other.to_string())),
        };

        Ok(tool_content(result))
    }

    /// Write response to stdout
    fn write_response<W: Write>(&self, writer: &mut W, response: &Value) -> Result<(), McpError> {
        let response_str = serde_json::to_string(response)?;
        writeln!(writer, "{}", response_str)?;
        writer.flush()?;
        debug!("Sent response: {}", response_str);
        Ok(())
    }
}

fn parse_arguments<T: serde::de::DeserializeOwned>(arguments: Value) -> Result<T, McpError> {
    serde_json::from_value(arguments).map_err(|e| McpError::InvalidParams(e.to_string()))
}

/// Wrap a tool result as MCP content, keeping the structured value alongside
fn tool_content(result: Value) -> Value {
    json!({
        "content": [{"type": "text", "text": result.to_string()}],
        "structuredContent": result,
        "isError": false,
    })
}

fn respond(id: Option<Value>, result: Result<Value, McpError>) -> Value {
    match result {
        Ok(value) => to_json(&JsonRpcResponse::new(id, value)),
        Err(e) => to_json(&JsonRpcError::new(id, e.error_code(), e.to_string())),
    }
}

fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        error!("Failed to serialize response: {}", e);
        Value::Null
    })
}

/// Tools advertised by `tools/list`
fn tool_list() -> ToolListResponse {
    let agent_id = json!({"type": "string", "description": "Registry identifier of the agent"});

    ToolListResponse {
        tools: vec![
            ToolDefinition {
                name: "vouch_check_transaction",
                description: "Decide whether a payment to an agent should proceed, based on its registry trust score and the amount",
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "agentId": agent_id.clone(),
                        "amount": {"type": "integer", "minimum": 0, "description": "Amount in sats"}
                    },
                    "required": ["agentId", "amount"]
                }),
            },
            ToolDefinition {
                name: "vouch_get_trust",
                description: "Get an agent's trust score, tier and risk flags",
                input_schema: json!({
                    "type": "object",
                    "properties": {"agentId": agent_id.clone()},
                    "required": ["agentId"]
                }),
            },
            ToolDefinition {
                name: "vouch_get_agent",
                description: "Get an agent's registry record and badge URL",
                input_schema: json!({
                    "type": "object",
                    "properties": {"agentId": agent_id.clone()},
                    "required": ["agentId"]
                }),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_list_names() {
        let names: Vec<&str> = tool_list().tools.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec!["vouch_check_transaction", "vouch_get_trust", "vouch_get_agent"]
        );
    }

    #[test]
    fn test_respond_error_code() {
        let value = respond(
            Some(json!(3)),
            Err(McpError::RegistryUnavailable("refused".into())),
        );
        assert_eq!(value["error"]["code"], -32001);
        assert_eq!(value["id"], 3);
    }

    #[test]
    fn test_tool_content_wraps_result() {
        let value = tool_content(json!({"proceed": true}));
        assert_eq!(value["structuredContent"]["proceed"], true);
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(value["isError"], false);
    }
}
