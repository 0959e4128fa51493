//! Line-delimited JSON-RPC server.
//!
//! One message per line in, one response per line out. Requests are handled in
//! arrival order; notifications are processed but never answered.

use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::mcp::protocol::{
    negotiate_protocol_version, InitializeParams, InitializeResult, JsonRpcError,
    JsonRpcRequest, JsonRpcResponse, ServerInfo, ToolCallParams, JSONRPC_VERSION,
};
use crate::mcp::tools::{self, ToolContext};

/// MCP server over a byte stream.
#[derive(Debug, Clone)]
pub struct McpServer {
    tools: ToolContext,
    info: ServerInfo,
}

impl McpServer {
    pub fn new(tools: ToolContext) -> Self {
        Self {
            tools,
            info: ServerInfo::default(),
        }
    }

    pub fn server_info(&self) -> &ServerInfo {
        &self.info
    }

    /// Serve stdin/stdout until stdin closes.
    pub async fn run_stdio(&self) -> std::io::Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve `reader` until EOF, writing responses to `writer`.
    ///
    /// Lines that are not UTF-8 or not JSON are answered with a parse error and
    /// the loop continues; only I/O failures end it.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::info!(
            name = %self.info.name,
            version = %self.info.version,
            "MCP server listening"
        );

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line).await,
                Err(e) => {
                    tracing::warn!(error = %e, "Message is not valid UTF-8");
                    Some(JsonRpcResponse::failure(
                        Value::Null,
                        JsonRpcError::parse_error(e),
                    ))
                }
            };

            if let Some(response) = response {
                let mut out = serde_json::to_vec(&response)
                    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
                out.push(b'\n');
                writer.write_all(&out).await?;
                writer.flush().await?;
            }
        }

        tracing::info!("Input closed, shutting down");
        Ok(())
    }

    /// Handle one line of input. Returns `None` for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "Unparseable message");
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    JsonRpcError::parse_error(e),
                ));
            }
        };

        let id = value.get("id").cloned();
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(r) => r,
            Err(e) => {
                return Some(JsonRpcResponse::failure(
                    id.unwrap_or(Value::Null),
                    JsonRpcError::invalid_request(e),
                ))
            }
        };

        self.handle_request(request).await
    }

    /// Dispatch a parsed request.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        tracing::debug!(method = %request.method, id = ?request.id, "Request");

        let Some(id) = request.id.clone() else {
            self.handle_notification(&request);
            return None;
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::failure(
                id,
                JsonRpcError::invalid_request(format!("unsupported jsonrpc {}", request.jsonrpc)),
            ));
        }

        let result = match request.method.as_str() {
            "initialize" => self.initialize(request.params),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": tools::definitions() })),
            "tools/call" => self.call_tool(request.params).await,
            other => Err(JsonRpcError::method_not_found(other)),
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(error) => {
                tracing::debug!(code = error.code, message = %error.message, "Request failed");
                JsonRpcResponse::failure(id, error)
            }
        })
    }

    fn handle_notification(&self, request: &JsonRpcRequest) {
        match request.method.as_str() {
            "notifications/initialized" => tracing::info!("Client initialized"),
            "notifications/cancelled" => tracing::debug!("Client cancelled a request"),
            other => tracing::debug!(method = other, "Ignoring notification"),
        }
    }

    fn initialize(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: InitializeParams = match params {
            Some(p) => serde_json::from_value(p).map_err(JsonRpcError::invalid_params)?,
            None => InitializeParams::default(),
        };
        let protocol_version = negotiate_protocol_version(params.protocol_version.as_deref());
        tracing::debug!(
            requested = ?params.protocol_version,
            protocol_version,
            "Negotiated protocol version"
        );

        serde_json::to_value(InitializeResult {
            protocol_version: protocol_version.to_string(),
            capabilities: json!({ "tools": {} }),
            server_info: self.info.clone(),
        })
        .map_err(JsonRpcError::internal)
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params = params.ok_or_else(|| JsonRpcError::invalid_params("missing params"))?;
        let call: ToolCallParams =
            serde_json::from_value(params).map_err(JsonRpcError::invalid_params)?;

        tracing::info!(tool = %call.name, "Tool call");
        let result = self.tools.call(&call.name, call.arguments).await?;
        serde_json::to_value(result).map_err(JsonRpcError::internal)
    }
}
