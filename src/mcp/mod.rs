//! Model Context Protocol surface: the two Auracle tools served over stdio.

pub mod protocol;
pub mod server;
pub mod tools;

pub use protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, ServerInfo, Tool, ToolContent,
    ToolsCallResult, MCP_PROTOCOL_VERSION, SUPPORTED_PROTOCOL_VERSIONS,
};
pub use server::McpServer;
pub use tools::{parse_event_id, ToolContext, GET_BALANCE, RESOLVE_EVENT};
