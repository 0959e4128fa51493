//! Stdio framing and JSON-RPC dispatch of the MCP server.
//!
//! Run: cargo test --test mcp_server

mod common;

use std::sync::Arc;

use auracle_mcp::mcp::{McpServer, ToolContext, MCP_PROTOCOL_VERSION};
use common::{client_with, MockLedger};
use serde_json::{json, Value};

fn server(ledger: Arc<MockLedger>) -> McpServer {
    McpServer::new(ToolContext::new(client_with(ledger)))
}

/// Feed `input` lines through the server and collect the response lines.
async fn exchange(server: &McpServer, input: &[Value]) -> Vec<Value> {
    let mut raw = String::new();
    for message in input {
        raw.push_str(&message.to_string());
        raw.push('\n');
    }

    let mut out: Vec<u8> = Vec::new();
    server.serve(raw.as_bytes(), &mut out).await.unwrap();

    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_initialize_handshake() {
    let server = server(Arc::new(MockLedger::default()));

    let responses = exchange(
        &server,
        &[
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {
                    "protocolVersion": MCP_PROTOCOL_VERSION,
                    "capabilities": {},
                    "clientInfo": {"name": "test", "version": "0"}
                }
            }),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "ping"}),
        ],
    )
    .await;

    // The notification gets no reply
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "auracle-mcp");
    assert_eq!(responses[0]["result"]["protocolVersion"], MCP_PROTOCOL_VERSION);
    assert!(responses[0]["result"]["capabilities"]["tools"].is_object());
    assert_eq!(responses[1], json!({"jsonrpc": "2.0", "id": 2, "result": {}}));
}

#[tokio::test]
async fn test_tools_list() {
    let server = server(Arc::new(MockLedger::default()));

    let responses = exchange(
        &server,
        &[json!({"jsonrpc": "2.0", "id": "list", "method": "tools/list"})],
    )
    .await;

    let tools = responses[0]["result"]["tools"].as_array().unwrap();
    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["get_balance", "resolve_event"]);
    assert_eq!(responses[0]["id"], "list");
}

#[tokio::test]
async fn test_tools_call_round_trip() {
    let ledger = Arc::new(MockLedger::default());
    let server = server(ledger.clone());

    let responses = exchange(
        &server,
        &[json!({
            "jsonrpc": "2.0",
            "id": 9,
            "method": "tools/call",
            "params": {"name": "resolve_event", "arguments": {"event_id": 42}}
        })],
    )
    .await;

    let result = &responses[0]["result"];
    assert!(result.get("isError").is_none());
    assert_eq!(result["content"][0]["type"], "text");

    let output: Value = serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(output["fee_lamports"], 5000);
    assert_eq!(ledger.sent_transactions().len(), 1);
}

#[tokio::test]
async fn test_tool_failure_is_reported_in_result() {
    let ledger = Arc::new(MockLedger::default());
    let server = server(ledger.clone());

    let responses = exchange(
        &server,
        &[json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": {"name": "resolve_event", "arguments": {"event_id": 1, "truth_signal": "AAAA"}}
        })],
    )
    .await;

    assert!(responses[0].get("error").is_none());
    assert_eq!(responses[0]["result"]["isError"], true);
    assert_eq!(ledger.total_calls(), 0);
}

#[tokio::test]
async fn test_protocol_errors() {
    let server = server(Arc::new(MockLedger::default()));

    let unknown = exchange(
        &server,
        &[json!({"jsonrpc": "2.0", "id": 4, "method": "resources/list"})],
    )
    .await;
    assert_eq!(unknown[0]["error"]["code"], -32601);

    let no_params = exchange(
        &server,
        &[json!({"jsonrpc": "2.0", "id": 5, "method": "tools/call"})],
    )
    .await;
    assert_eq!(no_params[0]["error"]["code"], -32602);
}

#[tokio::test]
async fn test_unparseable_line() {
    let server = server(Arc::new(MockLedger::default()));

    let response = server.handle_line("{not json").await.unwrap();
    assert_eq!(response.id, Value::Null);
    assert_eq!(response.error.unwrap().code, -32700);

    let response = server.handle_line("[1, 2]").await.unwrap();
    assert_eq!(response.error.unwrap().code, -32600);
}

#[tokio::test]
async fn test_blank_lines_are_skipped() {
    let server = server(Arc::new(MockLedger::default()));

    let mut out: Vec<u8> = Vec::new();
    let input = "\n   \n{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n";
    server.serve(input.as_bytes(), &mut out).await.unwrap();

    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
}

#[tokio::test]
async fn test_non_utf8_line_does_not_stop_the_server() {
    let server = server(Arc::new(MockLedger::default()));

    let mut input = Vec::new();
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n");
    input.extend_from_slice(&[0xff, 0xfe, b'\n']);
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"ping\"}\n");

    let mut out: Vec<u8> = Vec::new();
    server.serve(input.as_slice(), &mut out).await.unwrap();

    let responses: Vec<Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[1]["id"], Value::Null);
    assert_eq!(responses[1]["error"]["code"], -32700);
    assert_eq!(responses[2]["id"], 2);
    assert_eq!(responses[2]["result"], json!({}));
}

#[tokio::test]
async fn test_null_id_gets_a_reply() {
    let server = server(Arc::new(MockLedger::default()));

    let responses = exchange(
        &server,
        &[json!({"jsonrpc": "2.0", "id": null, "method": "ping"})],
    )
    .await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], Value::Null);
    assert_eq!(responses[0]["result"], json!({}));
}
