//! The two tools exposed to agents: `get_balance` and `resolve_event`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::mcp::protocol::{JsonRpcError, Tool, ToolsCallResult};
use crate::program::{parse_truth_signal, AuracleClient, SdkError, SdkResult};

pub const GET_BALANCE: &str = "get_balance";
pub const RESOLVE_EVENT: &str = "resolve_event";

/// Largest integer a JSON number carries exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Everything a tool handler needs, built once at startup.
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub client: AuracleClient,
}

/// `resolve_event` arguments as they arrive on the wire.
#[derive(Debug, Deserialize)]
struct ResolveEventArgs {
    event_id: Value,
    #[serde(default)]
    truth_signal: Option<String>,
}

#[derive(Debug, Serialize)]
struct ResolveEventResponse {
    signature: String,
    event_id: u64,
    fee_lamports: u64,
}

/// Tool definitions for `tools/list`.
pub fn definitions() -> Vec<Tool> {
    vec![
        Tool {
            name: GET_BALANCE.to_string(),
            description: "Get the oracle wallet's SOL (lamports) and AURA token balances"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        Tool {
            name: RESOLVE_EVENT.to_string(),
            description: "Resolve a prediction-market event on-chain with a 32-byte truth signal"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "event_id": { "type": "number" },
                    "truth_signal": { "type": "string", "description": "Hex (64) or base64." }
                },
                "required": ["event_id"]
            }),
        },
    ]
}

/// Convert a JSON number into an event id.
///
/// Accepts non-negative integers, including integral floats up to 2^53 - 1.
pub fn parse_event_id(value: &Value) -> SdkResult<u64> {
    if let Some(id) = value.as_u64() {
        return Ok(id);
    }
    match value.as_f64() {
        Some(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= MAX_SAFE_INTEGER => {
            Ok(f as u64)
        }
        Some(_) => Err(SdkError::InvalidEventId(format!(
            "{} is not a non-negative integer",
            value
        ))),
        None => Err(SdkError::InvalidEventId(format!("{} is not a number", value))),
    }
}

impl ToolContext {
    pub fn new(client: AuracleClient) -> Self {
        Self { client }
    }

    /// Dispatch a `tools/call`.
    ///
    /// Unknown tools and malformed arguments are protocol errors; failures inside a
    /// handler become an error result so the agent can read them.
    pub async fn call(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> Result<ToolsCallResult, JsonRpcError> {
        let arguments = arguments.unwrap_or_else(|| json!({}));
        if !arguments.is_object() {
            return Err(JsonRpcError::invalid_params("arguments must be an object"));
        }

        let outcome = match name {
            GET_BALANCE => self.get_balance().await,
            RESOLVE_EVENT => {
                let args: ResolveEventArgs = serde_json::from_value(arguments)
                    .map_err(|e| JsonRpcError::invalid_params(format!("{}: {}", RESOLVE_EVENT, e)))?;
                self.resolve_event(args).await
            }
            other => {
                return Err(JsonRpcError::invalid_params(format!("Unknown tool: {}", other)));
            }
        };

        Ok(match outcome {
            Ok(text) => ToolsCallResult::text(text),
            Err(e) => {
                if e.is_validation() {
                    tracing::warn!(tool = name, error = %e, "Rejected tool input");
                } else {
                    tracing::error!(tool = name, error = %e, "Tool call failed");
                }
                ToolsCallResult::error(e.to_string())
            }
        })
    }

    async fn get_balance(&self) -> SdkResult<String> {
        let balance = self.client.get_balance().await?;
        to_json_text(&balance)
    }

    async fn resolve_event(&self, args: ResolveEventArgs) -> SdkResult<String> {
        let event_id = parse_event_id(&args.event_id)?;
        let truth_signal = parse_truth_signal(args.truth_signal.as_deref())?;

        let outcome = self.client.resolve_event(event_id, truth_signal).await?;
        to_json_text(&ResolveEventResponse {
            signature: outcome.signature.to_string(),
            event_id: outcome.event_id,
            fee_lamports: outcome.fee_lamports,
        })
    }
}

fn to_json_text<T: Serialize>(value: &T) -> SdkResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| SdkError::Rpc(e.to_string()))
}
