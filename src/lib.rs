//! # Auracle MCP
//!
//! An MCP server that lets an agent read the oracle wallet's balances and resolve
//! Auracle prediction-market events on Solana.
//!
//! ## Modules
//!
//! - [`program`]: On-chain program interaction (instruction encoding, PDAs, the
//!   two-phase fee estimate/finalize client)
//! - [`mcp`]: JSON-RPC/MCP protocol types, tool handlers, and the stdio server
//! - [`oracle`]: Resolution of events by natural-language name
//! - [`config`]: Command line and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use auracle_mcp::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load()?;
//!     let ledger = Arc::new(RpcLedger::new(&config.rpc_url));
//!     let client = AuracleClient::new(
//!         ledger,
//!         Arc::new(config.wallet),
//!         config.program_id,
//!         config.auracle_mint,
//!     );
//!
//!     // Resolve event 42 with an all-zero truth signal
//!     let outcome = client.resolve_event(42, [0u8; 32]).await?;
//!     println!("{} (fee {})", outcome.signature, outcome.fee_lamports);
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// On-chain program interaction module.
/// Contains the client and utilities for interacting with the Auracle program.
pub mod program;

/// MCP protocol types, tools, and server loop.
pub mod mcp;

/// Event resolution by name.
pub mod oracle;

/// Process configuration.
pub mod config;

/// Well-known RPC endpoints.
pub mod network;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use auracle_mcp::prelude::*;
/// ```
pub mod prelude {
    pub use crate::program::{
        // Client
        aura_or_zero, AuracleClient, Ledger, TruthSignalResolver,
        // Errors
        SdkError, SdkResult,
        // Types
        FeeEstimate, QueryTruthRequest, ResolveEventParams, ResolveOutcome, WalletBalance,
        // Instructions and PDAs
        build_resolve_event_ix, get_market_state_pda, serialize_resolve_event_data,
        // Utilities
        event_id_from_name, get_auracle_token_ata, parse_truth_signal,
        // Constants
        ASSOCIATED_TOKEN_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID,
    };

    #[cfg(feature = "rpc")]
    pub use crate::program::RpcLedger;

    pub use crate::config::{Config, ConfigError, ConfigResult};
    pub use crate::mcp::{McpServer, ToolContext};
    pub use crate::network::{DEVNET_RPC_URL, LOCALNET_RPC_URL, MAINNET_RPC_URL};
    pub use crate::oracle::NaturalLanguageOracle;
}
