//! On-chain program interaction module for Auracle.
//!
//! This module provides the client and utilities for interacting with
//! the Auracle smart contract on Solana.

pub mod client;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod pda;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use client::{aura_or_zero, AuracleClient, TruthSignalResolver, ABSENT_AURA_BALANCE};
pub use constants::*;
pub use error::{SdkError, SdkResult};
pub use instructions::*;
pub use ledger::Ledger;
#[cfg(feature = "rpc")]
pub use ledger::RpcLedger;
pub use pda::*;
pub use types::*;
pub use utils::*;
