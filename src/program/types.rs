//! Type definitions for the Auracle on-chain program.
//!
//! This module contains parameter structs and results used for on-chain program
//! interaction.

use serde::Serialize;
use solana_hash::Hash;
use solana_message::Message;
use solana_pubkey::Pubkey;
use solana_signature::Signature;

use crate::program::constants::TRUTH_SIGNAL_SIZE;

// ============================================================================
// Instruction Parameters
// ============================================================================

/// Parameters for the resolve_event instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveEventParams {
    /// Payer and signer of the resolution
    pub payer: Pubkey,
    /// AURA token mint
    pub auracle_mint: Pubkey,
    /// Event being resolved
    pub event_id: u64,
    /// Opaque 32-byte resolution signal
    pub truth_signal: [u8; TRUTH_SIGNAL_SIZE],
    /// Fee recorded by the program, in lamports
    pub transaction_fee_lamports: u64,
    /// Token account to debit instead of the payer's associated token account
    pub payer_token_account: Option<Pubkey>,
}

impl ResolveEventParams {
    /// Same parameters with a different recorded fee.
    pub fn with_fee(&self, transaction_fee_lamports: u64) -> Self {
        Self {
            transaction_fee_lamports,
            ..self.clone()
        }
    }
}

/// Request for a full resolve_event round trip through [`crate::program::AuracleClient`].
#[derive(Debug, Clone, Default)]
pub struct QueryTruthRequest {
    pub event_id: u64,
    /// Raw truth signal; falls back to the client's resolver when `None`
    pub truth_signal: Option<Vec<u8>>,
    /// Overrides the derived AURA token account
    pub payer_token_account: Option<Pubkey>,
}

// ============================================================================
// Two-Phase Submission
// ============================================================================

/// Output of the estimate phase.
///
/// Carries the blockhash and fee that `finalize` bakes into the real instruction.
/// The provisional message (fee = 0) is kept for inspection; it is never sent.
#[derive(Debug, Clone)]
pub struct FeeEstimate {
    pub params: ResolveEventParams,
    pub blockhash: Hash,
    pub provisional_message: Message,
    pub fee_lamports: u64,
}

/// Result of a submitted resolve_event transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOutcome {
    pub signature: Signature,
    pub event_id: u64,
    pub fee_lamports: u64,
}

// ============================================================================
// Balances
// ============================================================================

/// Native and AURA balances of the signer wallet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletBalance {
    /// Base58 wallet address
    pub wallet: String,
    pub lamports: u64,
    /// UI amount of AURA held in the wallet's associated token account
    #[serde(serialize_with = "serialize_ui_amount")]
    pub aura: f64,
}

/// Largest magnitude at which every integer is exactly representable in an f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole amounts are written as integers (`12`, not `12.0`).
fn serialize_ui_amount<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if amount.is_finite() && amount.fract() == 0.0 && amount.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}
