//! Constants for the Auracle on-chain program.
//!
//! This module contains program IDs, seeds, discriminator names, and size constants
//! matching the on-chain program exactly.

use solana_pubkey::Pubkey;

// ============================================================================
// Program IDs
// ============================================================================

/// SPL Token Program ID
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;

/// Associated Token Account Program ID
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;

/// System Program ID
pub const SYSTEM_PROGRAM_ID: Pubkey = solana_sdk_ids::system_program::ID;

// ============================================================================
// Instruction Names
// ============================================================================

/// Namespace prefix hashed into every global instruction discriminator.
pub const GLOBAL_NAMESPACE: &str = "global";

/// Instruction names (hashed as `global:<name>` to form the 8-byte discriminator)
pub mod instruction {
    pub const RESOLVE_EVENT: &str = "resolve_event";
}

lazy_static::lazy_static! {
    /// Discriminator of the resolve_event instruction, `sha256("global:resolve_event")[..8]`.
    pub static ref RESOLVE_EVENT_DISCRIMINATOR: [u8; 8] =
        crate::program::utils::instruction_discriminator(instruction::RESOLVE_EVENT);
}

// ============================================================================
// PDA Seeds
// ============================================================================

/// Market state PDA seed
pub const MARKET_SEED: &[u8] = b"market";

// ============================================================================
// Instruction Sizes
// ============================================================================

/// Discriminator size in bytes
pub const DISCRIMINATOR_SIZE: usize = 8;
/// Truth signal size in bytes
pub const TRUTH_SIGNAL_SIZE: usize = 32;
/// resolve_event argument struct size: event_id (8) + truth_signal (32) + fee (8)
pub const RESOLVE_EVENT_ARGS_SIZE: usize = 8 + TRUTH_SIGNAL_SIZE + 8;
/// Full resolve_event instruction data size
pub const RESOLVE_EVENT_DATA_SIZE: usize = DISCRIMINATOR_SIZE + RESOLVE_EVENT_ARGS_SIZE;
/// Number of accounts referenced by resolve_event
pub const RESOLVE_EVENT_ACCOUNT_COUNT: usize = 6;
