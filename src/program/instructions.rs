//! Instruction builders for the Auracle program.
//!
//! This module provides functions to build transaction instructions for interacting
//! with the Auracle program.

use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::program::constants::{
    RESOLVE_EVENT_DATA_SIZE, RESOLVE_EVENT_DISCRIMINATOR, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID,
};
use crate::program::pda::get_market_state_pda;
use crate::program::types::ResolveEventParams;
use crate::program::utils::get_auracle_token_ata;

// ============================================================================
// Helper Functions
// ============================================================================

/// Create an account meta for a signer+writable account.
fn signer_mut(pubkey: Pubkey) -> AccountMeta {
    AccountMeta::new(pubkey, true)
}

/// Create an account meta for a writable account.
fn writable(pubkey: Pubkey) -> AccountMeta {
    AccountMeta::new(pubkey, false)
}

/// Create an account meta for a read-only account.
fn readonly(pubkey: Pubkey) -> AccountMeta {
    AccountMeta::new_readonly(pubkey, false)
}

/// Discriminator of the resolve_event instruction.
pub fn resolve_event_discriminator() -> [u8; 8] {
    *RESOLVE_EVENT_DISCRIMINATOR
}

/// Serialize resolve_event instruction data.
///
/// Layout: [discriminator (8)][event_id (8 LE)][truth_signal (32)][fee (8 LE)]
pub fn serialize_resolve_event_data(params: &ResolveEventParams) -> Vec<u8> {
    let mut data = Vec::with_capacity(RESOLVE_EVENT_DATA_SIZE);
    data.extend_from_slice(&resolve_event_discriminator());
    data.extend_from_slice(&params.event_id.to_le_bytes());
    data.extend_from_slice(&params.truth_signal);
    data.extend_from_slice(&params.transaction_fee_lamports.to_le_bytes());
    data
}

// ============================================================================
// Instruction Builders
// ============================================================================

/// Build ResolveEvent instruction.
///
/// Records the truth signal for an event and charges the recorded fee.
///
/// Accounts:
/// 0. payer (signer, mut)
/// 1. market_state (mut) - Market State PDA
/// 2. payer_token_account (mut) - Payer's AURA token account
/// 3. auracle_mint (readonly)
/// 4. token_program (readonly)
/// 5. system_program (readonly)
pub fn build_resolve_event_ix(params: &ResolveEventParams, program_id: &Pubkey) -> Instruction {
    let (market_state, _) = get_market_state_pda(params.event_id, program_id);
    let payer_token_account = params
        .payer_token_account
        .unwrap_or_else(|| get_auracle_token_ata(&params.payer, &params.auracle_mint));

    let keys = vec![
        signer_mut(params.payer),
        writable(market_state),
        writable(payer_token_account),
        readonly(params.auracle_mint),
        readonly(TOKEN_PROGRAM_ID),
        readonly(SYSTEM_PROGRAM_ID),
    ];

    Instruction {
        program_id: *program_id,
        accounts: keys,
        data: serialize_resolve_event_data(params),
    }
}
