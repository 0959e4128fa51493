//! PDA (Program Derived Address) derivation functions.
//!
//! These must reproduce the on-chain derivation bit for bit.

use solana_pubkey::Pubkey;

use crate::program::constants::MARKET_SEED;

/// Get a Market State PDA.
///
/// Seeds: ["market", event_id (8 bytes LE)]
pub fn get_market_state_pda(event_id: u64, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MARKET_SEED, &event_id.to_le_bytes()], program_id)
}
