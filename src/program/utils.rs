//! Utility functions for the Auracle SDK.
//!
//! This module provides helpers for ATA derivation, discriminators, event ids and
//! truth signal decoding.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use sha2::{Digest, Sha256};
use solana_pubkey::Pubkey;

use crate::program::constants::{
    DISCRIMINATOR_SIZE, GLOBAL_NAMESPACE, TOKEN_PROGRAM_ID, TRUTH_SIGNAL_SIZE,
};
use crate::program::error::{SdkError, SdkResult};

/// Padding optional, non-canonical trailing bits ignored.
const LENIENT_CONFIG: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

/// Standard alphabet (`+`, `/`).
const BASE64_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT_CONFIG);

/// URL-safe alphabet (`-`, `_`).
const BASE64_URL_SAFE_LENIENT: GeneralPurpose =
    GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT_CONFIG);

// ============================================================================
// Associated Token Account Helpers
// ============================================================================

/// Get the Associated Token Address for a wallet and mint.
///
/// Uses the standard Solana ATA derivation. The owner must be a regular wallet
/// address; off-curve owners are not supported.
pub fn get_associated_token_address(
    wallet: &Pubkey,
    mint: &Pubkey,
    token_program_id: &Pubkey,
) -> Pubkey {
    spl_associated_token_account::get_associated_token_address_with_program_id(
        wallet,
        mint,
        token_program_id,
    )
}

/// Get the ATA holding AURA tokens (SPL Token) for a wallet.
pub fn get_auracle_token_ata(wallet: &Pubkey, auracle_mint: &Pubkey) -> Pubkey {
    get_associated_token_address(wallet, auracle_mint, &TOKEN_PROGRAM_ID)
}

// ============================================================================
// Discriminators & Identifiers
// ============================================================================

/// Compute the 8-byte discriminator of a global program instruction.
///
/// `sha256("global:<name>")[..8]`
pub fn instruction_discriminator(name: &str) -> [u8; DISCRIMINATOR_SIZE] {
    let digest = Sha256::digest(format!("{}:{}", GLOBAL_NAMESPACE, name).as_bytes());
    let mut out = [0u8; DISCRIMINATOR_SIZE];
    out.copy_from_slice(&digest[..DISCRIMINATOR_SIZE]);
    out
}

/// Derive an event id from a human-readable event name.
///
/// `sha256(name)[..8]` read as a little-endian u64.
pub fn event_id_from_name(name: &str) -> u64 {
    let digest = Sha256::digest(name.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

// ============================================================================
// Truth Signal Decoding
// ============================================================================

/// Decode a truth signal string without checking its length.
///
/// An optional `0x` prefix is stripped; if what remains is exactly 64 hex
/// characters it is hex-decoded, otherwise the whole input, prefix included, is
/// base64-decoded with the standard alphabet, falling back to the URL-safe one.
/// `None` and the empty string decode to 32 zero bytes.
pub fn decode_truth_signal(input: Option<&str>) -> SdkResult<Vec<u8>> {
    let input = match input {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(vec![0u8; TRUTH_SIGNAL_SIZE]),
    };

    let normalized = input.strip_prefix("0x").unwrap_or(input);
    if is_hex_64(normalized) {
        return hex::decode(normalized).map_err(|e| SdkError::InvalidTruthSignal(e.to_string()));
    }

    BASE64_LENIENT
        .decode(input)
        .or_else(|_| BASE64_URL_SAFE_LENIENT.decode(input))
        .map_err(|e| SdkError::InvalidTruthSignal(format!("not hex-64 or base64: {}", e)))
}

/// Decode a truth signal string and require exactly 32 bytes.
pub fn parse_truth_signal(input: Option<&str>) -> SdkResult<[u8; TRUTH_SIGNAL_SIZE]> {
    let bytes = decode_truth_signal(input)?;
    to_truth_signal(&bytes)
}

/// Convert a byte slice to a fixed 32-byte truth signal.
pub fn to_truth_signal(bytes: &[u8]) -> SdkResult<[u8; TRUTH_SIGNAL_SIZE]> {
    validate_32_bytes(bytes)?;
    let mut out = [0u8; TRUTH_SIGNAL_SIZE];
    out.copy_from_slice(bytes);
    Ok(out)
}

fn is_hex_64(s: &str) -> bool {
    s.len() == 2 * TRUTH_SIGNAL_SIZE && s.bytes().all(|b| b.is_ascii_hexdigit())
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Validate that a buffer is exactly 32 bytes.
pub fn validate_32_bytes(buffer: &[u8]) -> SdkResult<()> {
    if buffer.len() != 32 {
        return Err(SdkError::InvalidDataLength {
            expected: 32,
            actual: buffer.len(),
        });
    }
    Ok(())
}
