//! Error types for the Auracle on-chain program module.

use thiserror::Error;

/// SDK-specific errors
#[derive(Debug, Error)]
pub enum SdkError {
    /// RPC client error (blockhash fetch, fee query, submission, balance)
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Invalid data length
    #[error("Invalid data length: expected {expected}, got {actual}")]
    InvalidDataLength { expected: usize, actual: usize },

    /// Truth signal could not be decoded
    #[error("Invalid truth_signal: {0}")]
    InvalidTruthSignal(String),

    /// Invalid event id
    #[error("Invalid event_id: {0}")]
    InvalidEventId(String),

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Invalid pubkey
    #[error("Invalid pubkey: {0}")]
    InvalidPubkey(String),
}

impl SdkError {
    /// Whether this error came from the caller's input rather than the network.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SdkError::InvalidDataLength { .. }
                | SdkError::InvalidTruthSignal(_)
                | SdkError::InvalidEventId(_)
                | SdkError::MissingField(_)
                | SdkError::InvalidPubkey(_)
        )
    }
}

#[cfg(feature = "rpc")]
impl From<solana_client::client_error::ClientError> for SdkError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        SdkError::Rpc(err.to_string())
    }
}

/// Result type alias for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;
