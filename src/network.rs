//! Well-known Solana RPC endpoints.

/// Public devnet RPC endpoint.
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Public mainnet-beta RPC endpoint.
pub const MAINNET_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Local test validator.
pub const LOCALNET_RPC_URL: &str = "http://127.0.0.1:8899";
