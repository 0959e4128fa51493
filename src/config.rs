//! Process configuration.
//!
//! Every value can be given as a flag or through its environment variable; a
//! `.env` file in the working directory is loaded first if present.

use std::str::FromStr;

use clap::Parser;
use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use thiserror::Error;

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing value or unparseable command line
    #[error("{0}")]
    Args(#[from] clap::Error),

    /// A required value was present but empty
    #[error("{0} must not be empty")]
    Empty(&'static str),

    /// Value is not a base58 public key
    #[error("{name} is not a valid public key: {reason}")]
    InvalidPubkey { name: &'static str, reason: String },

    /// Secret key is not a JSON byte array
    #[error("WALLET_SECRET_KEY must be a JSON array of bytes: {0}")]
    SecretKeyFormat(#[from] serde_json::Error),

    /// Secret key bytes do not form a keypair
    #[error("WALLET_SECRET_KEY is not a valid keypair: {0}")]
    InvalidKeypair(String),
}

/// Result type alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Command line / environment arguments.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "MCP server for Auracle balances and event resolution", long_about = None)]
pub struct Args {
    /// Solana JSON-RPC endpoint
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: String,

    /// Auracle program address
    #[arg(long, env = "PROGRAM_ID")]
    pub program_id: String,

    /// AURA token mint address
    #[arg(long, env = "AURACLE_MINT")]
    pub auracle_mint: String,

    /// Signer secret key as a JSON byte array
    #[arg(long, env = "WALLET_SECRET_KEY", hide_env_values = true)]
    pub wallet_secret_key: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated configuration.
pub struct Config {
    pub rpc_url: String,
    pub program_id: Pubkey,
    pub auracle_mint: Pubkey,
    pub wallet: Keypair,
    pub verbose: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use solana_signer::Signer;
        f.debug_struct("Config")
            .field("rpc_url", &self.rpc_url)
            .field("program_id", &self.program_id)
            .field("auracle_mint", &self.auracle_mint)
            .field("wallet", &self.wallet.pubkey())
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl Config {
    /// Load `.env`, then parse flags and environment.
    pub fn load() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();
        let args = Args::try_parse()?;
        Self::from_args(args)
    }

    /// Validate raw arguments into typed configuration.
    pub fn from_args(args: Args) -> ConfigResult<Self> {
        let rpc_url = non_empty("RPC_URL", args.rpc_url)?;
        let program_id = parse_pubkey("PROGRAM_ID", &args.program_id)?;
        let auracle_mint = parse_pubkey("AURACLE_MINT", &args.auracle_mint)?;
        let wallet = parse_keypair(&non_empty("WALLET_SECRET_KEY", args.wallet_secret_key)?)?;

        Ok(Self {
            rpc_url,
            program_id,
            auracle_mint,
            wallet,
            verbose: args.verbose,
        })
    }
}

fn non_empty(name: &'static str, value: String) -> ConfigResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty(name));
    }
    Ok(trimmed.to_string())
}

fn parse_pubkey(name: &'static str, value: &str) -> ConfigResult<Pubkey> {
    let value = non_empty(name, value.to_string())?;
    Pubkey::from_str(&value).map_err(|e| ConfigError::InvalidPubkey {
        name,
        reason: e.to_string(),
    })
}

/// Parse a solana-keygen style JSON byte array into a keypair.
pub fn parse_keypair(json: &str) -> ConfigResult<Keypair> {
    let bytes: Vec<u8> = serde_json::from_str(json)?;
    Keypair::try_from(bytes.as_slice()).map_err(|e| ConfigError::InvalidKeypair(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_signer::Signer;

    fn args(secret: String) -> Args {
        Args {
            rpc_url: "https://api.devnet.solana.com".to_string(),
            program_id: Pubkey::new_unique().to_string(),
            auracle_mint: Pubkey::new_unique().to_string(),
            wallet_secret_key: secret,
            verbose: false,
        }
    }

    fn secret_json(keypair: &Keypair) -> String {
        serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_valid_config() {
        let keypair = Keypair::new();
        let config = Config::from_args(args(secret_json(&keypair))).unwrap();

        assert_eq!(config.wallet.pubkey(), keypair.pubkey());
        assert_eq!(config.rpc_url, "https://api.devnet.solana.com");
    }

    #[test]
    fn test_empty_rpc_url_rejected() {
        let mut a = args(secret_json(&Keypair::new()));
        a.rpc_url = "  ".to_string();

        assert!(matches!(Config::from_args(a), Err(ConfigError::Empty("RPC_URL"))));
    }

    #[test]
    fn test_bad_program_id_rejected() {
        let mut a = args(secret_json(&Keypair::new()));
        a.program_id = "not-a-pubkey".to_string();

        assert!(matches!(
            Config::from_args(a),
            Err(ConfigError::InvalidPubkey { name: "PROGRAM_ID", .. })
        ));
    }

    #[test]
    fn test_secret_key_not_json() {
        assert!(matches!(
            Config::from_args(args("deadbeef".to_string())),
            Err(ConfigError::SecretKeyFormat(_))
        ));
    }

    #[test]
    fn test_secret_key_wrong_length() {
        assert!(matches!(
            Config::from_args(args("[1,2,3]".to_string())),
            Err(ConfigError::InvalidKeypair(_))
        ));
    }

    #[test]
    fn test_args_from_flags() {
        let program_id = Pubkey::new_unique().to_string();
        let mint = Pubkey::new_unique().to_string();
        let secret = secret_json(&Keypair::new());
        let parsed = Args::try_parse_from([
            "auracle-mcp",
            "--rpc-url",
            "http://localhost:8899",
            "--program-id",
            program_id.as_str(),
            "--auracle-mint",
            mint.as_str(),
            "--wallet-secret-key",
            secret.as_str(),
            "-v",
        ])
        .unwrap();

        assert!(parsed.verbose);
        let config = Config::from_args(parsed).unwrap();
        assert_eq!(config.program_id.to_string(), program_id);
        assert_eq!(config.auracle_mint.to_string(), mint);
    }
}
