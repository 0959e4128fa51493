//! Ledger connection abstraction.
//!
//! [`Ledger`] is the narrow set of RPC calls the tools need. [`RpcLedger`] backs it
//! with a Solana nonblocking RPC client; tests substitute an in-memory mock.

use async_trait::async_trait;
use solana_hash::Hash;
use solana_message::Message;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_transaction::Transaction;

use crate::program::error::SdkResult;

/// Read and submit operations against a single ledger endpoint.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Native balance in lamports.
    async fn get_balance(&self, pubkey: &Pubkey) -> SdkResult<u64>;

    /// UI amount held by a token account; `None` when the amount is unavailable.
    async fn get_token_account_balance(&self, token_account: &Pubkey) -> SdkResult<Option<f64>>;

    async fn get_latest_blockhash(&self) -> SdkResult<Hash>;

    /// Fee in lamports the network would charge for `message`.
    async fn get_fee_for_message(&self, message: &Message) -> SdkResult<u64>;

    /// Submit a signed transaction without waiting for confirmation.
    async fn send_transaction(&self, transaction: &Transaction) -> SdkResult<Signature>;
}

#[cfg(feature = "rpc")]
pub use rpc::RpcLedger;

#[cfg(feature = "rpc")]
mod rpc {
    use super::*;
    use solana_client::nonblocking::rpc_client::RpcClient;
    use solana_commitment_config::CommitmentConfig;

    /// [`Ledger`] backed by a Solana JSON-RPC endpoint.
    pub struct RpcLedger {
        /// RPC client for Solana
        pub rpc_client: RpcClient,
    }

    impl RpcLedger {
        /// Connect to `rpc_url` with `confirmed` commitment.
        pub fn new(rpc_url: &str) -> Self {
            Self {
                rpc_client: RpcClient::new_with_commitment(
                    rpc_url.to_string(),
                    CommitmentConfig::confirmed(),
                ),
            }
        }

        /// Wrap an existing RpcClient.
        pub fn from_rpc_client(rpc_client: RpcClient) -> Self {
            Self { rpc_client }
        }

        pub fn url(&self) -> String {
            self.rpc_client.url()
        }
    }

    #[async_trait]
    impl Ledger for RpcLedger {
        async fn get_balance(&self, pubkey: &Pubkey) -> SdkResult<u64> {
            Ok(self.rpc_client.get_balance(pubkey).await?)
        }

        async fn get_token_account_balance(
            &self,
            token_account: &Pubkey,
        ) -> SdkResult<Option<f64>> {
            let amount = self.rpc_client.get_token_account_balance(token_account).await?;
            Ok(amount.ui_amount)
        }

        async fn get_latest_blockhash(&self) -> SdkResult<Hash> {
            Ok(self.rpc_client.get_latest_blockhash().await?)
        }

        async fn get_fee_for_message(&self, message: &Message) -> SdkResult<u64> {
            Ok(self.rpc_client.get_fee_for_message(message).await?)
        }

        async fn send_transaction(&self, transaction: &Transaction) -> SdkResult<Signature> {
            Ok(self.rpc_client.send_transaction(transaction).await?)
        }
    }

}
