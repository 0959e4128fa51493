//! Async client for interacting with the Auracle program.
//!
//! Resolution is a two-phase protocol. [`AuracleClient::estimate`] prices a
//! provisional transaction carrying a zero fee, and [`AuracleClient::finalize`]
//! re-serializes the instruction with that fee, since the program records the fee
//! itself, and submits it against the same blockhash.

use std::fmt;
use std::sync::Arc;

use solana_keypair::Keypair;
use solana_message::Message;
use solana_pubkey::Pubkey;
use solana_signer::Signer;
use solana_transaction::Transaction;

use crate::program::error::{SdkError, SdkResult};
use crate::program::instructions::build_resolve_event_ix;
use crate::program::ledger::Ledger;
use crate::program::pda::get_market_state_pda;
use crate::program::types::{
    FeeEstimate, QueryTruthRequest, ResolveEventParams, ResolveOutcome, WalletBalance,
};
use crate::program::utils::{get_auracle_token_ata, to_truth_signal};

/// Supplies a truth signal for an event when the caller gives none.
pub type TruthSignalResolver = Arc<dyn Fn(u64) -> [u8; 32] + Send + Sync>;

/// AURA balance reported when the token account is missing or unreadable.
pub const ABSENT_AURA_BALANCE: f64 = 0.0;

/// Fallback rule for the token sub-query of a balance lookup: a failed query or
/// an amount the ledger could not express counts as zero.
pub fn aura_or_zero(token_balance: SdkResult<Option<f64>>) -> f64 {
    match token_balance {
        Ok(Some(amount)) => amount,
        Ok(None) => ABSENT_AURA_BALANCE,
        Err(e) => {
            tracing::debug!(error = %e, "AURA balance unavailable, reporting zero");
            ABSENT_AURA_BALANCE
        }
    }
}

/// Client for interacting with the Auracle program.
#[derive(Clone)]
pub struct AuracleClient {
    ledger: Arc<dyn Ledger>,
    payer: Arc<Keypair>,
    /// Program ID
    pub program_id: Pubkey,
    /// AURA token mint
    pub auracle_mint: Pubkey,
    truth_signal_resolver: Option<TruthSignalResolver>,
}

impl fmt::Debug for AuracleClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuracleClient")
            .field("payer", &self.payer.pubkey())
            .field("program_id", &self.program_id)
            .field("auracle_mint", &self.auracle_mint)
            .finish_non_exhaustive()
    }
}

impl AuracleClient {
    /// Create a new client.
    pub fn new(
        ledger: Arc<dyn Ledger>,
        payer: Arc<Keypair>,
        program_id: Pubkey,
        auracle_mint: Pubkey,
    ) -> Self {
        Self {
            ledger,
            payer,
            program_id,
            auracle_mint,
            truth_signal_resolver: None,
        }
    }

    /// Set the resolver consulted by [`Self::query_truth`] when no signal is given.
    pub fn with_truth_signal_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(u64) -> [u8; 32] + Send + Sync + 'static,
    {
        self.truth_signal_resolver = Some(Arc::new(resolver));
        self
    }

    /// Public key of the signing wallet.
    pub fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    /// The signer's AURA associated token account.
    pub fn payer_token_account(&self) -> Pubkey {
        get_auracle_token_ata(&self.payer.pubkey(), &self.auracle_mint)
    }

    /// Get a Market State PDA.
    pub fn get_market_state_pda(&self, event_id: u64) -> Pubkey {
        get_market_state_pda(event_id, &self.program_id).0
    }

    /// Resolve-event parameters for this client's payer and mint.
    pub fn resolve_event_params(
        &self,
        event_id: u64,
        truth_signal: [u8; 32],
        transaction_fee_lamports: u64,
    ) -> ResolveEventParams {
        ResolveEventParams {
            payer: self.payer.pubkey(),
            auracle_mint: self.auracle_mint,
            event_id,
            truth_signal,
            transaction_fee_lamports,
            payer_token_account: None,
        }
    }

    // ========================================================================
    // Balances
    // ========================================================================

    /// Fetch native and AURA balances of the signer.
    ///
    /// Both queries are issued together. Only the native balance can fail the call;
    /// the token balance goes through [`aura_or_zero`].
    pub async fn get_balance(&self) -> SdkResult<WalletBalance> {
        let wallet = self.payer.pubkey();
        let token_account = self.payer_token_account();

        let (lamports, token_balance) = tokio::join!(
            self.ledger.get_balance(&wallet),
            self.ledger.get_token_account_balance(&token_account),
        );

        Ok(WalletBalance {
            wallet: wallet.to_string(),
            lamports: lamports?,
            aura: aura_or_zero(token_balance),
        })
    }

    // ========================================================================
    // Two-Phase Resolution
    // ========================================================================

    /// Phase one: price a provisional resolve_event transaction.
    ///
    /// `params.transaction_fee_lamports` is ignored; the provisional instruction
    /// always records a zero fee.
    pub async fn estimate(&self, params: ResolveEventParams) -> SdkResult<FeeEstimate> {
        let provisional = params.with_fee(0);
        let ix = build_resolve_event_ix(&provisional, &self.program_id);

        let blockhash = self.ledger.get_latest_blockhash().await?;
        let message = Message::new_with_blockhash(&[ix], Some(&provisional.payer), &blockhash);
        let fee_lamports = self.ledger.get_fee_for_message(&message).await?;

        tracing::debug!(
            event_id = provisional.event_id,
            fee_lamports,
            %blockhash,
            "Estimated resolve_event fee"
        );

        Ok(FeeEstimate {
            params: provisional,
            blockhash,
            provisional_message: message,
            fee_lamports,
        })
    }

    /// Phase two: rebuild the instruction with the estimated fee, sign, and submit.
    pub async fn finalize(&self, estimate: FeeEstimate) -> SdkResult<ResolveOutcome> {
        let params = estimate.params.with_fee(estimate.fee_lamports);
        if params.payer != self.payer.pubkey() {
            return Err(SdkError::InvalidPubkey(format!(
                "payer {} does not match signer {}",
                params.payer,
                self.payer.pubkey()
            )));
        }

        let ix = build_resolve_event_ix(&params, &self.program_id);
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&params.payer),
            &[self.payer.as_ref()],
            estimate.blockhash,
        );

        let signature = self.ledger.send_transaction(&tx).await?;
        tracing::info!(
            event_id = params.event_id,
            fee_lamports = params.transaction_fee_lamports,
            %signature,
            "Submitted resolve_event"
        );

        Ok(ResolveOutcome {
            signature,
            event_id: params.event_id,
            fee_lamports: params.transaction_fee_lamports,
        })
    }

    /// Estimate then finalize a resolution for `event_id`.
    pub async fn resolve_event(
        &self,
        event_id: u64,
        truth_signal: [u8; 32],
    ) -> SdkResult<ResolveOutcome> {
        let params = self.resolve_event_params(event_id, truth_signal, 0);
        let estimate = self.estimate(params).await?;
        self.finalize(estimate).await
    }

    /// Resolve an event, filling in the truth signal and token account as needed.
    ///
    /// A missing signal is taken from the configured resolver; with no resolver
    /// the request is rejected before any network call.
    pub async fn query_truth(&self, request: QueryTruthRequest) -> SdkResult<ResolveOutcome> {
        let truth_signal = match (&request.truth_signal, &self.truth_signal_resolver) {
            (Some(bytes), _) => to_truth_signal(bytes)?,
            (None, Some(resolver)) => resolver(request.event_id),
            (None, None) => {
                return Err(SdkError::MissingField(
                    "truth_signal (or configure a truth signal resolver)".to_string(),
                ))
            }
        };

        let params = ResolveEventParams {
            payer_token_account: request.payer_token_account,
            ..self.resolve_event_params(request.event_id, truth_signal, 0)
        };
        let estimate = self.estimate(params).await?;
        self.finalize(estimate).await
    }
}
