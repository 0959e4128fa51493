//! Resolve events by their human-readable name.

use solana_pubkey::Pubkey;

use crate::program::{event_id_from_name, AuracleClient, QueryTruthRequest, ResolveOutcome, SdkResult};

/// Resolves events named in natural language, mapping each name to its event id.
#[derive(Debug, Clone)]
pub struct NaturalLanguageOracle {
    client: AuracleClient,
}

impl NaturalLanguageOracle {
    pub fn new(client: AuracleClient) -> Self {
        Self { client }
    }

    /// Event id the program uses for `name`.
    pub fn event_id(&self, name: &str) -> u64 {
        event_id_from_name(name)
    }

    /// Resolve the event called `name`.
    pub async fn verify_by_name(
        &self,
        name: &str,
        truth_signal: Option<Vec<u8>>,
        payer_token_account: Option<Pubkey>,
    ) -> SdkResult<ResolveOutcome> {
        let event_id = event_id_from_name(name);
        tracing::info!(name, event_id, "Resolving named event");

        self.client
            .query_truth(QueryTruthRequest {
                event_id,
                truth_signal,
                payer_token_account,
            })
            .await
    }
}
