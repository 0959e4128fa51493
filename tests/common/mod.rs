//! In-memory ledger shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use auracle_mcp::prelude::*;
use solana_hash::Hash;
use solana_keypair::Keypair;
use solana_message::Message;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_transaction::Transaction;

pub const BLOCKHASH_B1: Hash = Hash::new_from_array([0xB1; 32]);

/// Scripted ledger that records every call.
pub struct MockLedger {
    pub blockhash: Hash,
    pub fee: u64,
    pub lamports: Result<u64, String>,
    pub token_balance: Result<Option<f64>, String>,
    pub send_error: Option<String>,

    pub balance_calls: AtomicUsize,
    pub token_balance_calls: AtomicUsize,
    pub blockhash_calls: AtomicUsize,
    pub fee_calls: AtomicUsize,
    pub send_calls: AtomicUsize,

    pub fee_messages: Mutex<Vec<Message>>,
    pub sent: Mutex<Vec<Transaction>>,
}

impl Default for MockLedger {
    fn default() -> Self {
        Self {
            blockhash: BLOCKHASH_B1,
            fee: 5000,
            lamports: Ok(1_500_000_000),
            token_balance: Ok(Some(12.5)),
            send_error: None,
            balance_calls: AtomicUsize::new(0),
            token_balance_calls: AtomicUsize::new(0),
            blockhash_calls: AtomicUsize::new(0),
            fee_calls: AtomicUsize::new(0),
            send_calls: AtomicUsize::new(0),
            fee_messages: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        }
    }
}

impl MockLedger {
    pub fn total_calls(&self) -> usize {
        self.balance_calls.load(Ordering::SeqCst)
            + self.token_balance_calls.load(Ordering::SeqCst)
            + self.blockhash_calls.load(Ordering::SeqCst)
            + self.fee_calls.load(Ordering::SeqCst)
            + self.send_calls.load(Ordering::SeqCst)
    }

    pub fn sent_transactions(&self) -> Vec<Transaction> {
        self.sent.lock().unwrap().clone()
    }

    pub fn priced_messages(&self) -> Vec<Message> {
        self.fee_messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Ledger for MockLedger {
    async fn get_balance(&self, _pubkey: &Pubkey) -> SdkResult<u64> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        self.lamports.clone().map_err(SdkError::Rpc)
    }

    async fn get_token_account_balance(&self, _token_account: &Pubkey) -> SdkResult<Option<f64>> {
        self.token_balance_calls.fetch_add(1, Ordering::SeqCst);
        self.token_balance.clone().map_err(SdkError::Rpc)
    }

    async fn get_latest_blockhash(&self) -> SdkResult<Hash> {
        self.blockhash_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.blockhash)
    }

    async fn get_fee_for_message(&self, message: &Message) -> SdkResult<u64> {
        self.fee_calls.fetch_add(1, Ordering::SeqCst);
        self.fee_messages.lock().unwrap().push(message.clone());
        Ok(self.fee)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> SdkResult<Signature> {
        self.send_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = &self.send_error {
            return Err(SdkError::Rpc(e.clone()));
        }
        self.sent.lock().unwrap().push(transaction.clone());
        Ok(transaction.signatures[0])
    }
}

/// Client over `ledger` with a fresh signer, program and mint.
pub fn client_with(ledger: Arc<MockLedger>) -> AuracleClient {
    AuracleClient::new(
        ledger,
        Arc::new(Keypair::new()),
        Pubkey::new_unique(),
        Pubkey::new_unique(),
    )
}

/// Fee recorded in the first instruction of a compiled message.
pub fn recorded_fee(message: &Message) -> u64 {
    let data = &message.instructions[0].data;
    assert_eq!(data.len(), 56);
    u64::from_le_bytes(data[48..56].try_into().unwrap())
}

/// Truth signal carried by the first instruction of a compiled message.
pub fn recorded_truth_signal(message: &Message) -> [u8; 32] {
    message.instructions[0].data[16..48].try_into().unwrap()
}
