use crate::chain::{ChainError, ClusterClient, TokenProgramClient};
use crate::wallet::{KeypairSlot, ReadyState, WalletAdapter, WalletAdapterKind, WalletError};
use async_trait::async_trait;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::transaction::Transaction;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Default)]
pub(crate) struct MockCluster {
    pub lamports: AtomicU64,
    pub balance_calls: AtomicUsize,
    pub in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub fail_balance: AtomicBool,
    pub balance_delay: Mutex<Option<Duration>>,
    accounts: Mutex<HashSet<Pubkey>>,
    sent: Mutex<Vec<Transaction>>,
}

impl MockCluster {
    pub fn with_lamports(lamports: u64) -> Self {
        let cluster = Self::default();
        cluster.lamports.store(lamports, Ordering::SeqCst);
        cluster
    }

    pub fn add_account(&self, address: Pubkey) {
        self.accounts.lock().unwrap().insert(address);
    }

    pub fn sent_transactions(&self) -> Vec<Transaction> {
        self.sent.lock().unwrap().clone()
    }

    pub fn balance_calls(&self) -> usize {
        self.balance_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClusterClient for MockCluster {
    fn endpoint(&self) -> String {
        "mock://cluster".to_string()
    }

    async fn get_balance(&self, _address: &Pubkey) -> Result<u64, ChainError> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        let delay = *self.balance_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_balance.load(Ordering::SeqCst) {
            return Err(ChainError::Rpc("connection refused".to_string()));
        }
        Ok(self.lamports.load(Ordering::SeqCst))
    }

    async fn account_exists(&self, address: &Pubkey) -> Result<bool, ChainError> {
        Ok(self.accounts.lock().unwrap().contains(address))
    }

    async fn minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, ChainError> {
        Ok(data_len as u64 * 10)
    }

    async fn latest_blockhash(&self) -> Result<Hash, ChainError> {
        Ok(Hash::new_unique())
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature, ChainError> {
        self.sent.lock().unwrap().push(transaction.clone());
        Ok(transaction.signatures.first().copied().unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenCall {
    CreateMint { decimals: u8 },
    TokenAccount { mint: Pubkey, owner: Pubkey },
    MintTo { mint: Pubkey, amount: u64 },
    Transfer { mint: Pubkey, destination: Pubkey, amount: u64, decimals: u8 },
}

#[derive(Default)]
pub(crate) struct MockTokenProgram {
    pub fail: AtomicBool,
    calls: Mutex<Vec<TokenCall>>,
}

impl MockTokenProgram {
    pub fn calls(&self) -> Vec<TokenCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: TokenCall) -> Result<(), ChainError> {
        self.calls.lock().unwrap().push(call);
        if self.fail.load(Ordering::SeqCst) {
            return Err(ChainError::Rpc("simulated failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TokenProgramClient for MockTokenProgram {
    async fn create_mint(
        &self,
        _payer: &dyn WalletAdapter,
        _mint_authority: &Pubkey,
        _freeze_authority: Option<&Pubkey>,
        decimals: u8,
    ) -> Result<Pubkey, ChainError> {
        self.record(TokenCall::CreateMint { decimals })?;
        Ok(Pubkey::new_unique())
    }

    async fn get_or_create_associated_token_account(
        &self,
        _payer: &dyn WalletAdapter,
        mint: &Pubkey,
        owner: &Pubkey,
    ) -> Result<Pubkey, ChainError> {
        self.record(TokenCall::TokenAccount {
            mint: *mint,
            owner: *owner,
        })?;
        Ok(spl_associated_token_account::get_associated_token_address(
            owner, mint,
        ))
    }

    async fn mint_to(
        &self,
        _payer: &dyn WalletAdapter,
        mint: &Pubkey,
        _destination: &Pubkey,
        amount: u64,
    ) -> Result<Signature, ChainError> {
        self.record(TokenCall::MintTo {
            mint: *mint,
            amount,
        })?;
        Ok(Signature::new_unique())
    }

    async fn transfer(
        &self,
        _payer: &dyn WalletAdapter,
        mint: &Pubkey,
        _source: &Pubkey,
        destination: &Pubkey,
        amount: u64,
        decimals: u8,
    ) -> Result<Signature, ChainError> {
        self.record(TokenCall::Transfer {
            mint: *mint,
            destination: *destination,
            amount,
            decimals,
        })?;
        Ok(Signature::new_unique())
    }
}

/// Wallet holding a fresh in-memory keypair.
#[derive(Debug)]
pub(crate) struct TestWallet {
    keypair: Keypair,
    slot: KeypairSlot,
    fail_connect: bool,
}

impl TestWallet {
    pub fn disconnected() -> Self {
        Self {
            keypair: Keypair::new(),
            slot: KeypairSlot::default(),
            fail_connect: false,
        }
    }

    /// Wallet whose connect request is always rejected.
    pub fn failing() -> Self {
        Self {
            fail_connect: true,
            ..Self::disconnected()
        }
    }

    pub fn connected() -> Self {
        let wallet = Self::disconnected();
        wallet.slot.store(wallet.keypair.insecure_clone());
        wallet
    }

    pub fn address(&self) -> Pubkey {
        solana_sdk::signature::Signer::pubkey(&self.keypair)
    }
}

#[async_trait]
impl WalletAdapter for TestWallet {
    fn kind(&self) -> WalletAdapterKind {
        WalletAdapterKind::KeypairFile
    }

    fn ready_state(&self) -> ReadyState {
        ReadyState::Installed
    }

    async fn connect(&self) -> Result<Pubkey, WalletError> {
        if self.fail_connect {
            return Err(WalletError::Load {
                kind: self.kind(),
                reason: "User rejected the request".to_string(),
            });
        }
        Ok(self.slot.store(self.keypair.insecure_clone()))
    }

    async fn disconnect(&self) {
        self.slot.clear();
    }

    fn public_key(&self) -> Option<Pubkey> {
        self.slot.public_key()
    }

    async fn sign_transaction(&self, transaction: &mut Transaction) -> Result<(), WalletError> {
        self.slot.sign(transaction)
    }
}
