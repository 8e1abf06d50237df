use async_trait::async_trait;
use sol_token_tool::chain::{ChainError, ClusterClient, TokenProgramClient};
use sol_token_tool::wallet::{ReadyState, WalletAdapter, WalletAdapterKind, WalletError};
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Cluster that answers balance requests from memory and counts them.
pub struct FakeCluster {
    lamports: u64,
    balance_calls: AtomicUsize,
}

impl FakeCluster {
    pub fn new(lamports: u64) -> Self {
        Self {
            lamports,
            balance_calls: AtomicUsize::new(0),
        }
    }

    pub fn balance_calls(&self) -> usize {
        self.balance_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClusterClient for FakeCluster {
    fn endpoint(&self) -> String {
        "fake://cluster".to_string()
    }

    async fn get_balance(&self, _address: &Pubkey) -> Result<u64, ChainError> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.lamports)
    }

    async fn account_exists(&self, _address: &Pubkey) -> Result<bool, ChainError> {
        Ok(true)
    }

    async fn minimum_balance_for_rent_exemption(
        &self,
        _data_len: usize,
    ) -> Result<u64, ChainError> {
        Ok(0)
    }

    async fn latest_blockhash(&self) -> Result<Hash, ChainError> {
        Ok(Hash::new_unique())
    }

    async fn send_and_confirm(&self, _transaction: &Transaction) -> Result<Signature, ChainError> {
        Ok(Signature::new_unique())
    }
}

/// Token program that records the amounts it was asked to mint.
///
/// With `hold` set, `create_mint` waits until `release` is called.
#[derive(Default)]
pub struct FakeTokenProgram {
    create_mint_calls: AtomicUsize,
    minted: Mutex<Vec<u64>>,
    released: Notify,
    pub fail: AtomicBool,
    pub hold: AtomicBool,
}

impl FakeTokenProgram {
    pub fn create_mint_calls(&self) -> usize {
        self.create_mint_calls.load(Ordering::SeqCst)
    }

    pub fn minted(&self) -> Vec<u64> {
        self.minted.lock().unwrap().clone()
    }

    pub fn release(&self) {
        self.released.notify_one();
    }

    fn check(&self) -> Result<(), ChainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ChainError::Rpc("simulated failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TokenProgramClient for FakeTokenProgram {
    async fn create_mint(
        &self,
        _payer: &dyn WalletAdapter,
        _mint_authority: &Pubkey,
        _freeze_authority: Option<&Pubkey>,
        _decimals: u8,
    ) -> Result<Pubkey, ChainError> {
        self.create_mint_calls.fetch_add(1, Ordering::SeqCst);
        if self.hold.load(Ordering::SeqCst) {
            self.released.notified().await;
        }
        self.check()?;
        Ok(Pubkey::new_unique())
    }

    async fn get_or_create_associated_token_account(
        &self,
        _payer: &dyn WalletAdapter,
        _mint: &Pubkey,
        _owner: &Pubkey,
    ) -> Result<Pubkey, ChainError> {
        self.check()?;
        Ok(Pubkey::new_unique())
    }

    async fn mint_to(
        &self,
        _payer: &dyn WalletAdapter,
        _mint: &Pubkey,
        _destination: &Pubkey,
        amount: u64,
    ) -> Result<Signature, ChainError> {
        self.check()?;
        self.minted.lock().unwrap().push(amount);
        Ok(Signature::new_unique())
    }

    async fn transfer(
        &self,
        _payer: &dyn WalletAdapter,
        _mint: &Pubkey,
        _source: &Pubkey,
        _destination: &Pubkey,
        _amount: u64,
        _decimals: u8,
    ) -> Result<Signature, ChainError> {
        self.check()?;
        Ok(Signature::new_unique())
    }
}

/// Always-ready wallet backed by an in-memory keypair.
#[derive(Debug)]
pub struct FakeWallet {
    keypair: Keypair,
    connected: AtomicBool,
}

impl FakeWallet {
    pub fn new() -> Self {
        Self {
            keypair: Keypair::new(),
            connected: AtomicBool::new(false),
        }
    }

    pub fn address(&self) -> Pubkey {
        self.keypair.pubkey()
    }
}

#[async_trait]
impl WalletAdapter for FakeWallet {
    fn kind(&self) -> WalletAdapterKind {
        WalletAdapterKind::KeypairFile
    }

    fn ready_state(&self) -> ReadyState {
        ReadyState::Installed
    }

    async fn connect(&self) -> Result<Pubkey, WalletError> {
        self.connected.store(true, Ordering::SeqCst);
        Ok(self.address())
    }

    async fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }

    fn public_key(&self) -> Option<Pubkey> {
        self.connected
            .load(Ordering::SeqCst)
            .then(|| self.address())
    }

    async fn sign_transaction(&self, transaction: &mut Transaction) -> Result<(), WalletError> {
        let blockhash = transaction.message.recent_blockhash;
        transaction
            .try_partial_sign(&[&self.keypair], blockhash)
            .map_err(|e| WalletError::Signing(e.to_string()))
    }
}
